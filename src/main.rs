use std::env;

use anyhow::Context;
use log::{info, warn};
use tokio::{signal, task};

use gradient_regression::{
    config::RunConfig,
    data::DatasetReader,
    regression::{LinearRegression, Regression},
    storage::JsonStore,
    training::{CancelToken, LogObserver},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Checkpoints are reported at info level, show them unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from_args(env::args().skip(1))?;
    info!("reading dataset from {}", config.dataset.display());

    let (train_set, test_set) = DatasetReader::from_path(&config.dataset)?
        .split(config.label_column, config.train_fraction)
        .context("failed to split the dataset")?;
    info!(
        "{} training and {} test examples",
        train_set.len(),
        test_set.len()
    );

    let mut rng = config.rng();
    let mut model = LinearRegression::new(config.alias.clone(), train_set, &mut rng)?;
    let store = config.store_dir.clone().map(JsonStore::new);

    if let (true, Some(store)) = (config.resume, &store) {
        model.load_params(store)?;
        info!("resuming '{}' from saved parameters", model.alias());
    }

    let cancel = CancelToken::new();
    let mut observer = LogObserver::new(config.alias.clone()).with_cancel(cancel.clone());
    let training = config.training;

    // Training is CPU-bound, keep it off the async workers so ctrl-c is still served.
    let mut handle = task::spawn_blocking(move || {
        let stats = model.train(&training, &mut observer)?;
        anyhow::Ok((model, stats))
    });

    let (model, stats) = tokio::select! {
        ret = &mut handle => ret??,
        // A failure to install the handler disables this branch and training runs to completion.
        Ok(()) = signal::ctrl_c() => {
            info!("received SIGINT, stopping at the next iteration");
            cancel.cancel();
            handle.await??
        }
    };

    info!(
        "trained for {} iterations{}",
        stats.iterations(),
        if stats.cancelled() { " (cancelled)" } else { "" }
    );

    if let Some(mut store) = store {
        model.save_params(&mut store)?;
        info!("saved parameters of '{}'", model.alias());
    }

    if test_set.is_empty() {
        warn!("the test set is empty, skipping evaluation");
        return Ok(());
    }

    let cost = model.cost(Some(test_set.as_slice()))?;
    println!("Cost on test set: {cost}");

    Ok(())
}
