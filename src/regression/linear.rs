use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use super::Regression;
use crate::{
    RegressionErr, Result,
    data::Sample,
    params::LrParams,
    storage::ParamStore,
    training::{Checkpoint, LogObserver, TrainConfig, TrainObserver, TrainStats},
    vector::Vector,
};

/// Ordinary least squares linear regression fitted with full-batch gradient descent.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    alias: String,
    params: LrParams,
    dataset: Vec<Sample>,
}

impl LinearRegression {
    /// Creates a new `LinearRegression` with randomly initialized parameters.
    ///
    /// # Arguments
    /// * `alias` - The name the parameters are persisted under.
    /// * `dataset` - The training set, its first example dictates the amount of features.
    /// * `rng` - The random source for the initial parameters.
    ///
    /// # Errors
    /// `EmptyDataset` if `dataset` has no examples.
    pub fn new<R: Rng + ?Sized>(
        alias: impl Into<String>,
        dataset: Vec<Sample>,
        rng: &mut R,
    ) -> Result<Self> {
        let first = dataset.first().ok_or(RegressionErr::EmptyDataset {
            what: "model construction",
        })?;

        let params = LrParams::random(first.feature_size(), rng);

        Ok(Self {
            alias: alias.into(),
            params,
            dataset,
        })
    }

    /// Creates a new `LinearRegression` starting from the given parameters.
    ///
    /// # Errors
    /// `EmptyDataset` if `dataset` has no examples, `DimensionMismatch` if `params` doesn't
    /// match the amount of features of its first example.
    pub fn with_params(
        alias: impl Into<String>,
        dataset: Vec<Sample>,
        params: LrParams,
    ) -> Result<Self> {
        let first = dataset.first().ok_or(RegressionErr::EmptyDataset {
            what: "model construction",
        })?;

        if first.feature_size() != params.feature_size() {
            return Err(RegressionErr::DimensionMismatch {
                what: "initial parameters",
                got: params.feature_size(),
                expected: first.feature_size(),
            });
        }

        Ok(Self {
            alias: alias.into(),
            params,
            dataset,
        })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn params(&self) -> &LrParams {
        &self.params
    }

    pub fn dataset(&self) -> &[Sample] {
        &self.dataset
    }

    pub fn feature_size(&self) -> usize {
        self.params.feature_size()
    }

    /// Trains the model logging each checkpoint, without any cancellation.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of each step.
    /// * `iterations` - The amount of full-batch updates.
    /// * `max_to_save` - Log the training cost every this many iterations.
    pub fn fit(
        &mut self,
        learning_rate: f64,
        iterations: usize,
        max_to_save: usize,
    ) -> Result<TrainStats> {
        let config = TrainConfig::new(learning_rate, iterations, max_to_save);
        let mut observer = LogObserver::new(self.alias.clone());
        self.train(&config, &mut observer)
    }

    /// Accumulates the unscaled gradient of the cost over the whole training set.
    fn gradient(&self) -> Result<(Vector, f64)> {
        let mut delta_w = Vector::zeros(self.feature_size());
        let mut delta_b = 0.;

        for sample in &self.dataset {
            accumulate(&self.params, sample, &mut delta_w, &mut delta_b)?;
        }

        Ok((delta_w, delta_b))
    }

    /// Same as `gradient` but folding over the examples in parallel, the summation order differs
    /// so results may diverge slightly.
    fn par_gradient(&self) -> Result<(Vector, f64)> {
        let n = self.feature_size();
        let params = &self.params;

        self.dataset
            .par_iter()
            .try_fold(
                || (Vector::zeros(n), 0.),
                |(mut delta_w, mut delta_b), sample| {
                    accumulate(params, sample, &mut delta_w, &mut delta_b)?;
                    Ok::<_, RegressionErr>((delta_w, delta_b))
                },
            )
            .try_reduce(
                || (Vector::zeros(n), 0.),
                |(mut delta_w, delta_b), (other_w, other_b)| {
                    delta_w.add(&other_w)?;
                    Ok((delta_w, delta_b + other_b))
                },
            )
    }
}

/// Adds the contribution of a single example to the gradient accumulators.
fn accumulate(
    params: &LrParams,
    sample: &Sample,
    delta_w: &mut Vector,
    delta_b: &mut f64,
) -> Result<()> {
    let error = params.predict(&sample.x)? - sample.y;

    // `predict` already checked that `x` has one value per weight.
    for j in 0..params.feature_size() {
        delta_w[j] += sample.x[j] * error;
    }

    *delta_b += error;
    Ok(())
}

impl Regression for LinearRegression {
    fn predict(&self, x: &Vector) -> Result<f64> {
        self.params.predict(x)
    }

    fn cost(&self, dataset: Option<&[Sample]>) -> Result<f64> {
        let dataset = dataset.unwrap_or(self.dataset.as_slice());
        let m = dataset.len();

        if m == 0 {
            return Err(RegressionErr::EmptyDataset { what: "cost" });
        }

        let mut cost = 0.;
        for sample in dataset {
            let y_hat = self.predict(&sample.x)?;
            cost += (y_hat - sample.y) * (y_hat - sample.y);
        }

        Ok(cost / (2. * m as f64))
    }

    fn train(
        &mut self,
        config: &TrainConfig,
        observer: &mut dyn TrainObserver,
    ) -> Result<TrainStats> {
        config.validate()?;

        let m = self.dataset.len();
        let mut stats = TrainStats::default();
        info!(
            "training '{}' over {m} examples for {} iterations, lr={}",
            self.alias, config.iterations, config.learning_rate
        );

        for index in 0..config.iterations {
            if observer.is_cancelled() {
                info!("training of '{}' cancelled after {index} iterations", self.alias);
                stats.mark_cancelled();
                break;
            }

            let (mut delta_w, delta_b) = if config.parallel {
                self.par_gradient()?
            } else {
                self.gradient()?
            };

            delta_w.scale_by(config.learning_rate / m as f64);
            self.params
                .update(&delta_w, delta_b, config.learning_rate, m)?;
            stats.bump_iteration();
            debug!("finished iteration {}", index + 1);

            if (index + 1) % config.checkpoint_every == 0 {
                let cost = self.cost(None)?;
                observer.checkpoint(Checkpoint {
                    iteration: index + 1,
                    cost,
                });
                stats.bump_checkpoint();
            }
        }

        Ok(stats)
    }

    fn save_params(&self, store: &mut dyn ParamStore) -> Result<()> {
        store.save(&self.alias, &self.params)
    }

    fn load_params(&mut self, store: &dyn ParamStore) -> Result<()> {
        let params = store.load(&self.alias)?;

        if params.feature_size() != self.feature_size() {
            return Err(RegressionErr::DimensionMismatch {
                what: "loaded parameters",
                got: params.feature_size(),
                expected: self.feature_size(),
            });
        }

        self.params = params;
        Ok(())
    }
}
