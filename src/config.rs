use std::{fs, path::PathBuf};

use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{RegressionErr, Result, training::TrainConfig};

const USAGE: &str = "usage: gradient-regression <dataset.csv> [config.json]";

/// Everything a single run of the binary needs.
///
/// The dataset path comes from the command line, the rest from an optional JSON file whose
/// missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    #[serde(skip)]
    pub dataset: PathBuf,
    pub alias: String,
    pub label_column: usize,
    pub train_fraction: f64,
    pub seed: Option<u64>,
    /// Where parameters are saved after training, nothing is saved if unset.
    pub store_dir: Option<PathBuf>,
    /// Start from the parameters saved in `store_dir` instead of random ones.
    pub resume: bool,
    pub training: TrainConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::new(),
            alias: "lr".to_string(),
            label_column: 3,
            train_fraction: 0.7,
            seed: None,
            store_dir: None,
            resume: false,
            training: TrainConfig::default(),
        }
    }
}

impl RunConfig {
    /// Builds the configuration from the process arguments, program name excluded.
    ///
    /// # Errors
    /// `InvalidConfig` if the dataset path is missing, if the config file can't be read or parsed
    /// or if the resulting configuration is inconsistent.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let dataset = args
            .next()
            .ok_or_else(|| RegressionErr::InvalidConfig(USAGE.to_string()))?;

        let mut config = match args.next() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if args.next().is_some() {
            return Err(RegressionErr::InvalidConfig(USAGE.to_string()));
        }

        config.dataset = PathBuf::from(dataset);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RegressionErr::InvalidConfig(format!("cannot read '{path}': {e}")))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| RegressionErr::InvalidConfig(format!("invalid JSON: {e}")))
    }

    /// Checks the cross-field constraints, the training hyperparameters included.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.train_fraction) {
            return Err(RegressionErr::InvalidConfig(format!(
                "train fraction must be within [0, 1], got {}",
                self.train_fraction
            )));
        }

        if self.alias.is_empty() || self.alias.contains(['/', '\\']) {
            return Err(RegressionErr::InvalidConfig(format!(
                "alias '{}' must be a plain file name",
                self.alias
            )));
        }

        if self.resume && self.store_dir.is_none() {
            return Err(RegressionErr::InvalidConfig(
                "resume requires a store_dir".to_string(),
            ));
        }

        self.training.validate()
    }

    /// Returns a seeded generator if a seed was configured, an OS seeded one otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = RunConfig::from_args(args(&["data.csv"])).unwrap();

        assert_eq!(config.dataset, PathBuf::from("data.csv"));
        assert_eq!(config.alias, "lr");
        assert_eq!(config.label_column, 3);
        assert_eq!(config.train_fraction, 0.7);
        assert_eq!(config.training, TrainConfig::new(0.00006, 150, 5));
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn missing_dataset() {
        assert!(matches!(
            RunConfig::from_args(args(&[])),
            Err(RegressionErr::InvalidConfig(_))
        ));
    }

    #[test]
    fn too_many_args() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let path = path.to_string_lossy().to_string();
        assert!(RunConfig::from_args(args(&["data.csv", &path])).is_ok());
        assert!(RunConfig::from_args(args(&["data.csv", &path, "extra"])).is_err());
    }

    #[test]
    fn partial_json() {
        let config = RunConfig::from_json(
            r#"{
                "alias": "advertising",
                "seed": 7,
                "store_dir": "/tmp/params",
                "training": { "learning_rate": 0.01, "parallel": true }
            }"#,
        )
        .unwrap();

        assert_eq!(config.alias, "advertising");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.label_column, 3);
        assert_eq!(config.training.learning_rate, 0.01);
        assert_eq!(config.training.iterations, 150);
        assert!(config.training.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            RunConfig::from_json("{ nope"),
            Err(RegressionErr::InvalidConfig(_))
        ));
    }

    #[test]
    fn inconsistent_values() {
        let resume = RunConfig::from_json(r#"{ "resume": true }"#).unwrap();
        assert!(resume.validate().is_err());

        let fraction = RunConfig::from_json(r#"{ "train_fraction": 1.2 }"#).unwrap();
        assert!(fraction.validate().is_err());

        let interval = RunConfig::from_json(r#"{ "training": { "checkpoint_every": 0 } }"#).unwrap();
        assert!(interval.validate().is_err());

        let alias = RunConfig::from_json(r#"{ "alias": "../outside" }"#).unwrap();
        assert!(matches!(
            alias.validate(),
            Err(RegressionErr::InvalidConfig(_))
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = RunConfig {
            seed: Some(11),
            ..Default::default()
        };

        let a: f64 = config.rng().random();
        let b: f64 = config.rng().random();
        assert_eq!(a, b);
    }
}
