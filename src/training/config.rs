use serde::Deserialize;

use crate::{RegressionErr, Result};

/// Hyperparameters of a gradient descent run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// The *length* of the step taken on each update.
    pub learning_rate: f64,
    /// The amount of full-batch updates to make.
    pub iterations: usize,
    /// Emit a checkpoint every this many iterations.
    pub checkpoint_every: usize,
    /// Accumulate the gradient over the examples in parallel.
    pub parallel: bool,
}

impl TrainConfig {
    /// Creates a new sequential `TrainConfig`.
    pub fn new(learning_rate: f64, iterations: usize, checkpoint_every: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            checkpoint_every,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the configuration before any work is done.
    ///
    /// # Errors
    /// `InvalidConfig` if there are no iterations, if the checkpoint interval is zero or if the
    /// learning rate isn't a finite positive number.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RegressionErr::InvalidConfig(
                "iterations must be greater than zero".into(),
            ));
        }

        if self.checkpoint_every == 0 {
            return Err(RegressionErr::InvalidConfig(
                "checkpoint interval must be greater than zero".into(),
            ));
        }

        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(RegressionErr::InvalidConfig(format!(
                "learning rate must be a finite positive number, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::new(0.00006, 150, 5)
    }
}
