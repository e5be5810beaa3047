use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use crate::{RegressionErr, Result, vector::Vector};

/// The parameters of a linear model: one weight per feature plus a bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LrParams {
    weights: Vector,
    bias: f64,
}

impl LrParams {
    /// Creates a new `LrParams` from explicit values.
    pub fn new(weights: Vector, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Creates a new `LrParams` with the bias and every weight drawn uniformly from `[0, 1)`.
    ///
    /// # Arguments
    /// * `feature_size` - The amount of weights.
    /// * `rng` - The random source, the bias is drawn first.
    pub fn random<R: Rng + ?Sized>(feature_size: usize, rng: &mut R) -> Self {
        let bias: f64 = StandardUniform.sample(rng);
        let mut weights = Vector::zeros(feature_size);
        weights.randomize(rng);

        Self { weights, bias }
    }

    pub fn feature_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Computes `weights · x + bias`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `x` doesn't have one value per weight.
    pub fn predict(&self, x: &Vector) -> Result<f64> {
        if x.len() != self.weights.len() {
            return Err(RegressionErr::DimensionMismatch {
                what: "feature vector",
                got: x.len(),
                expected: self.weights.len(),
            });
        }

        Ok(self.weights.dot(x)? + self.bias)
    }

    /// Applies one gradient descent step.
    ///
    /// `delta_w` is expected to be already scaled by the caller, while `delta_b` is the raw
    /// accumulated bias gradient and gets scaled by `learning_rate / dataset_size` here.
    ///
    /// # Errors
    /// `DimensionMismatch` if `delta_w` doesn't match the weights, nothing is modified then.
    pub fn update(
        &mut self,
        delta_w: &Vector,
        delta_b: f64,
        learning_rate: f64,
        dataset_size: usize,
    ) -> Result<()> {
        self.weights.subtract(delta_w)?;
        self.bias -= delta_b * learning_rate / dataset_size as f64;
        Ok(())
    }
}
