use crate::{
    Result,
    data::Sample,
    storage::ParamStore,
    training::{TrainConfig, TrainObserver, TrainStats},
    vector::Vector,
};

/// The capabilities every regression model offers, so callers don't depend on a specific variant.
pub trait Regression {
    /// Predicts the target of `x`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `x` has a different amount of features than the model.
    fn predict(&self, x: &Vector) -> Result<f64>;

    /// Computes half the mean squared error of the model over `dataset`, or over the training set
    /// when `None` is given.
    ///
    /// # Errors
    /// `EmptyDataset` if there are no examples, `DimensionMismatch` if any example has the wrong
    /// amount of features.
    fn cost(&self, dataset: Option<&[Sample]>) -> Result<f64>;

    /// Trains the model starting from its current parameters.
    ///
    /// # Arguments
    /// * `config` - The hyperparameters of the run.
    /// * `observer` - Receives the periodic checkpoints and may cancel the run.
    ///
    /// # Returns
    /// Statistics of the run, or the first error found. On error the parameters hold the result
    /// of the last fully completed iteration.
    fn train(&mut self, config: &TrainConfig, observer: &mut dyn TrainObserver)
    -> Result<TrainStats>;

    /// Persists the parameters under the model's alias.
    fn save_params(&self, store: &mut dyn ParamStore) -> Result<()>;

    /// Replaces the parameters with the ones stored under the model's alias.
    fn load_params(&mut self, store: &dyn ParamStore) -> Result<()>;
}
