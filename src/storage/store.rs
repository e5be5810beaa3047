use crate::{Result, params::LrParams};

/// A named store for model parameters, keyed by the model's alias.
pub trait ParamStore {
    /// Persists `params` under `alias`, replacing anything stored there before.
    ///
    /// # Errors
    /// `Persistence` if the underlying medium fails.
    fn save(&mut self, alias: &str, params: &LrParams) -> Result<()>;

    /// Retrieves the parameters stored under `alias`.
    ///
    /// # Errors
    /// `Persistence` if nothing is stored under `alias` or if it can't be read back.
    fn load(&self, alias: &str) -> Result<LrParams>;
}
