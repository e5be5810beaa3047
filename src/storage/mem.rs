use std::{collections::HashMap, io};

use super::ParamStore;
use crate::{RegressionErr, Result, params::LrParams};

/// An in-memory `ParamStore`, handy for tests and short lived processes.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    params: HashMap<String, LrParams>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParamStore for MemStore {
    fn save(&mut self, alias: &str, params: &LrParams) -> Result<()> {
        self.params.insert(alias.to_string(), params.clone());
        Ok(())
    }

    fn load(&self, alias: &str) -> Result<LrParams> {
        self.params
            .get(alias)
            .cloned()
            .ok_or_else(|| RegressionErr::Persistence {
                alias: alias.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no parameters stored"),
            })
    }
}
