use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use super::ParamStore;
use crate::{RegressionErr, Result, params::LrParams};

/// Stores each model's parameters as `<dir>/<alias>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a new `JsonStore` rooted at `dir`, the directory is created lazily on save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, alias: &str) -> PathBuf {
        self.dir.join(format!("{alias}.json"))
    }

    /// Writes to a sibling `.tmp` file, then renames it over `path`.
    fn write(&self, path: &Path, params: &LrParams) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(&mut writer, params)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp, path)
    }

    fn read(&self, path: &Path) -> io::Result<LrParams> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Aliases are file names inside the store directory, never paths.
fn check_alias(alias: &str) -> io::Result<()> {
    if alias.is_empty() || alias.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{alias}' is not a valid file name"),
        ));
    }

    Ok(())
}

impl ParamStore for JsonStore {
    fn save(&mut self, alias: &str, params: &LrParams) -> Result<()> {
        let path = self.path_for(alias);
        debug!("saving parameters of '{alias}' to {}", path.display());

        check_alias(alias)
            .and_then(|_| self.write(&path, params))
            .map_err(|source| RegressionErr::Persistence {
                alias: alias.to_string(),
                source,
            })
    }

    fn load(&self, alias: &str) -> Result<LrParams> {
        let path = self.path_for(alias);
        debug!("loading parameters of '{alias}' from {}", path.display());

        check_alias(alias)
            .and_then(|_| self.read(&path))
            .map_err(|source| RegressionErr::Persistence {
            alias: alias.to_string(),
            source,
        })
    }
}
