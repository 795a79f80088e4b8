use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::errors::DashboardError;
use crate::records::{ElectricRecord, GasRecord, Vehicle, WaterRecord};

use super::{DataStore, Result};

const DATA_DIR: &str = "data";

/// Read-only store over a directory of JSON record files. A source id `s`
/// resolves to `<root>/<s>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `./data` under the current working directory.
    pub fn new_default() -> Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Self::new(cwd.join(DATA_DIR)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn source_path(&self, source: &str) -> PathBuf {
        self.root.join(format!("{}.json", source))
    }

    fn read_json<T: DeserializeOwned>(&self, source: &str) -> Result<T> {
        let path = self.source_path(source);
        if !path.exists() {
            return Err(DashboardError::NotFound(source.to_string()));
        }
        tracing::debug!(source, path = %path.display(), "loading record source");
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl DataStore for JsonStore {
    fn electric_records(&self, source: &str) -> Result<Vec<ElectricRecord>> {
        self.read_json(source)
    }

    fn gas_records(&self, source: &str) -> Result<Vec<GasRecord>> {
        self.read_json(source)
    }

    fn water_records(&self, source: &str) -> Result<Vec<WaterRecord>> {
        self.read_json(source)
    }

    fn vehicle(&self, source: &str) -> Result<Vehicle> {
        self.read_json(source)
    }
}
