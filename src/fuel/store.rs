use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

use super::{CarProperties, FuelEntry, FuelReport};

const CONSUMPTIONS_FILE: &str = "fuel_consumptions.json";
const PROPERTIES_FILE: &str = "car_properties.json";

/// Ledger directory laid out as `<root>/<car_id>/{fuel_consumptions,car_properties}.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelStore {
    root: PathBuf,
}

impl FuelStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the car directories under the root, sorted.
    pub fn car_ids(&self) -> ChartResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| io_error(&self.root, &e))?;
        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.root, &e))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| io_error(&entry.path(), &e))?
                .is_dir();
            if !is_dir {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                ids.push(name.to_owned());
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn load_properties(&self, car_id: &str) -> ChartResult<CarProperties> {
        read_json(&self.root.join(car_id).join(PROPERTIES_FILE))
    }

    pub fn load_entries(&self, car_id: &str) -> ChartResult<Vec<FuelEntry>> {
        read_json(&self.root.join(car_id).join(CONSUMPTIONS_FILE))
    }

    /// Loads and enriches the ledger of a known car.
    ///
    /// Only ids returned by [`FuelStore::car_ids`] are accepted, so a
    /// request can never reach outside the root.
    pub fn load_report(&self, car_id: &str) -> ChartResult<FuelReport> {
        if !self.car_ids()?.iter().any(|id| id == car_id) {
            warn!(car_id, "car not found");
            return Err(ChartError::InvalidData(format!("car not found: {car_id}")));
        }
        let properties = self.load_properties(car_id)?;
        let entries = self.load_entries(car_id)?;
        debug!(car_id, entries = entries.len(), "loaded fuel ledger");
        FuelReport::from_entries(car_id, properties, entries)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ChartResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| io_error(path, &e))?;
    serde_json::from_str(&raw).map_err(|e| {
        ChartError::InvalidData(format!("invalid json in `{}`: {e}", path.display()))
    })
}

fn io_error(path: &Path, err: &std::io::Error) -> ChartError {
    ChartError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
