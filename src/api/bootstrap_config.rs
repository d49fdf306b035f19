use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CURRENCY_SUFFIX;
use crate::error::{ChartError, ChartResult};

use super::validation::validate_bootstrap_config;

/// Where the bootstrap finds its elements and how it labels the y-axis.
///
/// Serializable so hosts can ship it next to their page templates. Missing
/// fields fall back to the defaults of the standard page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
    #[serde(default = "default_labels_selector")]
    pub labels_selector: String,
    #[serde(default = "default_data_selector")]
    pub data_selector: String,
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
            labels_selector: default_labels_selector(),
            data_selector: default_data_selector(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

impl BootstrapConfig {
    #[must_use]
    pub fn with_mount_id(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }

    #[must_use]
    pub fn with_labels_selector(mut self, selector: impl Into<String>) -> Self {
        self.labels_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_data_selector(mut self, selector: impl Into<String>) -> Self {
        self.data_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_currency_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.currency_suffix = suffix.into();
        self
    }

    /// Parses a (possibly partial) JSON object and validates the result.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bootstrap config: {e}"))
        })?;
        validate_bootstrap_config(&config)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize bootstrap config: {e}"))
        })
    }
}

fn default_mount_id() -> String {
    "myChart".to_owned()
}

fn default_labels_selector() -> String {
    "#labels".to_owned()
}

fn default_data_selector() -> String {
    "#data".to_owned()
}

fn default_currency_suffix() -> String {
    DEFAULT_CURRENCY_SUFFIX.to_owned()
}
