//! Chart configuration handed to the renderer.
//!
//! Field names serialize to the renderer's wire shape (`type`, `data.labels`,
//! `data.datasets[0].data`, `options.plugins.legend.display`, ...).

mod ticks;

pub use ticks::{TickOptions, format_number};

use serde::{Deserialize, Serialize};

use crate::decode::{LabelSet, ValueSeries};
use crate::error::{ChartError, ChartResult};

/// Default suffix appended to y-axis tick labels.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "€";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: LabelSet,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub data: ValueSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: DisplayToggle,
    pub title: DisplayToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayToggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub ticks: TickOptions,
}

impl ChartOptions {
    /// Responsive chart, legend and title hidden, y ticks suffixed with
    /// `currency_suffix`.
    #[must_use]
    pub fn currency_line(currency_suffix: impl Into<String>) -> Self {
        Self {
            responsive: true,
            plugins: PluginOptions {
                legend: DisplayToggle { display: false },
                title: DisplayToggle { display: false },
            },
            scales: ScaleOptions {
                y: AxisOptions {
                    ticks: TickOptions::with_suffix(currency_suffix),
                },
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::currency_line(DEFAULT_CURRENCY_SUFFIX)
    }
}

impl ChartConfig {
    /// Single-series line chart over `labels` and `values`.
    #[must_use]
    pub fn line(labels: LabelSet, values: ValueSeries, options: ChartOptions) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels,
                datasets: vec![Dataset { data: values }],
            },
            options,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.data.labels.as_slice()
    }

    /// Samples of the first dataset, empty when no dataset is present.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }

    /// Formats a y-axis tick the way the renderer will display it.
    #[must_use]
    pub fn format_y_tick(&self, value: f64) -> String {
        self.options.scales.y.ticks.format(value)
    }

    /// Checks the structural invariants of a configuration received from
    /// outside the bootstrap.
    pub fn validate(&self) -> ChartResult<()> {
        if self.data.datasets.len() != 1 {
            return Err(ChartError::InvalidData(format!(
                "line chart expects exactly one dataset, got {}",
                self.data.datasets.len()
            )));
        }
        Ok(())
    }
}
