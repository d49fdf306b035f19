mod bootstrap_config;
mod json_contract;
mod validation;

pub use bootstrap_config::BootstrapConfig;
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};

use tracing::{debug, warn};

use crate::config::{ChartConfig, ChartOptions};
use crate::decode::{self, LabelSet, ValueSeries};
use crate::error::{ChartError, ChartResult};
use crate::host::{Document, MountPoint};
use crate::render::Renderer;

/// One-shot chart setup from host document inputs.
///
/// Every step reads the injected document and nothing else, so running the
/// bootstrap twice over an unchanged document yields equal configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartBootstrap {
    config: BootstrapConfig,
}

impl ChartBootstrap {
    pub fn new(config: BootstrapConfig) -> ChartResult<Self> {
        validation::validate_bootstrap_config(&config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Looks up the mount container. Absence is left for the renderer to
    /// report.
    pub fn acquire_mount<D: Document>(&self, doc: &D) -> Option<MountPoint> {
        let mount = doc.element_by_id(&self.config.mount_id);
        if mount.is_none() {
            debug!(mount_id = %self.config.mount_id, "mount element not found");
        }
        mount
    }

    pub fn decode_labels<D: Document>(&self, doc: &D) -> ChartResult<LabelSet> {
        let source = self.read_input(doc, &self.config.labels_selector)?;
        decode::decode_labels(source)
    }

    pub fn decode_values<D: Document>(&self, doc: &D) -> ChartResult<ValueSeries> {
        let source = self.read_input(doc, &self.config.data_selector)?;
        decode::decode_values(source)
    }

    /// Decodes both inputs and assembles the currency line chart.
    pub fn build_config<D: Document>(&self, doc: &D) -> ChartResult<ChartConfig> {
        let labels = self.decode_labels(doc)?;
        let values = self.decode_values(doc)?;
        debug!(
            labels_len = labels.len(),
            values_len = values.len(),
            "built chart config"
        );
        Ok(ChartConfig::line(
            labels,
            values,
            ChartOptions::currency_line(self.config.currency_suffix.as_str()),
        ))
    }

    /// Builds the configuration and hands it to `renderer` together with the
    /// mount. Returns the configuration that was rendered.
    pub fn run<D: Document, R: Renderer>(
        &self,
        doc: &D,
        renderer: &mut R,
    ) -> ChartResult<ChartConfig> {
        let mount = self.acquire_mount(doc);
        let config = self.build_config(doc)?;
        debug!(mount_present = mount.is_some(), "handing chart to renderer");
        if let Err(err) = renderer.render(&self.config.mount_id, mount.as_ref(), &config) {
            warn!(error = %err, "renderer rejected chart");
            return Err(err);
        }
        Ok(config)
    }

    fn read_input<'d, D: Document>(&self, doc: &'d D, selector: &str) -> ChartResult<&'d str> {
        doc.input_value(selector).ok_or_else(|| {
            warn!(selector, "input element not found");
            ChartError::MissingElement {
                selector: selector.to_owned(),
            }
        })
    }
}

/// Runs the bootstrap with the standard page layout.
pub fn bootstrap<D: Document, R: Renderer>(doc: &D, renderer: &mut R) -> ChartResult<ChartConfig> {
    ChartBootstrap::default().run(doc, renderer)
}
