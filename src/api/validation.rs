use crate::error::{ChartError, ChartResult};

use super::BootstrapConfig;

pub(super) fn validate_bootstrap_config(config: &BootstrapConfig) -> ChartResult<()> {
    if config.mount_id.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "mount id must not be empty".to_owned(),
        ));
    }
    validate_selector("labels", &config.labels_selector)?;
    validate_selector("data", &config.data_selector)?;
    if config.labels_selector == config.data_selector {
        return Err(ChartError::InvalidData(
            "labels and data selectors must differ".to_owned(),
        ));
    }
    Ok(())
}

fn validate_selector(name: &str, selector: &str) -> ChartResult<()> {
    if selector.trim().is_empty() {
        return Err(ChartError::InvalidData(format!(
            "{name} selector must not be empty"
        )));
    }
    Ok(())
}
