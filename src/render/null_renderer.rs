use tracing::debug;

use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::host::MountPoint;
use crate::render::Renderer;

/// Headless renderer used by tests and tools.
///
/// It enforces the mount requirement and the config invariants, then records
/// what it received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_mount: Option<MountPoint>,
    pub last_label_count: usize,
    pub last_point_count: usize,
}

impl Renderer for NullRenderer {
    fn render(
        &mut self,
        mount_id: &str,
        mount: Option<&MountPoint>,
        config: &ChartConfig,
    ) -> ChartResult<()> {
        let mount = mount.ok_or_else(|| ChartError::MissingElement {
            selector: format!("#{mount_id}"),
        })?;
        config.validate()?;
        self.render_count += 1;
        self.last_mount = Some(mount.clone());
        self.last_label_count = config.labels().len();
        self.last_point_count = config.values().len();
        debug!(
            mount = %mount.id,
            labels = self.last_label_count,
            points = self.last_point_count,
            "null renderer received chart"
        );
        Ok(())
    }
}
