mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::host::MountPoint;

/// Contract implemented by the external chart renderer.
///
/// The bootstrap hands over the mount exactly as it found it, together with
/// the id it looked up. A renderer that needs a mount reports its absence as
/// an error; the bootstrap does not recover from it.
pub trait Renderer {
    fn render(
        &mut self,
        mount_id: &str,
        mount: Option<&MountPoint>,
        config: &ChartConfig,
    ) -> ChartResult<()>;
}
