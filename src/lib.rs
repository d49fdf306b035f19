//! chart-bootstrap: builds currency line-chart configurations from host
//! document inputs.
//!
//! A host page carries two inputs, a single-quoted label list (`#labels`) and
//! a JSON number array (`#data`), plus a mount container (`myChart`). The
//! bootstrap decodes both inputs through an injected [`host::Document`],
//! assembles a [`config::ChartConfig`] and hands it to a [`render::Renderer`].
//! The [`fuel`] module produces those inputs from a per-car fuel ledger.

pub mod api;
pub mod config;
pub mod decode;
pub mod error;
pub mod fuel;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{BootstrapConfig, ChartBootstrap, bootstrap};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
