//! dashboard-charts: immediate-mode chart rendering with progressive reveal.
//!
//! Bar, line, pie and radar renderers turn a `Series`, a `ChartConfig` and a
//! `Theme` into primitive drawing calls on a host-owned `DrawingSurface`.
//! Animation is single-threaded and cooperative: the host drives
//! `ChartEngine::tick` from its frame callback.

pub mod animation;
pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod theme;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine, RenderOutcome};
pub use charts::ChartKind;
pub use error::{ChartError, ChartResult};
pub use theme::Theme;
