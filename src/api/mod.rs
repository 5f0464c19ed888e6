mod chart_config;
mod engine;

pub use chart_config::{ChartConfig, DEFAULT_PALETTE, DEFAULT_RADAR_MAX_VALUE};
pub use engine::{ChartEngine, RenderOutcome};
