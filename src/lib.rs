//! scatter-rs: interactive scatter chart of US state health and demographic data.
//!
//! Records are loaded from CSV, fitted onto padded linear scales and turned
//! into backend-agnostic render frames. Clicking an axis title switches the
//! plotted field and animates ticks and markers towards the new scale.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ScatterChart, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
