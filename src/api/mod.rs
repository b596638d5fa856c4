mod chart_config;
mod engine;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod layout_helpers;
mod marker_projection;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod scale_coordinator;
mod snapshot_controller;
mod tooltip;
mod transition;
mod validation;

#[cfg(feature = "cairo-backend")]
mod render_cairo_coordinator;

pub use chart_config::{AxisTitleMode, ScatterChartConfig, TooltipOffset};
pub use engine::ScatterChart;
pub use engine_snapshot::ChartSnapshot;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use layout_helpers::{HitBox, TitleLayout};
pub use marker_projection::MarkerPosition;
pub use render_style::RenderStyle;
pub use tooltip::{TooltipContent, TooltipPanel, field_line};
pub use transition::{Easing, TransitionTiming};

pub use crate::extensions::{ChartEvent, PluginContext};
