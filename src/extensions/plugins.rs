use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisSelection, Viewport};
use crate::interaction::SelectionChange;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub selection: AxisSelection,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub records_len: usize,
    pub hovered: Option<usize>,
    pub clock_ms: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SelectionChanged(SelectionChange),
    TooltipShown { record_index: usize },
    TooltipHidden { record_index: usize },
    TransitionSettled { axis: Axis },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read chart context without mutating chart
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: PluginContext);
}
