use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, PlotArea, Viewport};

use super::MarkerPosition;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub selection: AxisSelection,
    /// Target domains, ignoring any running transition.
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub clock_ms: f64,
    pub animating: bool,
    pub hovered: Option<usize>,
    /// Axis title text keyed by field column, mapped to its active flag.
    pub axis_titles: IndexMap<String, bool>,
    pub markers: Vec<MarkerPosition>,
}
