use indexmap::IndexMap;

use crate::core::Axis;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartSnapshot, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let axis_titles: IndexMap<String, bool> = [Axis::X, Axis::Y]
            .into_iter()
            .flat_map(|axis| self.controller.axis_labels(axis))
            .map(|label| (label.field.to_string(), label.active))
            .collect();

        ChartSnapshot {
            viewport: self.config.viewport,
            plot: self.plot,
            selection: self.controller.selection(),
            x_domain: self.scale(Axis::X).domain(),
            y_domain: self.scale(Axis::Y).domain(),
            clock_ms: self.clock_ms,
            animating: self.is_animating(),
            hovered: self.hover.hovered(),
            axis_titles,
            markers: self.marker_positions(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
