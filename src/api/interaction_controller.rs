use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Axis, Field};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverChange, PointerTarget, SelectionChange};
use crate::render::Renderer;

use super::layout_helpers::{axis_title_layouts, centred_text_box};
use super::scale_coordinator::fit_axis;
use super::{AxisTitleMode, ChartEvent, ScatterChart, TitleLayout};

impl<R: Renderer> ScatterChart<R> {
    /// Makes `field` the active field of its axis.
    ///
    /// Rebuilds that axis's scale and starts animating ticks, markers and
    /// labels towards it. Clicking the already active field, or any title in
    /// [`AxisTitleMode::ActiveOnly`], changes nothing and returns `None`.
    pub fn click_label(&mut self, field: Field) -> ChartResult<Option<SelectionChange>> {
        if self.config.title_mode == AxisTitleMode::ActiveOnly {
            trace!(%field, "axis titles are static, click ignored");
            return Ok(None);
        }
        if self.controller.active_field(field.axis()) == field {
            return Ok(None);
        }

        // Fit before mutating the selection so a failure leaves state untouched.
        let (scale, positions) = fit_axis(&self.records, field, self.plot, self.config.padding)?;
        let Some(change) = self.controller.click_label(field) else {
            return Ok(None);
        };

        let now_ms = self.clock_ms;
        let timing = self.config.timing;
        self.axis_state_mut(change.axis)
            .retarget(scale, positions, now_ms, timing);
        self.emit_plugin_event(ChartEvent::SelectionChanged(change));
        Ok(Some(change))
    }

    /// Dispatches a click in canvas pixels to the axis title under it.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> ChartResult<Option<SelectionChange>> {
        match self.hit_test(x, y) {
            Some(PointerTarget::AxisTitle(field)) => self.click_label(field),
            _ => Ok(None),
        }
    }

    /// Updates the hovered marker from a pointer position in canvas pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverChange {
        let candidate = self
            .hit_test(x, y)
            .and_then(PointerTarget::record_index);
        let change = self.hover.update(candidate);
        self.emit_hover_change(change);
        change
    }

    /// Shows the tooltip of record `index` regardless of overlapping markers.
    pub fn hover_record(&mut self, index: usize) -> ChartResult<HoverChange> {
        if index >= self.records.len() {
            return Err(ChartError::InvalidData(format!(
                "record index {index} out of range for {} records",
                self.records.len()
            )));
        }
        let change = self.hover.update(Some(index));
        self.emit_hover_change(change);
        Ok(change)
    }

    pub fn pointer_leave(&mut self) -> HoverChange {
        let change = self.hover.clear();
        self.emit_hover_change(change);
        change
    }

    /// Topmost chart element under a canvas position.
    ///
    /// Markers are tested against their on-screen positions, latest drawn
    /// first, before axis titles.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PointerTarget> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let radius = self.config.marker_radius_px;
        let label_font = self.style.marker_label_font_size_px;
        for marker in self.marker_positions().iter().rev() {
            let (cx, cy) = self.plot.to_canvas(marker.x, marker.y);
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                return Some(PointerTarget::Marker(marker.record_index));
            }

            let (label_x, label_y) = self.plot.to_canvas(marker.label_x, marker.label_y);
            let abbr = &self.records[marker.record_index].abbr;
            if centred_text_box(abbr, label_x, label_y, label_font, self.style).contains(x, y) {
                return Some(PointerTarget::MarkerLabel(marker.record_index));
            }
        }

        self.title_layouts()
            .into_iter()
            .find(|title| title.hit_box.contains(x, y))
            .map(|title| PointerTarget::AxisTitle(title.field))
    }

    /// Axis titles as currently laid out, in canvas pixels.
    #[must_use]
    pub fn title_layouts(&self) -> SmallVec<[TitleLayout; 6]> {
        let selection = self.controller.selection();
        axis_title_layouts(self.plot, selection, self.config.title_mode, self.style)
    }

    /// Moves the animation clock forward by `delta_ms`.
    pub fn advance_time(&mut self, delta_ms: f64) -> ChartResult<()> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "time delta must be finite and >= 0".to_owned(),
            ));
        }
        self.set_time(self.clock_ms + delta_ms)
    }

    /// Sets the animation clock. Time never runs backwards.
    pub fn set_time(&mut self, now_ms: f64) -> ChartResult<()> {
        if !now_ms.is_finite() {
            return Err(ChartError::InvalidData("time must be finite".to_owned()));
        }
        if now_ms < self.clock_ms {
            warn!(
                now_ms,
                clock_ms = self.clock_ms,
                "ignoring clock update that runs backwards"
            );
            return Ok(());
        }

        self.clock_ms = now_ms;
        trace!(clock_ms = now_ms, "clock advanced");
        for axis in [Axis::X, Axis::Y] {
            if self.axis_state_mut(axis).settle(now_ms) {
                debug!(?axis, clock_ms = now_ms, "axis transition settled");
                self.emit_plugin_event(ChartEvent::TransitionSettled { axis });
            }
        }
        Ok(())
    }

    fn emit_hover_change(&mut self, change: HoverChange) {
        match change {
            HoverChange::Unchanged => {}
            HoverChange::Entered(record_index) => {
                trace!(record_index, "tooltip shown");
                self.emit_plugin_event(ChartEvent::TooltipShown { record_index });
            }
            HoverChange::Left(record_index) => {
                trace!(record_index, "tooltip hidden");
                self.emit_plugin_event(ChartEvent::TooltipHidden { record_index });
            }
            HoverChange::Moved { from, to } => {
                trace!(from, to, "tooltip moved");
                self.emit_plugin_event(ChartEvent::TooltipHidden { record_index: from });
                self.emit_plugin_event(ChartEvent::TooltipShown { record_index: to });
            }
        }
    }
}
