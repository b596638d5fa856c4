use crate::core::{Axis, AxisSelection, LinearScale, PlotArea, RecordSet, Viewport};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{
    AxisLabelState, HoverState, SelectionChange, SelectionController, SubscriptionId,
};
use crate::render::Renderer;

use super::transition::AxisState;
use super::validation::validate_render_style;
use super::{ChartEvent, RenderStyle, ScatterChartConfig};

/// Interactive scatter chart: records, scales, selection and animation clock.
///
/// The chart is driven entirely by its host. Pointer input arrives through
/// `pointer_*` calls, time through `advance_time`/`set_time`, and frames leave
/// through `render`.
pub struct ScatterChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterChartConfig,
    pub(super) style: RenderStyle,
    pub(super) plot: PlotArea,
    pub(super) records: RecordSet,
    pub(super) controller: SelectionController,
    pub(super) x_axis: AxisState,
    pub(super) y_axis: AxisState,
    pub(super) hover: HoverState,
    pub(super) clock_ms: f64,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.controller.selection()
    }

    /// Registers a callback invoked after every accepted axis-title click.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&SelectionChange) + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.controller.subscriber_count()
    }

    #[must_use]
    pub fn axis_labels(&self, axis: Axis) -> Vec<AxisLabelState> {
        self.controller.axis_labels(axis).into_vec()
    }

    /// Authoritative scale of `axis`, ignoring any running animation.
    #[must_use]
    pub fn scale(&self, axis: Axis) -> LinearScale {
        self.axis_state(axis).target_scale()
    }

    /// Scale currently used for the ticks of `axis`.
    #[must_use]
    pub fn displayed_scale(&self, axis: Axis) -> LinearScale {
        self.axis_state(axis).scale_at(self.clock_ms)
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.x_axis.is_animating() || self.y_axis.is_animating()
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<usize> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = validate_render_style(style)?;
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn axis_state(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub(super) fn axis_state_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }
}
