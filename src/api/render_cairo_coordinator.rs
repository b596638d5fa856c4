use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

use super::{ChartEvent, ScatterChart};

impl<R: Renderer + CairoContextRenderer> ScatterChart<R> {
    /// Draws the current frame onto a host-owned Cairo context, e.g. the one
    /// handed to a GTK draw callback.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(())
    }
}
