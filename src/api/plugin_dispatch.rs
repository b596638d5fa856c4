use crate::core::Axis;
use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartEvent, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            selection: self.controller.selection(),
            x_domain: self.scale(Axis::X).domain(),
            y_domain: self.scale(Axis::Y).domain(),
            records_len: self.records.len(),
            hovered: self.hover.hovered(),
            clock_ms: self.clock_ms,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
