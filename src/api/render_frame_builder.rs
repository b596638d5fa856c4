use crate::core::{Axis, format_tick};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, FontWeight, LayerPrimitives, LinePrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::tooltip::layout_tooltip_panel;
use super::{ScatterChart, TooltipContent, TooltipPanel};

/// Vertical shift that centres a digit run on its tick, as a fraction of the font size.
const Y_TICK_LABEL_BASELINE_RATIO: f64 = 0.32;

impl<R: Renderer> ScatterChart<R> {
    /// Materializes the current chart state, mid-transition included, into a
    /// backend-agnostic frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_bottom_axis(&mut frame.scene);
        self.push_left_axis(&mut frame.scene);
        self.push_markers(&mut frame.scene);
        self.push_titles(&mut frame.scene);
        self.push_tooltip(&mut frame.overlay);
        frame.validate()?;
        Ok(frame)
    }

    /// Tooltip text of the hovered marker.
    #[must_use]
    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        let index = self.hover.hovered()?;
        let record = self.records.get(index)?;
        Some(TooltipContent::for_record(
            index,
            record,
            self.controller.selection(),
        ))
    }

    /// Tooltip panel placement in canvas pixels, following the marker.
    #[must_use]
    pub fn tooltip_panel(&self) -> Option<TooltipPanel> {
        let content = self.tooltip_content()?;
        self.tooltip_panel_for(&content)
    }

    fn tooltip_panel_for(&self, content: &TooltipContent) -> Option<TooltipPanel> {
        let marker = self.marker_position(content.record_index)?;
        let (marker_x, marker_y) = self.plot.to_canvas(marker.x, marker.y);
        Some(layout_tooltip_panel(
            content,
            marker_x,
            marker_y,
            self.config.marker_radius_px,
            self.config.tooltip_offset,
            self.config.viewport,
            self.style,
        ))
    }

    fn push_bottom_axis(&self, layer: &mut LayerPrimitives) {
        let style = self.style;
        let plot = self.plot;
        let axis_y = plot.top + plot.height;
        layer.lines.push(LinePrimitive::new(
            plot.left,
            axis_y,
            plot.left + plot.width,
            axis_y,
            style.axis_line_width,
            style.axis_line_color,
        ));

        let scale = self.displayed_scale(Axis::X);
        let count = self.config.tick_count;
        let precision = scale.tick_precision(count);
        let tick_bottom = axis_y + style.axis_tick_size_px;
        let label_y = tick_bottom + style.axis_tick_padding_px + style.axis_tick_font_size_px;
        for tick in scale.ticks(count) {
            let x = plot.left + scale.map(tick);
            layer.lines.push(LinePrimitive::new(
                x,
                axis_y,
                x,
                tick_bottom,
                style.axis_line_width,
                style.axis_line_color,
            ));
            layer.texts.push(TextPrimitive::new(
                format_tick(tick, precision),
                x,
                label_y,
                style.axis_tick_font_size_px,
                style.axis_tick_label_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_left_axis(&self, layer: &mut LayerPrimitives) {
        let style = self.style;
        let plot = self.plot;
        layer.lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.top + plot.height,
            style.axis_line_width,
            style.axis_line_color,
        ));

        let scale = self.displayed_scale(Axis::Y);
        let count = self.config.tick_count;
        let precision = scale.tick_precision(count);
        let tick_left = plot.left - style.axis_tick_size_px;
        let label_x = tick_left - style.axis_tick_padding_px;
        for tick in scale.ticks(count) {
            let y = plot.top + scale.map(tick);
            layer.lines.push(LinePrimitive::new(
                tick_left,
                y,
                plot.left,
                y,
                style.axis_line_width,
                style.axis_line_color,
            ));
            layer.texts.push(TextPrimitive::new(
                format_tick(tick, precision),
                label_x,
                y + style.axis_tick_font_size_px * Y_TICK_LABEL_BASELINE_RATIO,
                style.axis_tick_font_size_px,
                style.axis_tick_label_color,
                TextHAlign::Right,
            ));
        }
    }

    fn push_markers(&self, layer: &mut LayerPrimitives) {
        let style = self.style;
        let radius = self.config.marker_radius_px;
        for marker in self.marker_positions() {
            let (cx, cy) = self.plot.to_canvas(marker.x, marker.y);
            layer.circles.push(
                CirclePrimitive::new(cx, cy, radius, style.marker_fill_color)
                    .with_stroke(style.marker_stroke_width, style.marker_stroke_color),
            );

            let abbr = &self.records[marker.record_index].abbr;
            let (label_x, label_y) = self.plot.to_canvas(marker.label_x, marker.label_y);
            layer.texts.push(TextPrimitive::new(
                abbr.as_str(),
                label_x,
                label_y,
                style.marker_label_font_size_px,
                style.marker_label_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_titles(&self, layer: &mut LayerPrimitives) {
        let style = self.style;
        for title in self.title_layouts() {
            let (color, weight) = if title.active {
                (style.active_title_color, FontWeight::Bold)
            } else {
                (style.inactive_title_color, FontWeight::Normal)
            };
            layer.texts.push(
                TextPrimitive::new(
                    title.text,
                    title.x,
                    title.y,
                    style.title_font_size_px,
                    color,
                    TextHAlign::Center,
                )
                .with_weight(weight)
                .with_rotation(title.rotation_deg),
            );
        }
    }

    fn push_tooltip(&self, layer: &mut LayerPrimitives) {
        let Some(content) = self.tooltip_content() else {
            return;
        };
        let Some(panel) = self.tooltip_panel_for(&content) else {
            return;
        };

        let style = self.style;
        layer.rects.push(
            RectPrimitive::new(
                panel.left,
                panel.top,
                panel.width,
                panel.height,
                style.tooltip_background_color,
            )
            .with_corner_radius(style.tooltip_corner_radius_px),
        );

        let center_x = panel.left + panel.width / 2.0;
        let first_baseline = panel.top + style.tooltip_padding_px + style.tooltip_font_size_px;
        for (row, line) in content.all_lines().enumerate() {
            layer.texts.push(TextPrimitive::new(
                line,
                center_x,
                first_baseline + row as f64 * panel.line_height,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Center,
            ));
        }
    }
}
