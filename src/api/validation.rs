use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    for color in [
        style.marker_fill_color,
        style.marker_stroke_color,
        style.marker_label_color,
        style.axis_line_color,
        style.axis_tick_label_color,
        style.active_title_color,
        style.inactive_title_color,
        style.tooltip_background_color,
        style.tooltip_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("marker_label_font_size_px", style.marker_label_font_size_px),
        ("axis_line_width", style.axis_line_width),
        ("axis_tick_font_size_px", style.axis_tick_font_size_px),
        ("title_font_size_px", style.title_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
        ("tooltip_line_height_ratio", style.tooltip_line_height_ratio),
        ("char_width_ratio", style.char_width_ratio),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("marker_stroke_width", style.marker_stroke_width),
        ("axis_tick_size_px", style.axis_tick_size_px),
        ("axis_tick_padding_px", style.axis_tick_padding_px),
        ("tooltip_padding_px", style.tooltip_padding_px),
        ("tooltip_corner_radius_px", style.tooltip_corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    Ok(style)
}
