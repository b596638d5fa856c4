use crate::render::Color;

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub marker_label_color: Color,
    pub marker_label_font_size_px: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    /// Length of tick marks outside the plot area.
    pub axis_tick_size_px: f64,
    /// Gap between a tick mark and its label.
    pub axis_tick_padding_px: f64,
    pub axis_tick_label_color: Color,
    pub axis_tick_font_size_px: f64,
    pub title_font_size_px: f64,
    pub active_title_color: Color,
    pub inactive_title_color: Color,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_line_height_ratio: f64,
    pub tooltip_corner_radius_px: f64,
    /// Average glyph advance as a fraction of the font size, used to size
    /// text boxes for hit-testing and tooltip layout.
    pub char_width_ratio: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_fill_color: Color::rgb8(0x89, 0xbd, 0xd3),
            marker_stroke_color: Color::rgb8(0xe3, 0xe3, 0xe3),
            marker_stroke_width: 1.0,
            marker_label_color: Color::rgb(1.0, 1.0, 1.0),
            marker_label_font_size_px: 10.0,
            axis_line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            axis_tick_size_px: 6.0,
            axis_tick_padding_px: 3.0,
            axis_tick_label_color: Color::rgb(0.0, 0.0, 0.0),
            axis_tick_font_size_px: 10.0,
            title_font_size_px: 16.0,
            active_title_color: Color::rgb(0.0, 0.0, 0.0),
            inactive_title_color: Color::rgb8(0xaa, 0xaa, 0xaa),
            tooltip_background_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 12.0,
            tooltip_line_height_ratio: 1.25,
            tooltip_corner_radius_px: 4.0,
            char_width_ratio: 0.6,
        }
    }
}
