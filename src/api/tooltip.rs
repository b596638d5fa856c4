use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{AxisSelection, Field, StateRecord, Viewport};

use super::layout_helpers::estimate_text_width;
use super::{RenderStyle, TooltipOffset};

/// Text shown in the floating panel of a hovered marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub record_index: usize,
    /// State name.
    pub title: String,
    /// One line per plotted field, x first.
    pub lines: SmallVec<[String; 2]>,
}

impl TooltipContent {
    #[must_use]
    pub fn for_record(record_index: usize, record: &StateRecord, selection: AxisSelection) -> Self {
        Self {
            record_index,
            title: record.state.clone(),
            lines: smallvec![
                field_line(selection.x(), record.value(selection.x())),
                field_line(selection.y(), record.value(selection.y())),
            ],
        }
    }

    /// Every line of the panel, title first.
    pub fn all_lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str()).chain(self.lines.iter().map(String::as_str))
    }
}

/// `"<label> <value><suffix>"`, e.g. `Poverty: 20.1%`.
#[must_use]
pub fn field_line(field: Field, value: f64) -> String {
    format!(
        "{} {}{}",
        field.tooltip_label(),
        value,
        field.percent_suffix()
    )
}

/// Panel rectangle of a tooltip in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPanel {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub line_height: f64,
}

/// Centres the panel above the marker, applies `offset` and keeps it inside
/// the viewport.
pub(super) fn layout_tooltip_panel(
    content: &TooltipContent,
    marker_x: f64,
    marker_y: f64,
    marker_radius: f64,
    offset: TooltipOffset,
    viewport: Viewport,
    style: RenderStyle,
) -> TooltipPanel {
    let font = style.tooltip_font_size_px;
    let line_height = font * style.tooltip_line_height_ratio;
    let text_width = content
        .all_lines()
        .map(|line| estimate_text_width(line, font, style))
        .fold(0.0, f64::max);
    let line_count = content.all_lines().count() as f64;
    let width = text_width + style.tooltip_padding_px * 2.0;
    let height = line_count * line_height + style.tooltip_padding_px * 2.0;

    let left = marker_x - width / 2.0 + offset.dx;
    let top = marker_y - marker_radius - height + offset.dy;
    let max_left = (f64::from(viewport.width) - width).max(0.0);
    let max_top = (f64::from(viewport.height) - height).max(0.0);

    TooltipPanel {
        left: left.clamp(0.0, max_left),
        top: top.clamp(0.0, max_top),
        width,
        height,
        line_height,
    }
}
