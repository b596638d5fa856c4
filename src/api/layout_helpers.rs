use smallvec::SmallVec;

use crate::core::{Axis, AxisSelection, Field, PlotArea};
use crate::interaction::axis_labels_for;

use super::{AxisTitleMode, RenderStyle};

/// Axis-aligned box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl HitBox {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Placement of one clickable axis title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleLayout {
    pub field: Field,
    pub text: &'static str,
    pub active: bool,
    /// Baseline anchor of the (centred) text in canvas pixels.
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub hit_box: HitBox,
}

const X_TITLE_OFFSETS_PX: [f64; 3] = [40.0, 60.0, 80.0];
const Y_TITLE_OFFSETS_PX: [f64; 3] = [50.0, 30.0, 10.0];
const X_SINGLE_TITLE_OFFSET_PX: f64 = 30.0;
const Y_SINGLE_TITLE_OFFSET_PX: f64 = 40.0;

pub(super) fn estimate_text_width(text: &str, font_size_px: f64, style: RenderStyle) -> f64 {
    text.chars().count() as f64 * font_size_px * style.char_width_ratio
}

/// Box around centred text whose baseline sits at `(x, y)`.
pub(super) fn centred_text_box(
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    style: RenderStyle,
) -> HitBox {
    let half_width = estimate_text_width(text, font_size_px, style) / 2.0;
    HitBox {
        left: x - half_width,
        top: y - font_size_px,
        right: x + half_width,
        bottom: y + font_size_px * 0.25,
    }
}

/// Titles of both axes in draw order: x titles under the plot, y titles
/// rotated left of it.
pub(super) fn axis_title_layouts(
    plot: PlotArea,
    selection: AxisSelection,
    mode: AxisTitleMode,
    style: RenderStyle,
) -> SmallVec<[TitleLayout; 6]> {
    let font = style.title_font_size_px;
    let mut layouts = SmallVec::new();

    let x_center = plot.left + plot.width / 2.0;
    let plot_bottom = plot.top + plot.height;
    let x_labels = axis_labels_for(selection, Axis::X);
    for (label, offset) in x_labels.iter().zip(X_TITLE_OFFSETS_PX) {
        let offset = match mode {
            AxisTitleMode::AllFields => offset,
            AxisTitleMode::ActiveOnly if label.active => plot.top + X_SINGLE_TITLE_OFFSET_PX,
            AxisTitleMode::ActiveOnly => continue,
        };
        let y = plot_bottom + offset;
        layouts.push(TitleLayout {
            field: label.field,
            text: label.title,
            active: label.active,
            x: x_center,
            y,
            rotation_deg: 0.0,
            hit_box: centred_text_box(label.title, x_center, y, font, style),
        });
    }

    // Rotated -90 degrees: text runs bottom to top, glyphs extend left of the baseline.
    let y_center = plot.top + plot.height / 2.0;
    let y_labels = axis_labels_for(selection, Axis::Y);
    for (label, offset) in y_labels.iter().zip(Y_TITLE_OFFSETS_PX) {
        let offset = match mode {
            AxisTitleMode::AllFields => offset,
            AxisTitleMode::ActiveOnly if label.active => Y_SINGLE_TITLE_OFFSET_PX,
            AxisTitleMode::ActiveOnly => continue,
        };
        // Offsets count from the canvas edge; one extra em for the glyph height.
        let x = offset + font;
        let half_width = estimate_text_width(label.title, font, style) / 2.0;
        layouts.push(TitleLayout {
            field: label.field,
            text: label.title,
            active: label.active,
            x,
            y: y_center,
            rotation_deg: -90.0,
            hit_box: HitBox {
                left: x - font,
                top: y_center - half_width,
                right: x + font * 0.25,
                bottom: y_center + half_width,
            },
        });
    }

    layouts
}
