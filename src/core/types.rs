use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(960, 500)
    }
}

/// Space reserved around the plot area for axes and axis titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Margins used when every field title is stacked under the x axis.
    #[must_use]
    pub const fn interactive() -> Self {
        Self::new(20.0, 40.0, 90.0, 100.0)
    }

    /// Margins used when a single fixed title sits under the x axis.
    #[must_use]
    pub const fn basic() -> Self {
        Self::new(20.0, 40.0, 60.0, 100.0)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::interactive()
    }
}

/// Inner drawing region left after subtracting margins from the viewport.
///
/// Plot coordinates have their origin at the top-left corner of this region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area: chart_width={width}, chart_height={height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    /// Pixel range for the horizontal axis, left to right.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Pixel range for the vertical axis, bottom to top.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.height, 0.0)
    }

    #[must_use]
    pub fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top + y)
    }

    #[must_use]
    pub fn to_plot(self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        (canvas_x - self.left, canvas_y - self.top)
    }
}
