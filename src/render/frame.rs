use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives of one z-layer.
///
/// Backends draw a layer's lines first, then rects, circles and texts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass, in canvas pixels.
///
/// `scene` holds axes, markers and titles; `overlay` holds the tooltip and is
/// drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub scene: LayerPrimitives,
    pub overlay: LayerPrimitives,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scene: LayerPrimitives::default(),
            overlay: LayerPrimitives::default(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.scene.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.scene.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.scene.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.scene.validate()?;
        self.overlay.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scene.is_empty() && self.overlay.is_empty()
    }

    /// Layers in draw order.
    pub fn layers(&self) -> impl Iterator<Item = &LayerPrimitives> {
        [&self.scene, &self.overlay].into_iter()
    }
}
