use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, FontWeight, LayerPrimitives, LinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames as standalone SVG documents.
///
/// The last document is kept in memory; [`write_to_path`](Self::write_to_path)
/// persists it.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Option<Color>,
    font_family: String,
    document: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: Some(Color::rgb(1.0, 1.0, 1.0)),
            font_family: "sans-serif".to_owned(),
            document: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` leaves the canvas transparent.
    pub fn set_background(&mut self, background: Option<Color>) -> ChartResult<()> {
        if let Some(color) = background {
            color.validate()?;
        }
        self.background = background;
        Ok(())
    }

    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = font_family.into();
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        if self.document.is_empty() {
            return Err(ChartError::InvalidData(
                "no frame has been rendered yet".to_owned(),
            ));
        }
        fs::write(path, &self.document).map_err(|err| {
            ChartError::InvalidData(format!("failed to write `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = self.document.len(), "svg written");
        Ok(())
    }

    fn write_document(
        &self,
        buf: &mut String,
        frame: &RenderFrame,
    ) -> Result<SvgRenderStats, fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        write!(
            buf,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"{}\">",
            escape_xml(&self.font_family)
        )?;
        if let Some(background) = self.background {
            write!(
                buf,
                "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\"{}/>",
                fill_attrs(background)
            )?;
        }

        let mut stats = SvgRenderStats::default();
        for layer in frame.layers() {
            write_layer(buf, layer, &mut stats)?;
        }
        buf.push_str("</svg>");
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        if let Some(background) = self.background {
            background.validate()?;
        }

        let mut document = String::new();
        let stats = self
            .write_document(&mut document, frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to format svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_layer(
    buf: &mut String,
    layer: &LayerPrimitives,
    stats: &mut SvgRenderStats,
) -> fmt::Result {
    buf.push_str("<g>");
    for line in &layer.lines {
        write_line(buf, line)?;
        stats.lines_drawn += 1;
    }
    for rect in &layer.rects {
        write_rect(buf, rect)?;
        stats.rects_drawn += 1;
    }
    for circle in &layer.circles {
        write_circle(buf, circle)?;
        stats.circles_drawn += 1;
    }
    for text in &layer.texts {
        write_text(buf, text)?;
        stats.texts_drawn += 1;
    }
    buf.push_str("</g>");
    Ok(())
}

fn write_line(buf: &mut String, line: &LinePrimitive) -> fmt::Result {
    write!(
        buf,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\"{}/>",
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        num(line.stroke_width),
        stroke_attrs(line.color)
    )
}

fn write_rect(buf: &mut String, rect: &RectPrimitive) -> fmt::Result {
    write!(
        buf,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height)
    )?;
    if rect.corner_radius > 0.0 {
        write!(buf, " rx=\"{}\"", num(rect.corner_radius))?;
    }
    buf.push_str(&fill_attrs(rect.fill_color));
    if rect.border_width > 0.0 {
        write!(
            buf,
            " stroke-width=\"{}\"{}",
            num(rect.border_width),
            stroke_attrs(rect.border_color)
        )?;
    }
    buf.push_str("/>");
    Ok(())
}

fn write_circle(buf: &mut String, circle: &CirclePrimitive) -> fmt::Result {
    write!(
        buf,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}",
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        fill_attrs(circle.fill_color)
    )?;
    if circle.stroke_width > 0.0 {
        write!(
            buf,
            " stroke-width=\"{}\"{}",
            num(circle.stroke_width),
            stroke_attrs(circle.stroke_color)
        )?;
    }
    buf.push_str("/>");
    Ok(())
}

fn write_text(buf: &mut String, text: &TextPrimitive) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        buf,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{anchor}\"{}",
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        fill_attrs(text.color)
    )?;
    if text.weight == FontWeight::Bold {
        buf.push_str(" font-weight=\"bold\"");
    }
    if text.rotation_deg != 0.0 {
        write!(
            buf,
            " transform=\"rotate({} {} {})\"",
            num(text.rotation_deg),
            num(text.x),
            num(text.y)
        )?;
    }
    write!(buf, ">{}</text>", escape_xml(&text.text))
}

fn fill_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            " fill=\"{}\" fill-opacity=\"{}\"",
            color.to_hex(),
            num(color.alpha)
        )
    } else {
        format!(" fill=\"{}\"", color.to_hex())
    }
}

fn stroke_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            " stroke=\"{}\" stroke-opacity=\"{}\"",
            color.to_hex(),
            num(color.alpha)
        )
    } else {
        format!(" stroke=\"{}\"", color.to_hex())
    }
}

/// Compact coordinate text: two decimals, trailing zeros dropped.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
