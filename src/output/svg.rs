//! SVG output encoder.
//!
//! Vector figures for the HTML page. Selectable markers carry a
//! `data-index` attribute so a page script can map a click to a point.

use crate::color::Rgba;
use std::fmt::Write as FmtWrite;

/// SVG encoder for vector figures.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Selectable point marker (`<circle class="point" data-index=..>`)
    Marker {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        index: usize,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(400, 400)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add an unfilled rectangle outline.
    #[must_use]
    pub fn frame(mut self, x: f32, y: f32, width: f32, height: f32, stroke: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(stroke),
            stroke_width: 1.0,
        });
        self
    }

    /// Add a selectable marker for point `index`.
    #[must_use]
    pub fn marker(mut self, cx: f32, cy: f32, r: f32, fill: Rgba, index: usize) -> Self {
        self.elements.push(SvgElement::Marker {
            cx,
            cy,
            r,
            fill,
            index,
        });
        self
    }

    /// Add text with anchor.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Escape XML special characters.
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_attr = fill.map_or_else(|| "none".to_string(), Rgba::to_css);
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, s.to_css()))
                .unwrap_or_default();
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill_attr}"{stroke_attr}/>"#
            )
        }
        SvgElement::Marker {
            cx,
            cy,
            r,
            fill,
            index,
        } => {
            format!(
                r#"<circle class="point" data-index="{index}" cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#,
                fill.to_css()
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif">{}</text>"#,
                fill.to_css(),
                escape_xml(text)
            )
        }
    }
}
