//! Layout analyzer input types.
//!
//! This module defines the shape of the page stream emitted by the upstream
//! layout analyzer: pages of elements, where text boxes and text lines carry
//! glyph runs and everything else (images, vector paths) is ignored.

mod stream;

pub use stream::{read_layout, read_layout_file, LayoutStream};

use serde::{Deserialize, Serialize};

/// One page of layout output, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Elements on the page, top-to-bottom as emitted by the analyzer
    #[serde(default)]
    pub elements: Vec<LayoutElement>,
}

impl LayoutPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the page.
    pub fn with_element(mut self, element: LayoutElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a text box holding the given lines.
    pub fn with_text_box(self, lines: Vec<LayoutLine>) -> Self {
        self.with_element(LayoutElement::TextBox { lines })
    }

    /// Iterate over every text line on the page, flattening text boxes.
    pub fn text_lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.elements.iter().flat_map(|element| element.text_lines())
    }

    /// Number of text lines on the page.
    pub fn text_line_count(&self) -> usize {
        self.text_lines().count()
    }
}

/// A layout element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutElement {
    /// A box of text lines
    TextBox {
        /// Lines in the box
        #[serde(default)]
        lines: Vec<LayoutLine>,
    },

    /// A free-standing text line
    TextLine(LayoutLine),

    /// A raster image
    Image,

    /// A figure container
    Figure,

    /// A vector curve
    Curve,

    /// A rectangle
    Rect,

    /// Any element type this crate does not know about
    #[serde(other)]
    Other,
}

impl LayoutElement {
    /// Whether this element carries text.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            LayoutElement::TextBox { .. } | LayoutElement::TextLine(_)
        )
    }

    /// The text lines held by this element (empty for non-text elements).
    pub fn text_lines(&self) -> &[LayoutLine] {
        match self {
            LayoutElement::TextBox { lines } => lines,
            LayoutElement::TextLine(line) => std::slice::from_ref(line),
            _ => &[],
        }
    }
}

/// A single text line: glyph runs interleaved with annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Items in reading order
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl LayoutLine {
    /// Create a line from items.
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Create a line made of a single glyph run.
    pub fn glyph(size: f32, font: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(vec![LineItem::Glyph(GlyphRun::new(size, font, text))])
    }

    /// Create a line with no metrics at all.
    pub fn annotation(text: impl Into<String>) -> Self {
        Self::new(vec![LineItem::Annotation { text: text.into() }])
    }

    /// Glyph runs in the line, skipping annotations.
    pub fn glyph_runs(&self) -> impl Iterator<Item = &GlyphRun> {
        self.items.iter().filter_map(|item| match item {
            LineItem::Glyph(run) => Some(run),
            LineItem::Annotation { .. } => None,
        })
    }

    /// Concatenated text of all items.
    pub fn text(&self) -> String {
        self.items.iter().map(LineItem::text).collect()
    }
}

/// An item within a text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineItem {
    /// Glyphs sharing a size and font
    Glyph(GlyphRun),

    /// Text inserted by the analyzer (spaces, line breaks) without metrics
    Annotation {
        /// Inserted text
        #[serde(default)]
        text: String,
    },
}

impl LineItem {
    /// The text carried by this item.
    pub fn text(&self) -> &str {
        match self {
            LineItem::Glyph(run) => &run.text,
            LineItem::Annotation { text } => text,
        }
    }
}

/// A run of glyphs with uniform metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// Font size in points
    pub size: f32,
    /// Font face name (e.g., "Helvetica-Bold")
    #[serde(default)]
    pub font: String,
    /// The glyph text
    #[serde(default)]
    pub text: String,
}

impl GlyphRun {
    /// Create a new glyph run.
    pub fn new(size: f32, font: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            size,
            font: font.into(),
            text: text.into(),
        }
    }

    /// Whether the font face name marks the run as bold.
    pub fn is_bold(&self) -> bool {
        self.font.to_lowercase().contains("bold")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page() {
        let json = r#"{
            "elements": [
                {"type": "text_box", "lines": [
                    {"items": [
                        {"kind": "glyph", "size": 14.0, "font": "Arial-Bold", "text": "Intro"},
                        {"kind": "annotation", "text": " "},
                        {"kind": "glyph", "size": 14.0, "font": "Arial-Bold", "text": "duction"}
                    ]}
                ]},
                {"type": "image", "name": "Im0", "width": 100},
                {"type": "text_line", "items": [{"kind": "glyph", "size": 10.0, "text": "body"}]},
                {"type": "hologram"}
            ]
        }"#;

        let page: LayoutPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.elements.len(), 4);
        assert!(matches!(page.elements[1], LayoutElement::Image));
        assert!(matches!(page.elements[3], LayoutElement::Other));
        assert_eq!(page.text_line_count(), 2);

        let first = page.text_lines().next().unwrap();
        assert_eq!(first.text(), "Intro duction");
        assert_eq!(first.glyph_runs().count(), 2);
    }

    #[test]
    fn test_element_text_lines() {
        assert!(LayoutElement::Curve.text_lines().is_empty());
        assert!(!LayoutElement::Rect.is_text());

        let line = LayoutLine::glyph(12.0, "Times", "hello");
        let element = LayoutElement::TextLine(line.clone());
        assert!(element.is_text());
        assert_eq!(element.text_lines(), &[line]);
    }

    #[test]
    fn test_glyph_run_bold() {
        assert!(GlyphRun::new(12.0, "Helvetica-BOLD", "x").is_bold());
        assert!(GlyphRun::new(12.0, "NimbusSans-BoldItalic", "x").is_bold());
        assert!(!GlyphRun::new(12.0, "Helvetica", "x").is_bold());
        assert!(!GlyphRun::new(12.0, "", "x").is_bold());
    }
}
