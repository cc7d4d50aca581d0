//! Line-level types.

use serde::{Deserialize, Serialize};

use crate::parser::LineClass;

/// One logical text run within a page.
///
/// Lines are immutable once built: the score is fixed at classification
/// time and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    score: i32,
    bold: bool,
    text: String,
    page_index: usize,
    font_face: Option<String>,
}

impl Line {
    /// Create a line. The text is trimmed of surrounding whitespace.
    pub fn new(
        score: i32,
        bold: bool,
        text: impl AsRef<str>,
        page_index: usize,
        font_face: Option<String>,
    ) -> Self {
        Self {
            score,
            bold,
            text: text.as_ref().trim().to_string(),
            page_index,
            font_face,
        }
    }

    /// Create a line from a classifier result.
    pub fn from_class(class: LineClass, text: impl AsRef<str>, page_index: usize) -> Self {
        Self::new(class.score, class.bold, text, page_index, class.font_face)
    }

    /// Heading-strength score; higher is more heading-like.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether the representative glyph is bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Trimmed text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 0-based index of the owning page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Font face of the representative glyph, if any.
    pub fn font_face(&self) -> Option<&str> {
        self.font_face.as_deref()
    }

    /// Check if the line has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Position of a line in document order.
///
/// Orders by page first, then by line within the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinePosition {
    /// 0-based page index
    pub page: usize,
    /// 0-based line index within the page
    pub line: usize,
}

impl LinePosition {
    /// Create a new position.
    pub fn new(page: usize, line: usize) -> Self {
        Self { page, line }
    }
}

impl std::fmt::Display for LinePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.page, self.line)
    }
}
