//! Page-level types.

use super::Line;
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based)
    index: usize,

    /// Lines in reading order
    lines: Vec<Line>,
}

impl Page {
    /// Create a page owning the given lines.
    pub fn new(index: usize, lines: Vec<Line>) -> Self {
        Self { index, lines }
    }

    /// Create a page with no lines.
    pub fn empty(index: usize) -> Self {
        Self::new(index, Vec::new())
    }

    /// Page index (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Lines in reading order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get a line by index within the page.
    pub fn get_line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the page has no text at all.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }

    /// Reconstruct the page text, lines joined by a single space.
    ///
    /// With `non_empty_only`, lines without text are skipped instead of
    /// contributing an empty slot.
    pub fn text(&self, non_empty_only: bool) -> String {
        self.lines
            .iter()
            .filter(|line| !non_empty_only || !line.is_empty())
            .map(Line::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.text(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line {
        Line::new(10, false, text, 0, None)
    }

    #[test]
    fn test_page_new() {
        let page = Page::empty(3);
        assert_eq!(page.index(), 3);
        assert!(page.is_empty());
        assert!(page.is_blank());
        assert_eq!(page.plain_text(), "");
    }

    #[test]
    fn test_page_text_filtering() {
        let page = Page::new(0, vec![line("Hello"), line(""), line("world")]);
        assert_eq!(page.line_count(), 3);
        assert_eq!(page.text(true), "Hello world");
        assert_eq!(page.text(false), "Hello  world");
        assert!(!page.is_blank());
        assert_eq!(page.get_line(2).map(Line::text), Some("world"));
    }
}
