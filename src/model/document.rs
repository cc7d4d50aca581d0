//! Document-level types.

use std::collections::BTreeMap;

use super::{Line, LinePosition, Page};
use crate::parser::SENTINEL_SCORE;
use serde::{Deserialize, Serialize};

/// A built document: pages of classified lines.
///
/// A `Document` is constructed once and never mutated afterwards.
/// Deserialization goes through [`Document::new`], so a stored
/// `has_bold_heading` is recomputed rather than trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentPages")]
pub struct Document {
    /// Pages in the document
    pages: Vec<Page>,

    /// True if any line anywhere was classified bold
    has_bold_heading: bool,
}

/// Serialized form of a [`Document`]; derived fields are ignored.
#[derive(Deserialize)]
struct DocumentPages {
    #[serde(default)]
    pages: Vec<Page>,
}

impl From<DocumentPages> for Document {
    fn from(raw: DocumentPages) -> Self {
        Document::new(raw.pages)
    }
}

impl Document {
    /// Create a document from pages.
    ///
    /// `has_bold_heading` is folded over every line once the pages are in
    /// place.
    pub fn new(pages: Vec<Page>) -> Self {
        let has_bold_heading = pages
            .iter()
            .flat_map(|page| page.lines())
            .any(Line::is_bold);
        Self {
            pages,
            has_bold_heading,
        }
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any line in the document is bold.
    pub fn has_bold_heading(&self) -> bool {
        self.has_bold_heading
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-based).
    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a line by position.
    pub fn line_at(&self, position: LinePosition) -> Option<&Line> {
        self.get_page(position.page)?.get_line(position.line)
    }

    /// Iterate over every line in document order with its position.
    pub fn lines(&self) -> impl Iterator<Item = (LinePosition, &Line)> {
        self.pages.iter().enumerate().flat_map(|(page_idx, page)| {
            page.lines()
                .iter()
                .enumerate()
                .map(move |(line_idx, line)| (LinePosition::new(page_idx, line_idx), line))
        })
    }

    /// Total number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Get plain text content of the entire document.
    ///
    /// Pages without text are skipped; remaining pages are separated by a
    /// newline.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .filter(|page| !page.is_blank())
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text of the non-empty lines in `[start, end)`, joined by a single space.
    ///
    /// With no `end`, the range runs to the end of the document.
    pub fn text_between(&self, start: LinePosition, end: Option<LinePosition>) -> String {
        self.lines()
            .skip_while(|(pos, _)| *pos < start)
            .take_while(|(pos, _)| end.map_or(true, |end| *pos < end))
            .filter(|(_, line)| !line.is_empty())
            .map(|(_, line)| line.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The score of ordinary body text: the most frequent score among
    /// non-empty lines.
    ///
    /// Ties resolve to the lowest score. Lines that fell back to the sentinel
    /// score are not counted. Returns `None` if no line qualifies.
    pub fn body_score(&self) -> Option<i32> {
        let mut histogram: BTreeMap<i32, usize> = BTreeMap::new();
        for (_, line) in self.lines() {
            if line.is_empty() || line.score() <= SENTINEL_SCORE {
                continue;
            }
            *histogram.entry(line.score()).or_insert(0) += 1;
        }

        let mut best: Option<(i32, usize)> = None;
        for (&score, &count) in &histogram {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((score, count));
            }
        }
        best.map(|(score, _)| score)
    }
}
