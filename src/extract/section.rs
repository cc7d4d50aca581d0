//! Section extraction between heading lines.
//!
//! A heading candidate is a non-empty line scoring strictly above the body
//! threshold. A section starts at a candidate whose text contains the target
//! keyword and ends right before the next candidate, or at the end of the
//! document.

use indexmap::IndexMap;

use crate::model::{Document, LinePosition};

use super::matcher::{title_case, KeywordMatcher};
use super::options::{BoundaryMode, ExtractOptions};

/// Start and end of one matched section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBoundary {
    /// The matching heading line
    pub start: LinePosition,
    /// The next heading line, or `None` if the section runs to the end
    pub end: Option<LinePosition>,
}

/// Extracts keyworded sections from a built document.
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    options: ExtractOptions,
}

impl SectionExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Positions of every heading candidate, in document order.
    pub fn heading_positions(&self, doc: &Document) -> Vec<LinePosition> {
        let Some(threshold) = self.options.heading_threshold.resolve(doc) else {
            return Vec::new();
        };
        doc.lines()
            .filter(|(_, line)| !line.is_empty() && line.score() > threshold)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Boundaries of every section whose heading contains `keyword`.
    pub fn find_boundaries(&self, doc: &Document, keyword: &str) -> Vec<SectionBoundary> {
        let matcher = KeywordMatcher::new(keyword);
        let headings = self.heading_positions(doc);

        headings
            .iter()
            .enumerate()
            .filter(|(_, pos)| {
                doc.line_at(**pos)
                    .is_some_and(|line| matcher.is_match(line.text()))
            })
            .map(|(i, pos)| SectionBoundary {
                start: *pos,
                end: headings.get(i + 1).copied(),
            })
            .collect()
    }

    /// Text of every section headed by `keyword`, in document order.
    ///
    /// Returns an empty string when no heading matches.
    pub fn extract(&self, doc: &Document, keyword: &str) -> String {
        let boundaries = self.find_boundaries(doc, keyword);
        log::debug!(
            "Section {:?}: {} matching headings",
            keyword,
            boundaries.len()
        );

        match self.options.boundary_mode {
            BoundaryMode::LineRange => boundaries
                .iter()
                .map(|b| doc.text_between(b.start, b.end))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
            BoundaryMode::LegacySubstring => boundaries
                .iter()
                .map(|b| legacy_slice(doc, b))
                .collect(),
        }
    }

    /// Extract a section for each keyword.
    ///
    /// Keys are the title-cased keywords; keywords without a section are
    /// left out.
    pub fn extract_sections<S: AsRef<str>>(
        &self,
        doc: &Document,
        keywords: &[S],
    ) -> IndexMap<String, String> {
        let mut sections = IndexMap::new();
        for keyword in keywords {
            let keyword = keyword.as_ref();
            let section = self.extract(doc, keyword);
            if !section.is_empty() {
                sections.insert(title_case(keyword), section);
            }
        }
        sections
    }
}

/// Slice a section out of concatenated page text by searching for the
/// heading texts.
///
/// The first occurrence of a heading's text wins, so a heading phrase that
/// recurs earlier in the window truncates or empties the section.
fn legacy_slice(doc: &Document, boundary: &SectionBoundary) -> String {
    let Some(start_line) = doc.line_at(boundary.start) else {
        return String::new();
    };
    let end_line = boundary.end.and_then(|pos| doc.line_at(pos));
    let last_page = boundary
        .end
        .map_or(doc.page_count(), |pos| pos.page + 1)
        .min(doc.page_count());

    let window = doc.pages()[boundary.start.page..last_page]
        .iter()
        .filter(|page| !page.is_blank())
        .map(|page| page.text(true))
        .collect::<Vec<_>>()
        .join(" ");

    let from = window.find(start_line.text()).unwrap_or(0);
    let to = match (boundary.end, end_line) {
        (Some(end), Some(end_line)) if end.page != boundary.start.page => window
            .find(end_line.text())
            .unwrap_or(window.len()),
        _ => window.len(),
    };

    if to <= from {
        String::new()
    } else {
        window[from..to].to_string()
    }
}

/// Extract the section headed by `keyword` with default options.
pub fn extract_section(doc: &Document, keyword: &str) -> String {
    SectionExtractor::new().extract(doc, keyword)
}

/// Extract a section for each keyword with default options.
pub fn extract_sections<S: AsRef<str>>(
    doc: &Document,
    keywords: &[S],
) -> IndexMap<String, String> {
    SectionExtractor::new().extract_sections(doc, keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::HeadingThreshold;
    use crate::model::{Line, Page};

    fn line(score: i32, text: &str, page: usize) -> Line {
        Line::new(score, score > 10, text, page, None)
    }

    fn two_pages() -> Document {
        Document::new(vec![
            Page::new(0, vec![line(14, "Introduction", 0), line(4, "Lorem ipsum", 0)]),
            Page::new(1, vec![line(14, "References", 1), line(4, "Smith 1999", 1)]),
        ])
    }

    #[test]
    fn test_extract_across_pages() {
        let doc = two_pages();
        assert_eq!(extract_section(&doc, "references"), "References Smith 1999");
        assert_eq!(
            extract_section(&doc, "introduction"),
            "Introduction Lorem ipsum"
        );
        assert_eq!(extract_section(&doc, "methods"), "");
    }

    #[test]
    fn test_boundaries() {
        let doc = two_pages();
        let extractor = SectionExtractor::new();
        assert_eq!(
            extractor.heading_positions(&doc),
            vec![LinePosition::new(0, 0), LinePosition::new(1, 0)]
        );
        assert_eq!(
            extractor.find_boundaries(&doc, "INTRO"),
            vec![SectionBoundary {
                start: LinePosition::new(0, 0),
                end: Some(LinePosition::new(1, 0)),
            }]
        );
        assert_eq!(
            extractor.find_boundaries(&doc, "references"),
            vec![SectionBoundary {
                start: LinePosition::new(1, 0),
                end: None,
            }]
        );
    }

    #[test]
    fn test_no_headings() {
        let doc = Document::new(vec![Page::new(
            0,
            vec![line(4, "References", 0), line(4, "Smith 1999", 0)],
        )]);
        assert_eq!(extract_section(&doc, "references"), "");
        assert_eq!(extract_section(&Document::empty(), "references"), "");
    }

    #[test]
    fn test_fixed_threshold() {
        // With the sentinel as threshold every scored line is a heading.
        let doc = two_pages();
        let extractor = SectionExtractor::with_options(
            ExtractOptions::new().with_heading_threshold(HeadingThreshold::Fixed(-10)),
        );
        assert_eq!(extractor.extract(&doc, "introduction"), "Introduction");
    }

    #[test]
    fn test_recurring_heading_text() {
        let doc = Document::new(vec![
            Page::new(
                0,
                vec![
                    line(14, "Results", 0),
                    line(4, "see Discussion below", 0),
                    line(4, "more results", 0),
                ],
            ),
            Page::new(
                1,
                vec![line(14, "Discussion", 1), line(4, "text", 1), line(4, "text", 1)],
            ),
        ]);

        assert_eq!(
            extract_section(&doc, "results"),
            "Results see Discussion below more results"
        );

        let legacy = SectionExtractor::with_options(
            ExtractOptions::new().with_boundary_mode(BoundaryMode::LegacySubstring),
        );
        assert_eq!(legacy.extract(&doc, "results"), "Results see ");
    }

    #[test]
    fn test_legacy_same_page_runs_to_window_end() {
        let doc = Document::new(vec![Page::new(
            0,
            vec![
                line(14, "Methods", 0),
                line(4, "we did things", 0),
                line(14, "Results", 0),
                line(4, "it worked", 0),
            ],
        )]);
        let legacy = SectionExtractor::with_options(
            ExtractOptions::new().with_boundary_mode(BoundaryMode::LegacySubstring),
        );
        assert_eq!(
            legacy.extract(&doc, "methods"),
            "Methods we did things Results it worked"
        );
        assert_eq!(extract_section(&doc, "methods"), "Methods we did things");
    }

    #[test]
    fn test_multiple_matching_sections() {
        let doc = Document::new(vec![Page::new(
            0,
            vec![
                line(14, "References", 0),
                line(4, "[1] A", 0),
                line(14, "Appendix", 0),
                line(4, "tables", 0),
                line(14, "Supplementary references", 0),
                line(4, "[S1] B", 0),
            ],
        )]);
        assert_eq!(
            extract_section(&doc, "references"),
            "References [1] A\n\nSupplementary references [S1] B"
        );
    }

    #[test]
    fn test_extract_sections() {
        let doc = two_pages();
        let sections = extract_sections(&doc, &["references", "methods", "introduction"]);
        let keys: Vec<_> = sections.keys().cloned().collect();
        assert_eq!(keys, vec!["References", "Introduction"]);
        assert_eq!(sections["References"], "References Smith 1999");
    }
}
