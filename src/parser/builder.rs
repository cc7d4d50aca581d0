//! Document construction from layout output.

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::layout::{LayoutLine, LayoutPage};
use crate::model::{Document, Line, Page};

use super::{BuildOptions, LineClassifier};

/// Builds [`Document`]s from the page stream of a layout analyzer.
///
/// Non-text elements are ignored. Every text line becomes exactly one
/// [`Line`], in the order the analyzer emitted it.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    options: BuildOptions,
    classifier: LineClassifier,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            classifier: LineClassifier::new(options.glyph_policy),
            options,
        }
    }

    /// The options in use.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a document, consuming the whole page stream first.
    pub fn build<I>(&self, pages: I) -> Document
    where
        I: IntoIterator<Item = LayoutPage>,
    {
        let pages: Vec<LayoutPage> = pages.into_iter().collect();
        self.build_pages(&pages)
    }

    /// Build a document from a fallible page stream.
    ///
    /// The first decoding error aborts the build; nothing is extracted from a
    /// partially read stream.
    pub fn try_build<I>(&self, pages: I) -> Result<Document>
    where
        I: IntoIterator<Item = Result<LayoutPage>>,
    {
        let pages = pages.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(self.build_pages(&pages))
    }

    /// Build a document from already decoded pages.
    pub fn build_pages(&self, layout: &[LayoutPage]) -> Document {
        let pages: Vec<Page> = if self.options.parallel {
            layout
                .par_iter()
                .enumerate()
                .map(|(index, page)| self.build_page(index, page))
                .collect()
        } else {
            layout
                .iter()
                .enumerate()
                .map(|(index, page)| self.build_page(index, page))
                .collect()
        };

        let line_count: usize = pages.iter().map(Page::line_count).sum();
        if line_count == 0 {
            log::debug!(
                "No text lines in {} layout pages, returning empty document",
                layout.len()
            );
            return Document::empty();
        }

        let document = Document::new(pages);
        log::debug!(
            "Built document: {} pages, {} lines, bold headings: {}",
            document.page_count(),
            line_count,
            document.has_bold_heading()
        );
        document
    }

    fn build_page(&self, index: usize, layout: &LayoutPage) -> Page {
        let lines = layout
            .text_lines()
            .map(|line| self.build_line(index, line))
            .collect();
        Page::new(index, lines)
    }

    fn build_line(&self, page_index: usize, line: &LayoutLine) -> Line {
        let class = self.classifier.classify(line);
        let text = line.text();
        if self.options.normalize_unicode {
            Line::from_class(class, text.nfc().collect::<String>(), page_index)
        } else {
            Line::from_class(class, text, page_index)
        }
    }
}
