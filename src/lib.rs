//! # pdfsift
//!
//! Section and keyword-context mining over PDF layout analyzer output.
//!
//! The crate takes the per-page, per-line output of a layout analyzer,
//! classifies each line by how heading-like it is, and mines the resulting
//! document for named sections and keyword occurrences.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsift::{extract_section, mine_keywords, parse_file, ContextWindow};
//!
//! fn main() -> pdfsift::Result<()> {
//!     let doc = parse_file("paper.layout.jsonl")?;
//!
//!     let references = extract_section(&doc, "references");
//!     println!("{}", references);
//!
//!     let hits = mine_keywords(&doc, &["malaria", "vaccine"], ContextWindow::Lines(2));
//!     for (keyword, snippets) in &hits {
//!         println!("{}: {} hits", keyword, snippets.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading scores**: font size and weight folded into one integer
//! - **Sections**: text between a matching heading and the next heading
//! - **Keyword contexts**: line or character windows around every hit
//! - **Parallel processing**: Uses Rayon for pages and document batches

pub mod config;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::{KeywordList, MineOptions};
pub use error::{Error, Result};
pub use extract::{
    extract_section, extract_sections, mine_keywords, BoundaryMode, ContextWindow,
    ExtractOptions, HeadingThreshold, KeywordContextMiner, SectionBoundary, SectionExtractor,
};
pub use layout::{GlyphRun, LayoutElement, LayoutLine, LayoutPage, LineItem};
pub use model::{Document, Line, LinePosition, Page};
pub use parser::{BuildOptions, DocumentBuilder, LineClassifier, RepresentativeGlyphPolicy};
pub use render::{to_json, Analysis, JsonFormat};

use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

/// Build a document from decoded layout pages with default options.
///
/// # Example
///
/// ```
/// use pdfsift::{build_document, LayoutLine, LayoutPage};
///
/// let page = LayoutPage::new().with_text_box(vec![
///     LayoutLine::glyph(16.0, "Arial-Bold", "Results"),
///     LayoutLine::glyph(10.0, "Arial", "It worked."),
/// ]);
/// let doc = build_document(vec![page]);
/// assert!(doc.has_bold_heading());
/// assert_eq!(doc.line_count(), 2);
/// ```
pub fn build_document<I: IntoIterator<Item = LayoutPage>>(pages: I) -> Document {
    DocumentBuilder::new().build(pages)
}

/// Decode a layout stream and build a document.
///
/// # Example
///
/// ```no_run
/// use pdfsift::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("paper.layout.jsonl").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let pages = layout::read_layout(reader)?;
    Ok(build_document(pages))
}

/// Decode a layout file and build a document.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let pages = layout::read_layout_file(path)?;
    Ok(build_document(pages))
}

/// Builder for building and mining documents.
///
/// # Example
///
/// ```no_run
/// use pdfsift::{ContextWindow, KeywordList, Pipeline};
///
/// let analysis = Pipeline::new()
///     .with_keywords(KeywordList::parse("malaria\nvaccine"))
///     .with_section_keywords(KeywordList::parse("references"))
///     .with_context_window(ContextWindow::Lines(3))
///     .analyze_file("paper.layout.jsonl")?;
/// println!("{} snippets", analysis.snippet_count());
/// # Ok::<(), pdfsift::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    build_options: BuildOptions,
    extract_options: ExtractOptions,
    mine_options: MineOptions,
}

impl Pipeline {
    /// Create a new pipeline with default options and no keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set build options.
    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build_options = options;
        self
    }

    /// Set section extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Set mining options.
    pub fn with_mine_options(mut self, options: MineOptions) -> Self {
        self.mine_options = options;
        self
    }

    /// Set the keywords to mine.
    pub fn with_keywords(mut self, keywords: KeywordList) -> Self {
        self.mine_options.keywords = keywords;
        self
    }

    /// Set the section heading keywords.
    pub fn with_section_keywords(mut self, keywords: KeywordList) -> Self {
        self.mine_options.section_keywords = keywords;
        self
    }

    /// Set the keyword context window.
    pub fn with_context_window(mut self, window: ContextWindow) -> Self {
        self.mine_options.context_window = window;
        self
    }

    /// Use substring section boundaries.
    pub fn legacy(mut self) -> Self {
        self.extract_options = self.extract_options.legacy();
        self
    }

    /// Set the heading score threshold.
    pub fn with_heading_threshold(mut self, threshold: HeadingThreshold) -> Self {
        self.extract_options = self.extract_options.with_heading_threshold(threshold);
        self
    }

    /// Set which glyph run represents each line.
    pub fn with_glyph_policy(mut self, policy: RepresentativeGlyphPolicy) -> Self {
        self.build_options = self.build_options.with_glyph_policy(policy);
        self
    }

    /// Disable parallel page classification.
    pub fn sequential(mut self) -> Self {
        self.build_options = self.build_options.sequential();
        self
    }

    /// Get the mining options.
    pub fn mine_options(&self) -> &MineOptions {
        &self.mine_options
    }

    /// Build a document with this pipeline's build options.
    pub fn build<I: IntoIterator<Item = LayoutPage>>(&self, pages: I) -> Document {
        DocumentBuilder::with_options(self.build_options.clone()).build(pages)
    }

    /// Mine a built document.
    pub fn analyze(&self, doc: &Document) -> Analysis {
        let extractor = SectionExtractor::with_options(self.extract_options.clone());
        let miner = KeywordContextMiner::new(self.mine_options.context_window);

        Analysis {
            text: doc.plain_text(),
            sections: extractor
                .extract_sections(doc, self.mine_options.section_keywords.as_slice()),
            keywords: miner.mine(doc, self.mine_options.keywords.as_slice()),
            has_bold_heading: doc.has_bold_heading(),
            page_count: doc.page_count(),
            line_count: doc.line_count(),
            ..Analysis::new()
        }
    }

    /// Build and mine decoded layout pages.
    pub fn analyze_pages<I: IntoIterator<Item = LayoutPage>>(&self, pages: I) -> Analysis {
        self.analyze(&self.build(pages))
    }

    /// Decode, build and mine a layout stream.
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Analysis> {
        let pages = layout::read_layout(reader)?;
        Ok(self.analyze_pages(pages))
    }

    /// Decode, build and mine a layout file.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Analysis> {
        let path = path.as_ref();
        log::info!("Processing: {}", path.display());
        let pages = layout::read_layout_file(path)?;
        Ok(self.analyze_pages(pages))
    }

    /// Process many layout files in parallel.
    ///
    /// Results come back in input order. A file that fails is reported in its
    /// slot and does not stop the others.
    pub fn analyze_files<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
    ) -> Vec<(PathBuf, Result<Analysis>)> {
        self.analyze_files_with(paths, |_, _| {})
    }

    /// Like [`analyze_files`](Self::analyze_files), calling `on_done` as each
    /// file finishes. Calls arrive in completion order, from worker threads.
    pub fn analyze_files_with<P, F>(
        &self,
        paths: &[P],
        on_done: F,
    ) -> Vec<(PathBuf, Result<Analysis>)>
    where
        P: AsRef<Path> + Sync,
        F: Fn(&Path, &Result<Analysis>) + Sync,
    {
        paths
            .par_iter()
            .map(|path| {
                let path = path.as_ref();
                let result = self.analyze_file(path);
                if let Err(ref e) = result {
                    log::warn!("Skipping {}: {}", path.display(), e);
                }
                on_done(path, &result);
                (path.to_path_buf(), result)
            })
            .collect()
    }
}
