//! Extraction and mining options.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Document;

/// How the body-text threshold for heading detection is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingThreshold {
    /// The document's most common line score
    #[default]
    Auto,
    /// A fixed score; lines strictly above it are headings
    Fixed(i32),
}

impl HeadingThreshold {
    /// The threshold for a document, or `None` if it has no body text.
    pub fn resolve(&self, doc: &Document) -> Option<i32> {
        match self {
            HeadingThreshold::Auto => doc.body_score(),
            HeadingThreshold::Fixed(score) => Some(*score),
        }
    }
}

/// How section text is cut out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Lines from the heading up to the next heading, by position
    #[default]
    LineRange,
    /// Search for the heading texts in concatenated page text
    LegacySubstring,
}

/// Options for section extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Body-text threshold for heading candidates
    pub heading_threshold: HeadingThreshold,

    /// Section text reconstruction mode
    pub boundary_mode: BoundaryMode,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading threshold.
    pub fn with_heading_threshold(mut self, threshold: HeadingThreshold) -> Self {
        self.heading_threshold = threshold;
        self
    }

    /// Set the boundary mode.
    pub fn with_boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }

    /// Use substring boundaries for parity with earlier output.
    pub fn legacy(self) -> Self {
        self.with_boundary_mode(BoundaryMode::LegacySubstring)
    }
}

/// Span of context captured around a keyword hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWindow {
    /// The hit line plus this many lines before and after
    Lines(usize),
    /// The hit line plus this many characters before and after
    Chars(usize),
}

impl Default for ContextWindow {
    fn default() -> Self {
        ContextWindow::Lines(2)
    }
}

impl FromStr for ContextWindow {
    type Err = Error;

    /// Parse `"3"`, `"lines:3"` or `"chars:200"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (unit, count) = match s.split_once(':') {
            Some((unit, count)) => (unit.trim().to_lowercase(), count.trim()),
            None => ("lines".to_string(), s),
        };
        let count: usize = count
            .parse()
            .map_err(|_| Error::Config(format!("invalid context window size: {:?}", s)))?;

        match unit.as_str() {
            "lines" | "line" => Ok(ContextWindow::Lines(count)),
            "chars" | "char" => Ok(ContextWindow::Chars(count)),
            _ => Err(Error::Config(format!(
                "unknown context window unit {:?} (expected lines or chars)",
                unit
            ))),
        }
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextWindow::Lines(n) => write!(f, "lines:{}", n),
            ContextWindow::Chars(n) => write!(f, "chars:{}", n),
        }
    }
}
