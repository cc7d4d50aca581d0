//! Keyword lists and mining configuration.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::extract::ContextWindow;

/// A normalized list of keywords.
///
/// Keyword files hold one keyword per line. Lines are trimmed and
/// lower-cased; blank lines and lines starting with `#` are skipped, and
/// repeated keywords are kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl KeywordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse keyword file contents.
    pub fn parse(content: &str) -> Self {
        let mut list = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            list.push(line);
        }
        list
    }

    /// Read and parse a keyword file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read keyword file {}: {}", path.display(), e))
        })?;
        let list = Self::parse(&content);
        log::debug!("Loaded {} keywords from {}", list.len(), path.display());
        Ok(list)
    }

    /// Read a keyword file, falling back to an empty list if it is unreadable.
    pub fn from_file_or_empty<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            log::warn!("{}; using no keywords", e);
            Self::new()
        })
    }

    /// Add a keyword, normalizing it. Blank and duplicate keywords are ignored.
    pub fn push(&mut self, keyword: &str) {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
    }

    /// The keywords in file order.
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for keyword in iter {
            list.push(keyword.as_ref());
        }
        list
    }
}

/// What to mine from each document.
#[derive(Debug, Clone, Default)]
pub struct MineOptions {
    /// Keywords to locate with context
    pub keywords: KeywordList,

    /// Heading keywords naming the sections to extract
    pub section_keywords: KeywordList,

    /// Context captured around each keyword hit
    pub context_window: ContextWindow,
}

impl MineOptions {
    /// Create new mine options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keywords.
    pub fn with_keywords(mut self, keywords: KeywordList) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the section heading keywords.
    pub fn with_section_keywords(mut self, keywords: KeywordList) -> Self {
        self.section_keywords = keywords;
        self
    }

    /// Set the context window.
    pub fn with_context_window(mut self, window: ContextWindow) -> Self {
        self.context_window = window;
        self
    }
}
