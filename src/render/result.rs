//! Analysis record produced for each document.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything mined from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Full document text, pages separated by newlines
    pub text: String,

    /// Section text keyed by title-cased heading keyword
    pub sections: IndexMap<String, String>,

    /// Context snippets keyed by keyword
    pub keywords: IndexMap<String, Vec<String>>,

    /// Whether any line in the document is bold
    pub has_bold_heading: bool,

    /// Number of pages
    pub page_count: usize,

    /// Number of lines
    pub line_count: usize,

    /// When the document was processed
    pub processed_at: DateTime<Utc>,
}

impl Analysis {
    /// Create an empty record stamped with the current time.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            sections: IndexMap::new(),
            keywords: IndexMap::new(),
            has_bold_heading: false,
            page_count: 0,
            line_count: 0,
            processed_at: Utc::now(),
        }
    }

    /// Whether any keyword was found.
    ///
    /// Documents with keyword hits are the ones worth keeping.
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Whether any section was found.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Get a section by its title-cased name.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Get the snippets recorded for a keyword.
    pub fn snippets(&self, keyword: &str) -> Option<&[String]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    /// Total number of keyword snippets.
    pub fn snippet_count(&self) -> usize {
        self.keywords.values().map(Vec::len).sum()
    }
}

impl Default for Analysis {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_accessors() {
        let mut analysis = Analysis::new();
        assert!(!analysis.has_keywords());
        assert!(!analysis.has_sections());

        analysis
            .sections
            .insert("References".to_string(), "References Smith 1999".to_string());
        analysis.keywords.insert(
            "child".to_string(),
            vec!["child care".to_string(), "a child".to_string()],
        );

        assert!(analysis.has_keywords());
        assert_eq!(analysis.section("References"), Some("References Smith 1999"));
        assert_eq!(analysis.section("Methods"), None);
        assert_eq!(analysis.snippets("child").map(<[String]>::len), Some(2));
        assert_eq!(analysis.snippet_count(), 2);
    }
}
