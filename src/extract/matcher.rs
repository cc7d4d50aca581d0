//! Case-insensitive literal keyword matching.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Matches one keyword as a case-insensitive literal substring.
///
/// A blank keyword never matches.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    regex: Option<Regex>,
}

impl KeywordMatcher {
    /// Build a matcher for a keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let regex = if keyword.trim().is_empty() {
            None
        } else {
            match RegexBuilder::new(&regex::escape(&keyword))
                .case_insensitive(true)
                .build()
            {
                Ok(regex) => Some(regex),
                Err(e) => {
                    log::warn!("Keyword {:?} cannot be matched: {}", keyword, e);
                    None
                }
            }
        };
        Self { keyword, regex }
    }

    /// The keyword as given.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Check if the keyword occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Byte range of the first occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex.as_ref()?.find(text).map(|m| m.range())
    }
}

/// Convert a keyword to title case ("data sharing" → "Data Sharing").
///
/// Letters following a non-letter are upper-cased, all others lower-cased.
pub fn title_case(keyword: &str) -> String {
    let mut result = String::with_capacity(keyword.len());
    let mut after_letter = false;
    for c in keyword.chars() {
        if c.is_alphabetic() {
            if after_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            result.push(c);
            after_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let matcher = KeywordMatcher::new("references");
        assert!(matcher.is_match("REFERENCES"));
        assert!(matcher.is_match("7. References and notes"));
        assert!(!matcher.is_match("Referenced"));
        assert_eq!(matcher.find("See References"), Some(4..14));
    }

    #[test]
    fn test_literal_special_characters() {
        let matcher = KeywordMatcher::new("c++ (v2)");
        assert!(matcher.is_match("we used C++ (v2) here"));
        assert!(!matcher.is_match("c (v2)"));
    }

    #[test]
    fn test_blank_keyword_never_matches() {
        assert!(!KeywordMatcher::new("").is_match("anything"));
        assert!(!KeywordMatcher::new("   ").is_match("a   b"));
        assert_eq!(KeywordMatcher::new("").find("x"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("references"), "References");
        assert_eq!(title_case("data sharing"), "Data Sharing");
        assert_eq!(title_case("follow-up"), "Follow-Up");
        assert_eq!(title_case(""), "");
    }
}
