//! Section and keyword-context extraction over built documents.

mod keywords;
mod matcher;
mod options;
mod section;

pub use keywords::{mine_keywords, KeywordContextMiner};
pub use matcher::{title_case, KeywordMatcher};
pub use options::{BoundaryMode, ContextWindow, ExtractOptions, HeadingThreshold};
pub use section::{extract_section, extract_sections, SectionBoundary, SectionExtractor};
