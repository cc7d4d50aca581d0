//! Keyword occurrences with surrounding context.

use indexmap::IndexMap;

use crate::model::{Document, Line};

use super::matcher::KeywordMatcher;
use super::options::ContextWindow;

/// Finds keyword hits in a document and captures context around each.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordContextMiner {
    window: ContextWindow,
}

impl KeywordContextMiner {
    /// Create a miner with the given context window.
    pub fn new(window: ContextWindow) -> Self {
        Self { window }
    }

    /// The context window in use.
    pub fn window(&self) -> ContextWindow {
        self.window
    }

    /// Map each keyword to one snippet per line containing it.
    ///
    /// Snippets are in document order; keywords never seen are absent. Keys
    /// appear in order of their first hit.
    pub fn mine<S: AsRef<str>>(
        &self,
        doc: &Document,
        keywords: &[S],
    ) -> IndexMap<String, Vec<String>> {
        let mut matchers: Vec<KeywordMatcher> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if !matchers.iter().any(|m| m.keyword() == keyword) {
                matchers.push(KeywordMatcher::new(keyword));
            }
        }

        let lines: Vec<&Line> = doc
            .lines()
            .map(|(_, line)| line)
            .filter(|line| !line.is_empty())
            .collect();
        let flat = FlatText::new(&lines);

        let mut hits: IndexMap<String, Vec<String>> = IndexMap::new();
        for (index, line) in lines.iter().enumerate() {
            for matcher in &matchers {
                if !matcher.is_match(line.text()) {
                    continue;
                }
                let snippet = match self.window {
                    ContextWindow::Lines(n) => line_context(&lines, index, n),
                    ContextWindow::Chars(n) => flat.char_context(index, n),
                };
                hits.entry(matcher.keyword().to_string())
                    .or_default()
                    .push(snippet);
            }
        }

        log::debug!(
            "Keyword mining: {} of {} keywords found, {} snippets",
            hits.len(),
            matchers.len(),
            hits.values().map(Vec::len).sum::<usize>()
        );
        hits
    }
}

/// Mine keyword contexts with the given window.
pub fn mine_keywords<S: AsRef<str>>(
    doc: &Document,
    keywords: &[S],
    window: ContextWindow,
) -> IndexMap<String, Vec<String>> {
    KeywordContextMiner::new(window).mine(doc, keywords)
}

fn line_context(lines: &[&Line], index: usize, n: usize) -> String {
    let start = index.saturating_sub(n);
    let end = index.saturating_add(n).saturating_add(1).min(lines.len());
    lines[start..end]
        .iter()
        .map(|line| line.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Document text with the byte span of every line.
struct FlatText {
    text: String,
    spans: Vec<(usize, usize)>,
}

impl FlatText {
    fn new(lines: &[&Line]) -> Self {
        let mut text = String::new();
        let mut spans = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            let start = text.len();
            text.push_str(line.text());
            spans.push((start, text.len()));
        }
        Self { text, spans }
    }

    fn char_context(&self, index: usize, n: usize) -> String {
        let (start, end) = self.spans[index];
        let from = chars_back(&self.text, start, n);
        let to = chars_forward(&self.text, end, n);
        self.text[from..to].trim().to_string()
    }
}

/// Byte offset `n` characters before `from`.
fn chars_back(text: &str, from: usize, n: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

/// Byte offset `n` characters after `from`.
fn chars_forward(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}
