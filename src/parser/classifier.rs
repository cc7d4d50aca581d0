//! Heading-strength classification of layout lines.
//!
//! A line's score is the point size of its representative glyph run, pushed
//! up by one when the font is bold and down by one otherwise, rounded up.
//! Lines without any glyph run fall back to [`BASE_FONT_SIZE`] so they never
//! outrank real text.

use crate::layout::{GlyphRun, LayoutLine};

/// Base size used for lines that carry no glyph metrics.
pub const BASE_FONT_SIZE: f32 = -10.0;

/// Score of a line classified from [`BASE_FONT_SIZE`].
pub const SENTINEL_SCORE: i32 = -11;

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Heading-strength score
    pub score: i32,
    /// Whether the representative glyph run is bold
    pub bold: bool,
    /// Font face of the representative glyph run
    pub font_face: Option<String>,
}

impl LineClass {
    /// Classification of a line with no usable glyph run.
    pub fn sentinel() -> Self {
        Self {
            score: score_for(BASE_FONT_SIZE, false),
            bold: false,
            font_face: None,
        }
    }

    /// Classify a single glyph run.
    pub fn from_run(run: &GlyphRun) -> Self {
        let bold = run.is_bold();
        Self {
            score: score_for(run.size, bold),
            bold,
            font_face: Some(run.font.clone()),
        }
    }
}

/// Compute the score for a raw size and bold state.
///
/// `ceil(size + 1)` for bold text and `ceil(size - 1)` otherwise, computed on
/// the integer ceiling so a bold line always lands exactly two above its
/// non-bold twin. The ceiling is clamped one short of the `i32` range so
/// that gap holds for sizes that do not fit.
pub fn score_for(size: f32, bold: bool) -> i32 {
    let base = (size.ceil() as i32).clamp(i32::MIN + 1, i32::MAX - 1);
    if bold {
        base + 1
    } else {
        base - 1
    }
}

/// Which glyph run stands for the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepresentativeGlyphPolicy {
    /// The first glyph run in reading order
    #[default]
    First,
    /// The largest glyph run (earliest wins on ties)
    MaxSize,
    /// The size and face covering the most characters (earliest wins on ties)
    Majority,
}

impl RepresentativeGlyphPolicy {
    /// Pick the representative glyph run of a line, if it has any.
    pub fn select<'a>(&self, line: &'a LayoutLine) -> Option<&'a GlyphRun> {
        match self {
            Self::First => line.glyph_runs().next(),
            Self::MaxSize => line.glyph_runs().fold(None, |best: Option<&GlyphRun>, run| {
                match best {
                    Some(current) if run.size > current.size => Some(run),
                    Some(current) => Some(current),
                    None => Some(run),
                }
            }),
            Self::Majority => {
                // (representative run, character weight) per distinct style
                let mut groups: Vec<(&GlyphRun, usize)> = Vec::new();
                for run in line.glyph_runs() {
                    let weight = run.text.chars().count();
                    match groups.iter_mut().find(|(rep, _)| {
                        rep.size.to_bits() == run.size.to_bits() && rep.font == run.font
                    }) {
                        Some((_, total)) => *total += weight,
                        None => groups.push((run, weight)),
                    }
                }
                groups
                    .into_iter()
                    .fold(None, |best: Option<(&GlyphRun, usize)>, group| match best {
                        Some(current) if group.1 <= current.1 => Some(current),
                        _ => Some(group),
                    })
                    .map(|(run, _)| run)
            }
        }
    }
}

/// Classifies layout lines into heading-strength scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    policy: RepresentativeGlyphPolicy,
}

impl LineClassifier {
    /// Create a classifier with the given representative glyph policy.
    pub fn new(policy: RepresentativeGlyphPolicy) -> Self {
        Self { policy }
    }

    /// The policy in use.
    pub fn policy(&self) -> RepresentativeGlyphPolicy {
        self.policy
    }

    /// Classify a line. Total: every line gets a score.
    pub fn classify(&self, line: &LayoutLine) -> LineClass {
        self.policy
            .select(line)
            .map(LineClass::from_run)
            .unwrap_or_else(LineClass::sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LineItem;

    fn run(size: f32, font: &str, text: &str) -> LineItem {
        LineItem::Glyph(GlyphRun::new(size, font, text))
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(score_for(12.0, false), 11);
        assert_eq!(score_for(12.0, true), 13);
        assert_eq!(score_for(9.96, false), 9);
        assert_eq!(score_for(9.96, true), 11);
        assert_eq!(score_for(BASE_FONT_SIZE, false), SENTINEL_SCORE);
    }

    #[test]
    fn test_bold_always_two_above() {
        for size in [0.0_f32, 1e-8, 0.5, 7.2, 9.999, 10.0, 23.51, 1e6, 3.0e9, -3.0e9] {
            assert_eq!(score_for(size, true) - score_for(size, false), 2, "size {}", size);
        }
    }

    #[test]
    fn test_out_of_range_size_scores() {
        assert_eq!(score_for(3.0e9, true), i32::MAX);
        assert_eq!(score_for(3.0e9, false), i32::MAX - 2);
        assert_eq!(score_for(f32::INFINITY, false), i32::MAX - 2);
        assert_eq!(score_for(-3.0e9, true), i32::MIN + 2);
        assert_eq!(score_for(-3.0e9, false), i32::MIN);
    }

    #[test]
    fn test_classify_bold_line() {
        let classifier = LineClassifier::default();
        let line = LayoutLine::glyph(13.2, "Arial-BoldMT", "Methods");
        let class = classifier.classify(&line);
        assert_eq!(class.score, 15);
        assert!(class.bold);
        assert_eq!(class.font_face.as_deref(), Some("Arial-BoldMT"));
    }

    #[test]
    fn test_classify_without_glyphs_uses_sentinel() {
        let classifier = LineClassifier::default();
        let empty = LayoutLine::default();
        let annotation = LayoutLine::annotation("   ");

        for line in [empty, annotation] {
            let class = classifier.classify(&line);
            assert_eq!(class, LineClass::sentinel());
            assert_eq!(class.score, SENTINEL_SCORE);
            assert!(!class.bold);
            assert!(class.font_face.is_none());
        }
    }

    #[test]
    fn test_first_policy_skips_leading_annotation() {
        let line = LayoutLine::new(vec![
            LineItem::Annotation {
                text: " ".to_string(),
            },
            run(8.0, "Times", "small"),
            run(20.0, "Times-Bold", "LARGE"),
        ]);
        let class = LineClassifier::default().classify(&line);
        assert_eq!(class.score, 7);
        assert!(!class.bold);
    }

    #[test]
    fn test_max_size_policy() {
        let line = LayoutLine::new(vec![
            run(8.0, "Times", "small"),
            run(20.0, "Times-Bold", "LARGE"),
            run(20.0, "Times", "tie"),
        ]);
        let class = LineClassifier::new(RepresentativeGlyphPolicy::MaxSize).classify(&line);
        assert_eq!(class.score, 21);
        assert!(class.bold);
    }

    #[test]
    fn test_majority_policy() {
        let line = LayoutLine::new(vec![
            run(9.0, "Times", "1."),
            run(14.0, "Times-Bold", "Intro"),
            run(14.0, "Times-Bold", "duction"),
            run(9.0, "Times", "x"),
        ]);
        let class = LineClassifier::new(RepresentativeGlyphPolicy::Majority).classify(&line);
        assert_eq!(class.score, 15);
        assert!(class.bold);

        let tie = LayoutLine::new(vec![run(9.0, "Times", "ab"), run(14.0, "Times", "cd")]);
        let class = LineClassifier::new(RepresentativeGlyphPolicy::Majority).classify(&tie);
        assert_eq!(class.score, 8);
    }
}
