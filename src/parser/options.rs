//! Document build options.

use super::RepresentativeGlyphPolicy;

/// Options for building a document from layout output.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Which glyph run represents a line
    pub glyph_policy: RepresentativeGlyphPolicy,

    /// Normalize line text to Unicode NFC
    pub normalize_unicode: bool,

    /// Classify pages in parallel
    pub parallel: bool,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the representative glyph policy.
    pub fn with_glyph_policy(mut self, policy: RepresentativeGlyphPolicy) -> Self {
        self.glyph_policy = policy;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            glyph_policy: RepresentativeGlyphPolicy::First,
            normalize_unicode: true,
            parallel: true,
        }
    }
}
