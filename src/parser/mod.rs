//! Line classification and document building.

mod builder;
mod classifier;
mod options;

pub use builder::DocumentBuilder;
pub use classifier::{
    score_for, LineClass, LineClassifier, RepresentativeGlyphPolicy, BASE_FONT_SIZE,
    SENTINEL_SCORE,
};
pub use options::BuildOptions;
