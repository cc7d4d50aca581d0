//! Document model types.
//!
//! A [`Document`] owns its [`Page`]s, which own their [`Line`]s. The graph is
//! built once from layout output and traversed top-down only.

mod document;
mod line;
mod page;

pub use document::Document;
pub use line::{Line, LinePosition};
pub use page::Page;
