//! Word lists and word sources
//!
//! The answer list is embedded at build time. A `WordSource` hands out the
//! next solution, either from a local list or from an HTTP endpoint.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use source::{EmbeddedWordSource, HttpWordSource, WordSource};
