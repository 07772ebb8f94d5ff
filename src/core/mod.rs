//! Core domain types for the word game
//!
//! Pure types with no I/O: validated words, per-letter results and the
//! guess evaluation algorithm.

mod feedback;
mod word;

pub use feedback::{Cell, Feedback, LetterResult, evaluate_guess};
pub use word::{WORD_LENGTH, Word, WordError};
