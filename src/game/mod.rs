//! Word game engine
//!
//! Board, keyboard colors and the win/lose state machine, plus a session
//! wrapper that swaps in new solutions from a word source.

mod board;
mod engine;
mod keyboard;
pub mod session;

pub use board::{Board, GuessRow, MAX_TURNS};
pub use engine::{Game, GameState, Outcome};
pub use keyboard::{KEYBOARD_ROWS, Key, KeyboardColors, keyboard_layout};
pub use session::{RefreshOutcome, Session};
