//! Portfolio Engine
//!
//! The logic behind a personal portfolio site: a six-turn word-guessing game
//! and the tag classification that drives project filtering.
//!
//! # Quick Start
//!
//! ```rust
//! use portfolio_engine::core::{Word, evaluate_guess};
//! use portfolio_engine::tags::TagCategoryMap;
//!
//! // Evaluate a guess
//! let cells = evaluate_guess(&Word::new("eerie").unwrap(), &Word::new("speed").unwrap());
//! assert!(cells.iter().all(|c| c.result.is_some()));
//!
//! // Order tags for display
//! let map = TagCategoryMap::default();
//! assert_eq!(map.sort_tags(&["RAG", "React", "Backend"]), ["Backend", "React", "RAG"]);
//! ```

// Core domain types
pub mod core;

// Game state machine and sessions
pub mod game;

// Tag classification and content filtering
pub mod tags;

// Word lists and word sources
pub mod wordlists;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Error, Result};
