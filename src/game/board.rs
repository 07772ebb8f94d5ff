//! Fixed-size guess board

use super::engine::GameState;
use crate::core::{Cell, WORD_LENGTH};

/// Number of guesses allowed per game
pub const MAX_TURNS: usize = 6;

/// One row of the board
pub type GuessRow = [Cell; WORD_LENGTH];

/// Board of `MAX_TURNS` rows by `WORD_LENGTH` cells
///
/// Rows with index below the current turn hold evaluated cells; the rest
/// stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [GuessRow; MAX_TURNS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An all-empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[Cell {
                letter: None,
                result: None,
            }; WORD_LENGTH]; MAX_TURNS],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; MAX_TURNS] {
        &self.rows
    }

    /// Row at `index`, or `None` past the last turn
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.rows.get(index)
    }

    pub(crate) fn set_row(&mut self, index: usize, row: GuessRow) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row;
        }
    }

    /// True when no cell holds a letter or a result
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(Cell::is_empty)
    }

    /// Row as a presentation layer draws it
    ///
    /// The current row of an in-progress game shows the pending letters
    /// without results; every other row is returned as stored.
    #[must_use]
    pub fn row_view(&self, index: usize, state: &GameState) -> GuessRow {
        let Some(row) = self.row(index) else {
            return [Cell::default(); WORD_LENGTH];
        };

        if index != state.turn || state.outcome.is_decided() {
            return *row;
        }

        let mut view = *row;
        for (cell, letter) in view.iter_mut().zip(state.current_guess.chars()) {
            if cell.letter.is_none() {
                *cell = Cell::pending(letter);
            }
        }
        view
    }
}
