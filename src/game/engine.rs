//! Turn-based game state machine
//!
//! A `Game` owns its solution, board, keyboard colors and turn state. The
//! only ways to mutate it are the three player actions (`add_letter`,
//! `remove_letter`, `submit_guess`) plus `reset` and `set_solution`.
//! Invalid actions are silent no-ops.

use super::board::{Board, MAX_TURNS};
use super::keyboard::{Key, KeyboardColors};
use crate::core::{Feedback, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Game outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    #[default]
    InProgress,
    Win,
    Lose,
}

impl Outcome {
    /// Win and lose are terminal until reset
    #[inline]
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Turn counter, outcome and the letters typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Number of submitted guesses, in `0..=MAX_TURNS`
    pub turn: usize,
    pub outcome: Outcome,
    /// Pending lowercase letters, at most `WORD_LENGTH`
    pub current_guess: String,
}

/// A single word game
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    board: Board,
    state: GameState,
    keyboard: KeyboardColors,
}

impl Game {
    /// Start a game for `solution`
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            board: Board::new(),
            state: GameState::default(),
            keyboard: KeyboardColors::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardColors {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Append a letter to the current guess
    ///
    /// Ignored once the game is decided, when the guess is already full, or
    /// when `letter` is not an ASCII letter. Returns whether it was accepted.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.state.outcome.is_decided()
            || self.state.current_guess.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.state.current_guess.push(letter.to_ascii_lowercase());
        true
    }

    /// Drop the last pending letter
    ///
    /// Ignored once the game is decided or when nothing is pending.
    pub fn remove_letter(&mut self) -> bool {
        if self.state.outcome.is_decided() {
            return false;
        }
        self.state.current_guess.pop().is_some()
    }

    /// Evaluate the pending guess and advance the turn
    ///
    /// Ignored once decided, when the guess is not exactly `WORD_LENGTH`
    /// letters, or when every turn has been used. Board, keyboard colors and
    /// state are updated together. Returns the feedback of an accepted guess.
    ///
    /// # Examples
    /// ```
    /// use portfolio_engine::core::Word;
    /// use portfolio_engine::game::{Game, Outcome};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap());
    /// for c in "crane".chars() {
    ///     game.add_letter(c);
    /// }
    /// let feedback = game.submit_guess().unwrap();
    /// assert!(feedback.is_perfect());
    /// assert_eq!(game.outcome(), Outcome::Win);
    /// ```
    pub fn submit_guess(&mut self) -> Option<Feedback> {
        if self.state.outcome.is_decided() || self.state.turn >= MAX_TURNS {
            return None;
        }

        let guess = Word::new(&self.state.current_guess).ok()?;
        let feedback = Feedback::evaluate(&guess, &self.solution);
        let cells = feedback.cells(&guess);
        let row = self.state.turn;

        self.board.set_row(row, cells);
        self.keyboard.merge(&cells);

        self.state.turn += 1;
        self.state.current_guess.clear();
        self.state.outcome = if guess == self.solution {
            Outcome::Win
        } else if self.state.turn == MAX_TURNS {
            Outcome::Lose
        } else {
            Outcome::InProgress
        };

        debug!(
            turn = self.state.turn,
            guess = guess.text(),
            feedback = %feedback.to_emoji(),
            outcome = ?self.state.outcome,
            "guess submitted"
        );

        Some(feedback)
    }

    /// Dispatch a key press to the matching player action
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Letter(c) => {
                self.add_letter(c);
            }
            Key::Backspace => {
                self.remove_letter();
            }
            Key::Enter => {
                self.submit_guess();
            }
        }
    }

    /// Clear board, state and keyboard colors, keeping the solution
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state = GameState::default();
        self.keyboard.clear();
    }

    /// Replace the solution and start over
    pub fn set_solution(&mut self, solution: Word) {
        self.solution = solution;
        self.reset();
    }

    /// Short status line for the current state
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.state.outcome {
            Outcome::Win => "You got it!".to_string(),
            Outcome::Lose => "Out of tries".to_string(),
            Outcome::InProgress => {
                format!("Turn {} of {MAX_TURNS}", self.state.turn + 1)
            }
        }
    }

    /// First and last letter of the solution
    #[must_use]
    pub fn hint(&self) -> String {
        let first = self.solution.letter_at(0).to_ascii_uppercase();
        let last = self.solution.letter_at(WORD_LENGTH - 1).to_ascii_uppercase();
        format!("Starts with {first}, ends with {last}.")
    }
}
