//! Guess evaluation against a solution
//!
//! Each guessed letter is marked:
//! - `Exact`: same letter at the same position
//! - `Present`: letter occurs elsewhere in the solution and that occurrence
//!   has not already been claimed
//! - `Miss`: no unclaimed occurrence remains
//!
//! Duplicate letters follow the two-pass rule: every exact match is claimed
//! first, then the remaining positions claim leftover occurrences left to right.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Result for a single evaluated letter
///
/// Ordered `Miss < Present < Exact`, which is also the upgrade order used
/// by the keyboard colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    Miss,
    Present,
    Exact,
}

impl LetterResult {
    /// Emoji tile for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// One board position: an optional letter and an optional result
///
/// Unplayed cells have neither. Cells of the row being typed carry a
/// letter but no result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub result: Option<LetterResult>,
}

impl Cell {
    /// An evaluated cell
    #[must_use]
    pub const fn evaluated(letter: char, result: LetterResult) -> Self {
        Self {
            letter: Some(letter),
            result: Some(result),
        }
    }

    /// A typed but not yet evaluated cell
    #[must_use]
    pub const fn pending(letter: char) -> Self {
        Self {
            letter: Some(letter),
            result: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none() && self.result.is_none()
    }
}

/// Evaluated feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All letters exact
    pub const PERFECT: Self = Self([LetterResult::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass: left to right, mark present while the pool still holds
    ///    the letter, otherwise miss
    ///
    /// # Examples
    /// ```
    /// use portfolio_engine::core::{Feedback, LetterResult::*, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let solution = Word::new("allot").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &solution);
    /// assert_eq!(feedback.results(), &[Present, Present, Exact, Miss, Miss]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterResult::Miss; WORD_LENGTH];
        let mut matched = [false; WORD_LENGTH];
        let mut available = solution.letter_counts();

        // First pass: exact position matches
        for (i, (g, s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                result[i] = LetterResult::Exact;
                matched[i] = true;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present vs miss over the unclaimed remainder
        for (i, letter) in guess.letters().iter().enumerate() {
            if matched[i] {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    #[must_use]
    pub fn count_exact(self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Exact).count()
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Present).count()
    }

    /// Pair the feedback with the guessed letters
    #[must_use]
    pub fn cells(self, guess: &Word) -> [Cell; WORD_LENGTH] {
        let mut cells = [Cell::default(); WORD_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Cell::evaluated(guess.letter_at(i), self.0[i]);
        }
        cells
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

/// Evaluate a guess and return the filled-in board cells
///
/// # Examples
/// ```
/// use portfolio_engine::core::{evaluate_guess, LetterResult, Word};
///
/// let cells = evaluate_guess(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
/// assert!(cells.iter().all(|c| c.result == Some(LetterResult::Exact)));
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, solution: &Word) -> [Cell; WORD_LENGTH] {
    Feedback::evaluate(guess, solution).cells(guess)
}
