//! Keyboard letter colors and the on-screen key layout

use crate::core::{Cell, LetterResult};
use rustc_hash::FxHashMap;

/// Rows of the on-screen keyboard as space-separated key names
pub const KEYBOARD_ROWS: [&str; 3] = [
    "q w e r t y u i o p",
    "a s d f g h j k l",
    "enter z x c v b n m back",
];

/// Keyboard rows parsed into keys, top row first
#[must_use]
pub fn keyboard_layout() -> Vec<Vec<Key>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| row.split_whitespace().filter_map(Key::from_name).collect())
        .collect()
}

/// A key press from any input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Map a key name to a game key
    ///
    /// Accepts "Enter"/"enter", "Backspace"/"back" and single ASCII letters.
    /// Anything else is not a game key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" | "enter" => Some(Self::Enter),
            "Backspace" | "back" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

/// Best known result per letter across all submitted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardColors {
    colors: FxHashMap<char, LetterResult>,
}

impl KeyboardColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded result for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        self.colors.get(&letter).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.colors.iter().map(|(&letter, &result)| (letter, result))
    }

    /// Merge evaluated cells, only ever upgrading miss -> present -> exact
    pub fn merge(&mut self, cells: &[Cell]) {
        for cell in cells {
            let (Some(letter), Some(result)) = (cell.letter, cell.result) else {
                continue;
            };
            self.colors
                .entry(letter)
                .and_modify(|current| *current = (*current).max(result))
                .or_insert(result);
        }
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate_guess};

    fn cells(guess: &str, solution: &str) -> Vec<Cell> {
        evaluate_guess(&Word::new(guess).unwrap(), &Word::new(solution).unwrap()).to_vec()
    }

    #[test]
    fn merge_records_results() {
        let mut colors = KeyboardColors::new();
        colors.merge(&cells("crane", "slate"));

        assert_eq!(colors.get('a'), Some(LetterResult::Exact));
        assert_eq!(colors.get('c'), Some(LetterResult::Miss));
        assert_eq!(colors.get('z'), None);
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn merge_never_downgrades() {
        let mut colors = KeyboardColors::new();
        // A is exact in SLATE at position 2
        colors.merge(&cells("crane", "slate"));
        // A is only present here
        colors.merge(&cells("alarm", "slate"));
        assert_eq!(colors.get('a'), Some(LetterResult::Exact));
    }

    #[test]
    fn merge_upgrades_miss_to_present() {
        let mut colors = KeyboardColors::new();
        // Second E of EERIE is a miss after the first two claim SPEED's E's,
        // but the letter as a whole is present
        colors.merge(&cells("eerie", "speed"));
        assert_eq!(colors.get('e'), Some(LetterResult::Present));
    }

    #[test]
    fn merge_skips_unevaluated_cells() {
        let mut colors = KeyboardColors::new();
        colors.merge(&[Cell::pending('q'), Cell::default()]);
        assert!(colors.is_empty());
    }

    #[test]
    fn key_from_name() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("back"), Some(Key::Backspace));
        assert_eq!(Key::from_name("Q"), Some(Key::Letter('q')));
        assert_eq!(Key::from_name("1"), None);
        assert_eq!(Key::from_name("ab"), None);
        assert_eq!(Key::from_name("é"), None);
    }

    #[test]
    fn layout_covers_alphabet() {
        let layout = keyboard_layout();
        let mut letters: Vec<char> = layout
            .iter()
            .flatten()
            .filter_map(|key| match key {
                Key::Letter(c) => Some(*c),
                _ => None,
            })
            .collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn last_row_is_framed_by_enter_and_backspace() {
        let layout = keyboard_layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0].len(), 10);

        let last = &layout[2];
        assert_eq!(last.first(), Some(&Key::Enter));
        assert_eq!(last.last(), Some(&Key::Backspace));
        assert_eq!(last[1], Key::Letter('z'));
        assert_eq!(last.len(), 9);
    }
}
