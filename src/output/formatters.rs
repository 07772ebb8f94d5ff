//! Formatting utilities for terminal output

use crate::core::{Cell, LetterResult};
use crate::tags::Category;
use colored::{ColoredString, Colorize};

/// Colored tile for one board cell, e.g. ` C ` on green
#[must_use]
pub fn cell_tile(cell: Cell) -> ColoredString {
    let letter = cell.letter.map_or(' ', |c| c.to_ascii_uppercase());
    let tile = format!(" {letter} ");
    match cell.result {
        Some(LetterResult::Exact) => tile.black().on_green().bold(),
        Some(LetterResult::Present) => tile.black().on_yellow().bold(),
        Some(LetterResult::Miss) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A row of tiles separated by single spaces
#[must_use]
pub fn row_tiles(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|&cell| cell_tile(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji squares for evaluated cells; unevaluated cells are blank
#[must_use]
pub fn cells_to_emoji(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| cell.result.map_or(' ', LetterResult::emoji))
        .collect()
}

/// Keyboard letter colored by its best known result
#[must_use]
pub fn key_label(letter: char, result: Option<LetterResult>) -> ColoredString {
    let label = letter.to_ascii_uppercase().to_string();
    match result {
        Some(LetterResult::Exact) => label.green().bold(),
        Some(LetterResult::Present) => label.yellow().bold(),
        Some(LetterResult::Miss) => label.bright_black(),
        None => label.normal(),
    }
}

/// Tag rendered in its category color
#[must_use]
pub fn tag_badge(tag: &str, category: Category) -> ColoredString {
    match category {
        Category::Scope => tag.blue(),
        Category::Tools => tag.green(),
        Category::Focus => tag.purple(),
    }
}

/// Category heading, e.g. `Scope`
#[must_use]
pub fn category_heading(category: Category) -> ColoredString {
    match category {
        Category::Scope => category.label().blue().bold(),
        Category::Tools => category.label().green().bold(),
        Category::Focus => category.label().purple().bold(),
    }
}
