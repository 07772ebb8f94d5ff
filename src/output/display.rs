//! Display functions for command results

use super::formatters::{cells_to_emoji, category_heading, key_label, row_tiles, tag_badge};
use crate::core::{Cell, Word};
use crate::game::{Game, Key, MAX_TURNS, Outcome, keyboard_layout};
use crate::tags::{CategorizedTags, ContentItem, ProjectType, TagCategoryMap};
use colored::Colorize;

/// Print one evaluated guess with its tiles and emoji
pub fn print_evaluation(guess: &Word, solution: &Word, cells: &[Cell]) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        solution.text().to_uppercase().bright_black()
    );
    println!("  {}   {}", row_tiles(cells), cells_to_emoji(cells));
}

/// Print the board, keyboard and status line of a game
pub fn print_board(game: &Game) {
    println!("{}", "─".repeat(40).cyan());
    for index in 0..MAX_TURNS {
        let row = game.board().row_view(index, game.state());
        println!("  {}", row_tiles(&row));
    }
    println!();

    for (indent, row) in keyboard_layout().iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|key| match *key {
                Key::Letter(c) => key_label(c, game.keyboard().get(c)).to_string(),
                Key::Enter => "ENTER".bright_black().to_string(),
                Key::Backspace => "⌫".bright_black().to_string(),
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }

    println!("{}", "─".repeat(40).cyan());
    let status = game.status_text();
    match game.outcome() {
        Outcome::Win => println!("{}", status.green().bold()),
        Outcome::Lose => println!(
            "{} The word was {}.",
            status.red().bold(),
            game.solution().text().to_uppercase().bright_yellow().bold()
        ),
        Outcome::InProgress => println!("{}", status.bright_cyan()),
    }
}

/// Emoji summary of every played row
pub fn print_share_grid(game: &Game) {
    for row in game.board().rows().iter().take(game.state().turn) {
        println!("  {}", cells_to_emoji(row));
    }
}

/// Print a flat project listing
pub fn print_projects(items: &[&ContentItem], map: &TagCategoryMap) {
    if items.is_empty() {
        println!("{}", "No projects match the selected tags.".yellow());
        return;
    }
    for item in items {
        print_project(item, map);
    }
    println!(
        "\n{} {}",
        items.len().to_string().bright_cyan().bold(),
        if items.len() == 1 { "project" } else { "projects" }
    );
}

/// Print projects grouped by type
pub fn print_project_groups(groups: &[(ProjectType, Vec<&ContentItem>)], map: &TagCategoryMap) {
    for (kind, items) in groups {
        println!(
            "\n{} {}",
            format!("▸ {}", kind.label()).bright_cyan().bold(),
            format!("({})", items.len()).bright_black()
        );
        println!("  {}", kind.tooltip().bright_black());
        for item in items {
            print_project(item, map);
        }
    }
}

fn print_project(item: &ContentItem, map: &TagCategoryMap) {
    println!(
        "\n{}  {}",
        item.title.bright_white().bold(),
        item.date.format("%Y-%m-%d").to_string().bright_black()
    );
    println!("  /{}", item.slug_as_params().cyan());
    if let Some(description) = &item.description {
        println!("  {description}");
    }
    let tags: Vec<String> = map
        .sort_tags(item.tags())
        .iter()
        .map(|tag| tag_badge(tag, map.category(tag)).to_string())
        .collect();
    if !tags.is_empty() {
        println!("  {}", tags.join(", "));
    }
}

/// Print the available filter tags
pub fn print_tag_index(tags: &CategorizedTags) {
    for (category, bucket) in tags.iter() {
        println!(
            "\n{} {}",
            category_heading(category),
            format!("({})", bucket.len()).bright_black()
        );
        if bucket.is_empty() {
            println!("  {}", "none".bright_black());
        } else {
            let badges: Vec<String> = bucket
                .iter()
                .map(|tag| tag_badge(tag, category).to_string())
                .collect();
            println!("  {}", badges.join(", "));
        }
    }
}

/// Print each tag's category, then the display order
pub fn print_classification(tags: &[String], map: &TagCategoryMap) {
    let width = tags.iter().map(String::len).max().unwrap_or(0);
    for tag in tags {
        let category = map.category(tag);
        println!("  {tag:<width$}  {}", category_heading(category));
    }

    let sorted: Vec<String> = map
        .sort_tags(tags)
        .iter()
        .map(|tag| tag_badge(tag, map.category(tag)).to_string())
        .collect();
    println!("\n{} {}", "Display order:".bright_cyan().bold(), sorted.join(", "));
}
