//! Simple interactive CLI mode
//!
//! Line-based word game without the TUI

use crate::error::Result;
use crate::game::{Outcome, RefreshOutcome, Session};
use crate::output::{print_board, print_share_grid};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Redraw the board
    Redraw,
    /// Print a message, board unchanged
    Message(String),
    Quit,
}

/// Apply one line of input to the session
///
/// Lines starting with `:` are commands; anything else is typed as a guess
/// and submitted.
pub fn handle_line(session: &mut Session, source: &dyn WordSource, line: &str) -> LineAction {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => LineAction::Quit,
        ":hint" | ":h" => LineAction::Message(session.game().hint()),
        ":reset" | ":r" => {
            session.game_mut().reset();
            LineAction::Redraw
        }
        ":new" | ":n" => match session.refresh(source) {
            Some(RefreshOutcome::Fallback(reason)) => {
                LineAction::Message(format!("Could not fetch a new word ({reason}); board reset."))
            }
            _ => LineAction::Redraw,
        },
        cmd if cmd.starts_with(':') => {
            LineAction::Message(format!("Unknown command: {cmd}. Try :new, :reset, :hint or :quit"))
        }
        guess => submit_line(session, guess),
    }
}

fn submit_line(session: &mut Session, guess: &str) -> LineAction {
    let game = session.game_mut();
    if game.outcome().is_decided() {
        return LineAction::Message("Game over. Type :reset or :new to play again.".to_string());
    }

    while game.remove_letter() {}
    for letter in guess.chars() {
        if !game.add_letter(letter) {
            while game.remove_letter() {}
            return LineAction::Message("Enter exactly 5 letters (a-z).".to_string());
        }
    }

    if game.submit_guess().is_some() {
        LineAction::Redraw
    } else {
        while game.remove_letter() {}
        LineAction::Message("Enter exactly 5 letters (a-z).".to_string())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session, source: &dyn WordSource) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Word Game - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {} tries.", crate::game::MAX_TURNS);
    println!("Commands: ':new' new word, ':reset' restart, ':hint' hint, ':quit' exit\n");
    print_board(session.game());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match handle_line(session, source, &line) {
            LineAction::Quit => break,
            LineAction::Message(message) => println!("{}", message.yellow()),
            LineAction::Redraw => {
                print_board(session.game());
                if session.game().outcome() == Outcome::Win {
                    println!();
                    print_share_grid(session.game());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use crate::wordlists::EmbeddedWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (Session, EmbeddedWordSource) {
        let session = Session::new(Game::new(Word::new("crane").unwrap()));
        let source = EmbeddedWordSource::new(words_from_slice(&["pixel"]));
        (session, source)
    }

    #[test]
    fn guess_line_submits() {
        let (mut session, source) = setup();
        assert_eq!(handle_line(&mut session, &source, "slate"), LineAction::Redraw);
        assert_eq!(session.game().state().turn, 1);
    }

    #[test]
    fn bad_guess_leaves_state() {
        let (mut session, source) = setup();
        for line in ["toolong", "abc", "ab1de"] {
            assert!(matches!(
                handle_line(&mut session, &source, line),
                LineAction::Message(_)
            ));
        }
        assert_eq!(session.game().state().turn, 0);
        assert!(session.game().state().current_guess.is_empty());
    }

    #[test]
    fn commands() {
        let (mut session, source) = setup();
        handle_line(&mut session, &source, "crane");
        assert_eq!(session.game().outcome(), Outcome::Win);

        assert!(matches!(
            handle_line(&mut session, &source, "slate"),
            LineAction::Message(_)
        ));
        assert_eq!(
            handle_line(&mut session, &source, ":hint"),
            LineAction::Message("Starts with C, ends with E.".to_string())
        );

        handle_line(&mut session, &source, ":reset");
        assert_eq!(session.game().outcome(), Outcome::InProgress);
        assert_eq!(session.game().solution().text(), "crane");

        handle_line(&mut session, &source, ":new");
        assert_eq!(session.game().solution().text(), "pixel");

        assert_eq!(handle_line(&mut session, &source, ":QUIT"), LineAction::Quit);
        assert!(matches!(
            handle_line(&mut session, &source, ":dance"),
            LineAction::Message(_)
        ));
    }

    #[test]
    fn new_word_failure_keeps_solution() {
        let (mut session, _) = setup();
        let empty = EmbeddedWordSource::new(Vec::new());
        handle_line(&mut session, &empty, "slate");

        let action = handle_line(&mut session, &empty, ":new");
        assert!(matches!(action, LineAction::Message(_)));
        assert_eq!(session.game().solution().text(), "crane");
        assert_eq!(session.game().state().turn, 0);
    }
}
