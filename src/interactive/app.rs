//! TUI application state and logic

use crate::game::{Game, Key, Outcome, RefreshOutcome, Session};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for input before checking on a pending word fetch
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub source: Arc<dyn WordSource>,
    pub source_label: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    /// Win percentage, 0 before the first finished game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, source: Arc<dyn WordSource>, source_label: impl Into<String>) -> Self {
        Self {
            session,
            source,
            source_label: source_label.into(),
            messages: vec![Message {
                text: "Guess the five-letter word. Ctrl-H for help.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            show_help: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        self.session.game()
    }

    /// Apply one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only key presses; Windows also reports releases
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_word(),
            KeyCode::Char('h') if ctrl => self.show_help = !self.show_help,
            KeyCode::Enter if self.game().outcome().is_decided() => self.play_again(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.session.game_mut().press(Key::Backspace),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                self.session.game_mut().press(Key::Letter(c));
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        let game = self.session.game_mut();
        if game.state().current_guess.len() < crate::core::WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }
        if game.submit_guess().is_none() {
            return;
        }

        match self.game().outcome() {
            Outcome::Win => {
                let turns = self.game().state().turn;
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(turns) {
                    *slot += 1;
                }
                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Enter to play again, Ctrl-N for a new word", MessageStyle::Info);
            }
            Outcome::Lose => {
                self.stats.total_games += 1;
                let answer = self.game().solution().text().to_uppercase();
                self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
                self.add_message("Enter to try again, Ctrl-N for a new word", MessageStyle::Info);
            }
            Outcome::InProgress => {}
        }
    }

    fn play_again(&mut self) {
        self.session.game_mut().reset();
        self.add_message("Same word, fresh board", MessageStyle::Info);
    }

    /// Start fetching a new word in the background
    pub fn new_word(&mut self) {
        if self.session.start_refresh(Arc::clone(&self.source)) {
            let label = self.source_label.clone();
            self.add_message(&format!("Fetching a new word from {label}..."), MessageStyle::Info);
        } else {
            self.add_message("Already fetching a word", MessageStyle::Info);
        }
    }

    /// Apply a finished word fetch, if any
    pub fn tick(&mut self) {
        match self.session.poll_refresh() {
            Some(RefreshOutcome::NewWord) => {
                self.add_message("New word ready. Good luck!", MessageStyle::Success);
            }
            Some(RefreshOutcome::Fallback(reason)) => {
                self.add_message(
                    &format!("Fetch failed ({reason}); replaying the last word"),
                    MessageStyle::Error,
                );
            }
            None => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
