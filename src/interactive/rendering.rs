//! TUI rendering with ratatui
//!
//! Board, keyboard and side panel for the word game.

use super::app::{App, MessageStyle};
use crate::core::{Cell, LetterResult};
use crate::game::{Key, MAX_TURNS, Outcome, keyboard_layout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const EXACT: Color = Color::Rgb(0x17, 0xc1, 0x5f);
const PRESENT: Color = Color::Rgb(0xf4, 0xa8, 0x00);
const MISS: Color = Color::Rgb(0x3a, 0x3a, 0x3c);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::Exact => EXACT,
        LetterResult::Present => PRESENT,
        LetterResult::Miss => MISS,
    }
}

fn tile(cell: Cell) -> Span<'static> {
    let letter = cell.letter.map_or('·', |c| c.to_ascii_uppercase());
    let style = match cell.result {
        Some(result) => Style::default()
            .fg(Color::White)
            .bg(result_color(result))
            .add_modifier(Modifier::BOLD),
        None if cell.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let mut lines = vec![Line::from("")];
    for index in 0..MAX_TURNS {
        let row = game.board().row_view(index, game.state());
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in row {
            spans.push(tile(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let banner = match game.outcome() {
        Outcome::Win => Some(Span::styled(
            "🎉 You got it! 🎉",
            Style::default().fg(EXACT).add_modifier(Modifier::BOLD),
        )),
        Outcome::Lose => Some(Span::styled(
            format!("The word was {}", game.solution().text().to_uppercase()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Outcome::InProgress => None,
    };
    if let Some(banner) = banner {
        lines.push(Line::from(banner));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    if app.show_help {
        render_help(f, app, chunks[0]);
    } else {
        render_stats(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let content = vec![
        Line::from(format!("Guess the word in {MAX_TURNS} tries.")),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(Color::White).bg(EXACT)),
            Span::raw(" right letter, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" B ", Style::default().fg(Color::White).bg(PRESENT)),
            Span::raw(" in the word, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled(" C ", Style::default().fg(Color::White).bg(MISS)),
            Span::raw(" not in the word"),
        ]),
        Line::from(""),
        Line::from(vec![key("Enter"), Span::raw(" submit / play again")]),
        Line::from(vec![key("Ctrl-N"), Span::raw(" new word")]),
        Line::from(vec![key("Esc"), Span::raw(" quit")]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Hint: {}", app.game().hint()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        )),
    ];

    let help = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(help, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut content = vec![
        Line::from(format!(
            "Played: {}  Won: {}  ({:.0}%)",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(""),
    ];
    for turns in 1..=MAX_TURNS {
        let count = stats.guess_distribution[turns];
        let width = count * 16 / max;
        content.push(Line::from(vec![
            Span::raw(format!("{turns} ")),
            Span::styled("█".repeat(width), Style::default().fg(EXACT)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let colors = app.game().keyboard();
    let key_span = |key: &Key| match *key {
        Key::Letter(c) => {
            let style = colors.get(c).map_or_else(
                || Style::default().fg(Color::White),
                |result| Style::default().fg(Color::White).bg(result_color(result)),
            );
            Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
        }
        Key::Enter => Span::styled(" ENTER ", Style::default().fg(Color::Yellow)),
        Key::Backspace => Span::styled(" ⌫ ", Style::default().fg(Color::Yellow)),
    };

    let lines: Vec<Line> = keyboard_layout()
        .iter()
        .map(|row| Line::from(row.iter().map(&key_span).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status = Paragraph::new(app.game().status_text()).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let source_text = if app.session.is_refreshing() {
        format!("Fetching from {}...", app.source_label)
    } else {
        format!("Words: {}", app.source_label)
    };
    let source = Paragraph::new(source_text).alignment(Alignment::Center);
    f.render_widget(source, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Word | Ctrl-H: Help")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, Session};
    use crate::wordlists::{EmbeddedWordSource, WordSource};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_help() {
        let session = Session::new(Game::new(Word::new("crane").unwrap()));
        let source: Arc<dyn WordSource> = Arc::new(EmbeddedWordSource::new(Vec::new()));
        let mut app = App::new(session, source, "embedded list");
        for c in "slate".chars() {
            app.session.game_mut().add_letter(c);
        }
        app.session.game_mut().submit_guess();
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Board"));
        assert!(text.contains("How to play"));
        assert!(text.contains("Starts with C, ends with E."));
        assert!(text.contains("Turn 2 of 6"));
        assert!(text.contains("ENTER"));
        assert!(text.contains("⌫"));
    }
}
