//! TUI rendering with ratatui
//!
//! Header, guess grid, on-screen keyboard, messages and a status line.

use super::app::{App, FetchStatus, MessageStyle};
use super::input::{self, KEYBOARD_HEIGHT};
use crate::core::{GuessResult, LetterFeedback};
use crate::session::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Areas of the screen, shared with mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: Rect,
    pub keyboard: Rect,
    pub messages: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(3),                  // Grid
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(3),               // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        grid: chunks[1],
        keyboard: chunks[2],
        messages: chunks[3],
        status: chunks[4],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_header(f, app, layout.header);
    render_grid(f, app, layout.grid);
    render_keyboard(f, app, layout.keyboard);
    render_messages(f, app, layout.messages);
    render_status(f, app, layout.status);
}

/// Colors for a tile or key showing `feedback`
fn feedback_style(feedback: LetterFeedback) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        LetterFeedback::Correct => style.fg(Color::Black).bg(Color::Green),
        LetterFeedback::Present => style.fg(Color::Black).bg(Color::Yellow),
        LetterFeedback::Absent => style.fg(Color::White).bg(Color::DarkGray),
        LetterFeedback::Empty => style.fg(Color::White).bg(Color::Gray),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session().config();
    let title = format!("{}-TLE", config.word_length());

    let header = Paragraph::new(title)
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

fn guessed_row(result: &GuessResult) -> Line<'static> {
    let mut spans = Vec::with_capacity(result.len() * 2);
    for letter in result {
        spans.push(Span::styled(
            format!(" {} ", letter.character().to_ascii_uppercase()),
            feedback_style(letter.feedback()),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn open_row(letters: &str, word_length: usize) -> Line<'static> {
    let typed = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let empty = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(word_length * 2);
    let mut chars = letters.chars();
    for _ in 0..word_length {
        match chars.next() {
            Some(c) => spans.push(Span::styled(format!("[{}]", c.to_ascii_uppercase()), typed)),
            None => spans.push(Span::styled("[ ]", empty)),
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// History rows, then the row being typed, then empty rows
fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let session = app.session();
    let config = session.config();
    let history = session.history();

    let mut lines = Vec::with_capacity(config.max_attempts() * 2);
    for row in 0..config.max_attempts() {
        let line = match history.get(row) {
            Some(result) => guessed_row(result),
            None if row == history.len() && session.state() == SessionState::InProgress => {
                open_row(session.pending_guess(), config.word_length())
            }
            None => open_row("", config.word_length()),
        };
        lines.push(line);
        lines.push(Line::default());
    }
    lines
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = Paragraph::new(grid_lines(app)).alignment(Alignment::Center);
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let feedback = app.session().keyboard_feedback();

    for (key, rect) in input::key_rects(area) {
        let style = match key {
            input::InputEvent::Letter(c) => feedback_style(feedback.get(c)),
            input::InputEvent::Delete | input::InputEvent::Submit => {
                feedback_style(LetterFeedback::Empty)
            }
        };
        let widget = Paragraph::new(key.label())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(widget, rect);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let line = match (app.fetch_status(), app.messages().last()) {
        (FetchStatus::Pending, _) => Line::styled(
            "Fetching a secret word...",
            Style::default().fg(Color::Cyan),
        ),
        (_, Some(msg)) => {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::styled(msg.text.clone(), style)
        }
        (_, None) => Line::default(),
    };

    let messages = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.stats();
    let stats_text = format!(
        "Played: {} | Win: {}% | Streak: {} (max {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match (app.session().state(), app.fetch_status()) {
        (SessionState::Won | SessionState::Lost, _) => "Enter: New Game | Esc: Quit",
        (SessionState::AwaitingSecretWord, FetchStatus::Failed) => "Enter: Retry | Esc: Quit",
        _ => "Enter: Submit | Backspace: Delete | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
