//! TUI application state and logic

use super::events::{self, Action};
use super::input::{self, InputEvent};
use super::rendering;
use crate::config::{FetchPolicy, GameConfig};
use crate::session::{GameSession, SessionState, Statistics};
use crate::word_source::{ConfiguredSource, WordSourceError, fetch_with_retry};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Pending,
    Failed,
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

/// Application state
pub struct App {
    session: GameSession,
    dictionary: Arc<dyn Dictionary>,
    source: Arc<ConfiguredSource>,
    policy: FetchPolicy,
    fetch: FetchStatus,
    messages: Vec<Message>,
    stats: Statistics,
    /// Where the keyboard was last drawn, for click hit-testing
    keyboard_area: Rect,
    should_quit: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(
        config: GameConfig,
        dictionary: Arc<dyn Dictionary>,
        source: ConfiguredSource,
        policy: FetchPolicy,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            session: GameSession::new(config, Arc::clone(&dictionary)),
            dictionary,
            source: Arc::new(source),
            policy,
            fetch: FetchStatus::Idle,
            messages: Vec::new(),
            stats: Statistics::new(config.max_attempts()),
            keyboard_area: Rect::default(),
            should_quit: false,
            action_tx,
            action_rx,
        }
    }

    /// Ask the word source for a secret in the background
    ///
    /// The result comes back through the action channel.
    pub fn start_fetch(&mut self) {
        self.fetch = FetchStatus::Pending;

        let source = Arc::clone(&self.source);
        let policy = self.policy;
        let length = self.session.config().word_length();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = fetch_with_retry(source.as_ref(), length, &policy).await;
            // The loop may already be gone if the player quit
            let _ = tx.send(Action::SecretWordFetched(result));
        });
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Redraw => {}
            Action::Input(event) => self.handle_input(event),
            Action::Click { column, row } => {
                if let Some(event) = input::key_at(self.keyboard_area, column, row) {
                    self.handle_input(event);
                }
            }
            Action::SecretWordFetched(result) => self.secret_word_fetched(result),
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        match (self.session.state(), event) {
            (SessionState::InProgress, InputEvent::Letter(c)) => {
                self.session.append_char(c);
            }
            (SessionState::InProgress, InputEvent::Delete) => {
                self.session.delete_char();
            }
            (SessionState::InProgress, InputEvent::Submit) => self.submit(),
            (SessionState::AwaitingSecretWord, InputEvent::Submit)
                if self.fetch == FetchStatus::Failed =>
            {
                self.add_message("Retrying...", MessageStyle::Info);
                self.start_fetch();
            }
            (SessionState::Won | SessionState::Lost, InputEvent::Submit) => self.new_game(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if let Err(err) = self.session.submit_guess().map(|_| ()) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        match self.session.state() {
            SessionState::Won => {
                self.stats.record(&self.session);
                let celebration = match self.session.history().len() {
                    1 => "Hole in one!",
                    2 => "Magnificent!",
                    3 => "Splendid!",
                    4 => "Great job!",
                    5 => "Nice work!",
                    _ => "Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game.", MessageStyle::Info);
            }
            SessionState::Lost => {
                self.stats.record(&self.session);
                let secret = self
                    .session
                    .secret_word()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(&format!("The word was {secret}."), MessageStyle::Error);
                self.add_message("Press Enter for a new game.", MessageStyle::Info);
            }
            SessionState::InProgress | SessionState::AwaitingSecretWord => {}
        }
    }

    fn secret_word_fetched(&mut self, result: Result<String, WordSourceError>) {
        let outcome = result
            .map_err(|err| err.to_string())
            .and_then(|word| {
                self.session
                    .set_secret_word(&word)
                    .map_err(|err| err.to_string())
            });

        match outcome {
            Ok(()) => {
                self.fetch = FetchStatus::Idle;
                self.add_message(
                    &format!(
                        "Guess the {}-letter word!",
                        self.session.config().word_length()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                tracing::error!(%err, "could not start game");
                self.fetch = FetchStatus::Failed;
                self.add_message(
                    &format!("Could not get a word: {err}. Press Enter to retry."),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(*self.session.config(), Arc::clone(&self.dictionary));
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.start_fetch();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the main loop until the player quits
    async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let reader = events::spawn_event_reader(self.action_tx.clone());
        self.start_fetch();

        while !self.should_quit {
            let frame = terminal.draw(|f| rendering::ui(f, self))?;
            self.keyboard_area = rendering::screen_layout(frame.area).keyboard;

            match self.action_rx.recv().await {
                Some(action) => self.handle_action(action),
                None => break,
            }
        }

        // Closing the channel stops the reader at its next poll
        self.action_rx.close();
        drop(reader);
        Ok(())
    }
}

/// Restore the terminal before a panic message is printed
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(mut app: App) -> Result<()> {
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal).await;

    // Restore terminal
    restore()?;
    terminal.show_cursor()?;

    let stats = app.stats();
    tracing::info!(
        played = stats.games_played,
        won = stats.games_won,
        "session finished"
    );

    res
}
