//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use super::CommandError;
use crate::config::{FetchPolicy, GameConfig};
use crate::output::{print_board, print_game_over, print_statistics};
use crate::session::{GameSession, SessionState, Statistics};
use crate::word_source::{WordSource, fetch_with_retry};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished(SessionState),
    /// The player quit or input ran out mid-game
    Abandoned,
}

/// Everything a line-mode run needs besides its input and output
#[derive(Debug, Clone)]
pub struct SimpleGame {
    pub config: GameConfig,
    pub dictionary: Arc<dyn Dictionary>,
    pub policy: FetchPolicy,
}

fn is_quit(line: &str) -> bool {
    matches!(line, ":q" | ":quit")
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}: ")?;
    out.flush()
}

/// Play an already started session to the end, one guess per input line
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameOutcome> {
    let config = *session.config();

    while session.state() == SessionState::InProgress {
        prompt(
            out,
            &format!(
                "Guess {}/{}",
                session.history().len() + 1,
                config.max_attempts()
            ),
        )?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(GameOutcome::Abandoned);
        };
        if is_quit(&line) {
            return Ok(GameOutcome::Abandoned);
        }

        while session.delete_char() {}
        let word = line.to_ascii_lowercase();
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            writeln!(out, "{}", "Only letters a-z, please.".red())?;
            continue;
        }
        if word.len() > config.word_length() {
            writeln!(
                out,
                "{}",
                format!("Too many letters: {} of {}", word.len(), config.word_length()).red()
            )?;
            continue;
        }
        for c in word.chars() {
            session.append_char(c);
        }

        match session.submit_guess().map(|_| ()) {
            Ok(()) => print_board(out, session)?,
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }

    print_game_over(out, session)?;
    Ok(GameOutcome::Finished(session.state()))
}

/// Fetch a secret word, asking the player to retry after failures
///
/// Returns `None` if the player gives up.
async fn start_session<S, R, W>(
    game: &SimpleGame,
    source: &S,
    input: &mut R,
    out: &mut W,
) -> Result<Option<GameSession>, CommandError>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    loop {
        let mut session = GameSession::new(game.config, Arc::clone(&game.dictionary));
        let fetched = fetch_with_retry(source, game.config.word_length(), &game.policy).await;

        let error = match fetched {
            Ok(word) => match session.set_secret_word(&word) {
                Ok(()) => return Ok(Some(session)),
                Err(err) => err.to_string(),
            },
            Err(err) => err.to_string(),
        };

        writeln!(out, "{}", format!("Could not get a word: {error}").red())?;
        prompt(out, "Press Enter to retry or :q to quit")?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => {}
            _ => return Ok(None),
        }
    }
}

/// Run line-mode games until the player stops
///
/// # Errors
/// Returns an error on I/O failure.
pub async fn run_simple<S, R, W>(
    game: &SimpleGame,
    source: &S,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics, CommandError>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    let mut stats = Statistics::new(game.config.max_attempts());

    writeln!(
        out,
        "{}",
        format!(
            "{}-TLE: guess the word in {} tries. Type :q to quit.",
            game.config.word_length(),
            game.config.max_attempts()
        )
        .bright_cyan()
        .bold()
    )?;

    loop {
        let Some(mut session) = start_session(game, source, input, out).await? else {
            break;
        };

        if play_session(&mut session, input, out)? == GameOutcome::Abandoned {
            break;
        }
        stats.record(&session);
        print_statistics(out, &stats)?;

        prompt(out, "Play again? (y/n)")?;
        match read_line(input)? {
            Some(answer) if matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") => {}
            _ => break,
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(stats)
}
