//! Display functions for line-mode play and one-off checks

use super::formatters::{create_progress_bar, guess_tiles, keyboard_rows, share_grid};
use crate::core::{GuessResult, LetterFeedback};
use crate::session::{GameSession, SessionState, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board so far followed by the keyboard
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    for result in session.history() {
        writeln!(out, "  {}", guess_tiles(result))?;
    }
    writeln!(out)?;
    let keyboard = session.keyboard_feedback();
    for row in keyboard_rows(&keyboard) {
        writeln!(out, "  {row}")?;
    }

    let absent = keyboard.letters_with(LetterFeedback::Absent);
    if !absent.is_empty() {
        let letters: String = absent.iter().map(char::to_ascii_uppercase).collect();
        writeln!(out, "  Not in word: {}", letters.bright_black())?;
    }
    writeln!(out)
}

/// Print the verdict of a finished game and its share grid
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let secret = session
        .secret_word()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    match session.state() {
        SessionState::Won => {
            let guesses = session.history().len();
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{}",
                format!("✅ Solved in {guesses} {noun}!").green().bold()
            )?;
        }
        SessionState::Lost => {
            writeln!(
                out,
                "{}",
                format!("❌ Out of guesses. The word was {secret}.")
                    .red()
                    .bold()
            )?;
        }
        SessionState::AwaitingSecretWord | SessionState::InProgress => return Ok(()),
    }
    writeln!(out)?;
    writeln!(out, "{}", share_grid(session))
}

/// Print totals and the guess distribution
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Played: {}  Win %: {}  Streak: {}  Max: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        writeln!(
            out,
            "  {}: {} {count}",
            i + 1,
            create_progress_bar(count, most, 20).green()
        )?;
    }
    Ok(())
}

/// Print a single evaluation, as tiles and as emoji
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_check_result<W: Write>(out: &mut W, result: &GuessResult) -> io::Result<()> {
    writeln!(out, "{}", guess_tiles(result))?;
    writeln!(out, "{}", result.to_emoji())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::evaluate;
    use crate::wordlists::AcceptAll;
    use std::sync::Arc;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn check_prints_emoji_line() {
        let result = evaluate("apple", "peach").unwrap();
        let text = render(|out| print_check_result(out, &result));
        assert!(text.ends_with("🟨🟨🟨⬛⬛\n"));
    }

    #[test]
    fn board_lists_absent_letters() {
        let mut session = GameSession::new(GameConfig::default(), Arc::new(AcceptAll));
        session.set_secret_word("apple").unwrap();
        for c in "peach".chars() {
            session.append_char(c);
        }
        session.submit_guess().unwrap();

        let text = render(|out| print_board(out, &session));
        assert!(text.contains("Not in word: "));
        assert!(text.contains("CH"));
    }

    #[test]
    fn game_over_only_for_finished_games() {
        let mut session = GameSession::new(GameConfig::default(), Arc::new(AcceptAll));
        session.set_secret_word("crane").unwrap();
        assert!(render(|out| print_game_over(out, &session)).is_empty());

        for c in "crane".chars() {
            session.append_char(c);
        }
        session.submit_guess().unwrap();

        let text = render(|out| print_game_over(out, &session));
        assert!(text.contains("Solved in 1 guess!"));
        assert!(text.contains("5-TLE 1/6"));
    }

    #[test]
    fn statistics_list_every_attempt_count() {
        let mut stats = Statistics::new(6);
        stats.games_played = 1;
        stats.games_won = 1;
        stats.guess_distribution[2] = 1;

        let text = render(|out| print_statistics(out, &stats));
        assert!(text.contains("Played: 1"));
        assert!(text.contains("  3: "));
        assert!(text.contains("  6: "));
    }
}
