//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardFeedback, LetterFeedback};
use crate::interactive::KEYBOARD_ROWS;
use crate::session::{GameSession, SessionState};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black().bold(),
        LetterFeedback::Empty => text.normal(),
    }
}

/// A whole guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(result: &GuessResult) -> String {
    result
        .iter()
        .map(|letter| tile(letter.character(), letter.feedback()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// QWERTY rows with each letter colored by what is known about it
#[must_use]
pub fn keyboard_rows(feedback: &KeyboardFeedback) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys = row
                .chars()
                .map(|c| tile(c, feedback.get(c)).to_string())
                .collect::<Vec<_>>()
                .join("");
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Spoiler-free summary of a finished game, e.g. `5-TLE 3/6` plus emoji rows
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let config = session.config();
    let score = match session.state() {
        SessionState::Won => session.history().len().to_string(),
        _ => "X".to_string(),
    };

    let mut out = format!(
        "{}-TLE {score}/{}\n",
        config.word_length(),
        config.max_attempts()
    );
    for result in session.history() {
        out.push('\n');
        out.push_str(&result.to_emoji());
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::evaluate;
    use crate::wordlists::AcceptAll;
    use std::sync::Arc;

    fn finished(secret: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), Arc::new(AcceptAll));
        session.set_secret_word(secret).unwrap();
        for guess in guesses {
            for c in guess.chars() {
                session.append_char(c);
            }
            session.submit_guess().unwrap();
        }
        session
    }

    #[test]
    fn tiles_show_uppercase_letters() {
        let result = evaluate("crane", "slate").unwrap();
        let row = guess_tiles(&result);
        for c in ['S', 'L', 'A', 'T', 'E'] {
            assert!(row.contains(c), "{row}");
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let rows = keyboard_rows(&KeyboardFeedback::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains('Q'));
        assert!(rows[2].starts_with("    "));
        assert!(rows[2].contains('M'));
    }

    #[test]
    fn share_grid_for_win() {
        let session = finished("crane", &["slate", "crane"]);
        assert_eq!(share_grid(&session), "5-TLE 2/6\n\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let session = finished("robot", &["llama"; 6]);
        let grid = share_grid(&session);
        assert!(grid.starts_with("5-TLE X/6\n"));
        assert_eq!(grid.lines().count(), 8);
    }

    #[test]
    fn progress_bar_scales() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
