//! Per-run game statistics

use super::{GameSession, SessionState};

/// Results of the games finished during this run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    /// Fold a finished session into the totals; unfinished sessions are ignored
    ///
    /// Returns whether the session was counted.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.state() {
            SessionState::Won => {
                let guesses = session.history().len();
                if self.guess_distribution.len() < guesses {
                    self.guess_distribution.resize(guesses, 0);
                }
                self.guess_distribution[guesses - 1] += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            SessionState::Lost => self.current_streak = 0,
            SessionState::AwaitingSecretWord | SessionState::InProgress => return false,
        }
        self.games_played += 1;
        true
    }

    /// Whole-number win percentage
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (self.games_won as f64 / self.games_played as f64 * 100.0).round() as u32
    }
}
