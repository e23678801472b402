//! ntle
//!
//! A word-guessing puzzle for the terminal: find the secret word in a limited
//! number of guesses, with per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use ntle::config::GameConfig;
//! use ntle::session::{GameSession, SessionState};
//! use ntle::wordlists::WordList;
//! use std::sync::Arc;
//!
//! let mut session = GameSession::new(GameConfig::default(), Arc::new(WordList::embedded()));
//! session.set_secret_word("crane").unwrap();
//!
//! for c in "crane".chars() {
//!     session.append_char(c);
//! }
//! let result = session.submit_guess().unwrap();
//! assert_eq!(result.to_emoji(), "🟩🟩🟩🟩🟩");
//! assert_eq!(session.state(), SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Game and fetch settings
pub mod config;

// Game state machine
pub mod session;

// Word lists
pub mod wordlists;

// Secret word providers
pub mod word_source;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
