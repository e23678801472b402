//! Command implementations

pub mod check;
pub mod simple;

pub use check::run_check;
pub use simple::{GameOutcome, SimpleGame, play_session, run_simple};

use crate::core::{EvaluationError, WordError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
