//! Word lists and dictionaries
//!
//! Embedded word lists compiled into the binary, file loading, and the
//! [`Dictionary`] seam used to gate guess submission.

pub mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{AcceptAll, Dictionary, WordList};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
