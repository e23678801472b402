//! Full-screen terminal game

mod app;
mod events;
mod input;
mod rendering;

pub use app::{App, FetchStatus, Message, MessageStyle, run_tui};
pub use events::{Action, map_event};
pub use input::{InputEvent, KEYBOARD_ROWS, key_at, keyboard_layout};
