//! Terminal output formatting
//!
//! Colored tiles, keyboards and share grids for line mode and `check`.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_game_over, print_statistics};
