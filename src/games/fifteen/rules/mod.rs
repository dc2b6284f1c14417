//! Game rules for numeric tic-tac-toe.
//!
//! Pure functions over the grid. Rules are separated from grid storage
//! so contracts and the turn controller can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, TARGET_SUM, has_win, winning_line};
