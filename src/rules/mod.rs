//! Game rules for Omok
//!
//! Plain five-in-a-row: no captures, no forbidden moves, overlines win.

pub mod win;

pub use win::{check_win, count_in_direction, find_winning_line, DIRECTIONS, WIN_LENGTH};
