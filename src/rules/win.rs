//! Win condition checking
//!
//! A player wins by forming five or more of their stones in an unbroken
//! line: horizontal, vertical or either diagonal. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: u32 = 5;

/// Direction vectors for line checking, in evaluation order
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal "\"
    (1, -1), // Diagonal "/"
];

/// Count consecutive `color` stones starting one step away from `pos`
/// along `(dr, dc)`. Stops at the first other cell or the board edge.
#[inline]
pub fn count_in_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> u32 {
    let mut count = 0;
    let mut next = pos.offset(dr, dc, 1);
    while board.get(next) == Some(color) {
        count += 1;
        next = next.offset(dr, dc, 1);
    }
    count
}

/// Five-in-a-row check rooted at the stone just placed at `pos`.
///
/// The stone at `pos` is counted as the player's own regardless of the
/// board contents. Returns on the first axis reaching [`WIN_LENGTH`].
/// Off-board positions never win.
#[inline]
pub fn check_win(board: &Board, pos: Pos, player: Stone) -> bool {
    if !pos.is_on_board() {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let positive = count_in_direction(board, pos, dr, dc, player);
        let negative = count_in_direction(board, pos, -dr, -dc, player);
        1 + positive + negative >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered from the negative end
/// to the positive end of the first qualifying axis.
pub fn find_winning_line(board: &Board, pos: Pos, player: Stone) -> Option<Vec<Pos>> {
    if !pos.is_on_board() {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let positive = count_in_direction(board, pos, dr, dc, player) as i32;
        let negative = count_in_direction(board, pos, -dr, -dc, player) as i32;

        if (1 + positive + negative) as u32 >= WIN_LENGTH {
            let line = (-negative..=positive).map(|i| pos.offset(dr, dc, i)).collect();
            return Some(line);
        }
    }
    None
}
