//! Board structure

use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};

/// Game board. `Copy`, so every snapshot owns its own cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position, `None` when the position is off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if !pos.is_on_board() {
            None
        } else if self.black.get(pos) {
            Some(Stone::Black)
        } else if self.white.get(pos) {
            Some(Stone::White)
        } else {
            Some(Stone::Empty)
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone in place.
    /// Off-board positions and `Stone::Empty` are ignored.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Copy of this board with one extra stone
    #[inline]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = *self;
        next.place_stone(pos, stone);
        next
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every stone sits on a cell and no cell holds both colors
    pub fn is_well_formed(&self) -> bool {
        self.black.is_within_board()
            && self.white.is_within_board()
            && self.black.union(&self.white).count() == self.stone_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Every occupied cell with its stone, in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.black
            .union(&self.white)
            .iter_ones()
            .map(move |pos| (pos, if self.black.get(pos) { Stone::Black } else { Stone::White }))
    }
}
