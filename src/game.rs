//! Omok game engine
//!
//! Immutable game snapshots and the transitions between them. Every
//! accepted move produces a brand-new [`GameState`]; nothing is mutated in
//! place, so past snapshots stay valid for as long as a caller keeps them.
//!
//! # Example
//!
//! ```
//! use omok::{apply_move, create_initial_state, Pos, Stone};
//!
//! let state = create_initial_state();
//! let state = apply_move(&state, Pos::new(7, 7));
//! assert_eq!(state.current_player(), Stone::White);
//! assert_eq!(state.move_count(), 1);
//!
//! // Illegal moves are a no-op
//! let same = apply_move(&state, Pos::new(7, 7));
//! assert_eq!(same, state);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::error::{MoveError, SnapshotError};
use crate::rules::{check_win, find_winning_line};

/// Result of a game as seen from one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Stone),
    Draw,
}

/// Immutable game snapshot.
///
/// Deserialization rejects snapshots that break the game invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    current_player: Stone,
    winner: Option<Stone>,
    is_over: bool,
    last_move: Option<Pos>,
    move_count: u32,
}

/// Wire form of [`GameState`], checked before use
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Stone,
    winner: Option<Stone>,
    is_over: bool,
    last_move: Option<Pos>,
    move_count: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SnapshotError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            current_player: raw.current_player,
            winner: raw.winner,
            is_over: raw.is_over,
            last_move: raw.last_move,
            move_count: raw.move_count,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            winner: None,
            is_over: false,
            last_move: None,
            move_count: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn is next. Never `Stone::Empty`.
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn outcome(&self) -> GameOutcome {
        match (self.is_over, self.winner) {
            (false, _) => GameOutcome::InProgress,
            (true, Some(winner)) => GameOutcome::Win(winner),
            (true, None) => GameOutcome::Draw,
        }
    }

    /// The run of stones that won the game, if any
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner?;
        let pos = self.last_move?;
        find_winning_line(&self.board, pos, winner)
    }

    /// Verify the snapshot could have been reached by legal play from the
    /// initial state, as far as a single snapshot can tell.
    pub fn check_invariants(&self) -> Result<(), SnapshotError> {
        if !self.board.is_well_formed() {
            return Err(SnapshotError::MalformedBoard);
        }
        if self.current_player == Stone::Empty {
            return Err(SnapshotError::NoCurrentPlayer);
        }

        let stones = self.board.stone_count();
        if self.move_count != stones {
            return Err(SnapshotError::MoveCountMismatch {
                move_count: self.move_count,
                stones,
            });
        }

        let to_move = if self.move_count % 2 == 0 { Stone::Black } else { Stone::White };
        if self.current_player != to_move {
            return Err(SnapshotError::WrongTurn {
                player: self.current_player,
                move_count: self.move_count,
            });
        }

        let previous = self.current_player.opponent();
        let won = match self.last_move {
            None if self.move_count == 0 => false,
            Some(pos) if self.board.get(pos) == Some(previous) => {
                check_win(&self.board, pos, previous)
            }
            _ => return Err(SnapshotError::BadLastMove),
        };

        let consistent = match (self.winner, self.is_over) {
            (Some(winner), true) => won && winner == previous,
            (None, true) => !won && self.board.is_full(),
            (None, false) => !won && !self.board.is_full(),
            (Some(_), false) => false,
        };
        if !consistent {
            return Err(SnapshotError::InconsistentResult);
        }

        Ok(())
    }

    /// Reason `pos` cannot be played, checked in order: game over, off the
    /// board, occupied.
    pub fn validate_move(&self, pos: Pos) -> Result<(), MoveError> {
        if self.is_over {
            return Err(MoveError::GameOver);
        }
        match self.board.get(pos) {
            None => Err(MoveError::OutOfBounds { row: pos.row, col: pos.col }),
            Some(Stone::Empty) => Ok(()),
            Some(_) => Err(MoveError::Occupied { row: pos.row, col: pos.col }),
        }
    }

    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.validate_move(pos).is_ok()
    }

    /// Play `pos` for the current player, or report why it was rejected.
    pub fn try_play(&self, pos: Pos) -> Result<GameState, MoveError> {
        if let Err(err) = self.validate_move(pos) {
            trace!(row = pos.row, col = pos.col, %err, "move rejected");
            return Err(err);
        }

        let mover = self.current_player;
        let board = self.board.with_stone(pos, mover);
        let move_count = self.move_count + 1;

        let won = check_win(&board, pos, mover);
        let draw = !won && move_count as usize == TOTAL_CELLS;

        debug!(row = pos.row, col = pos.col, player = %mover, move_count, "stone placed");
        if won {
            info!(winner = %mover, move_count, "game won");
        } else if draw {
            info!(move_count, "game drawn");
        }

        Ok(GameState {
            board,
            current_player: mover.opponent(),
            winner: won.then_some(mover),
            is_over: won || draw,
            last_move: Some(pos),
            move_count,
        })
    }

    /// Play `pos`; an illegal move returns an identical copy of `self`.
    pub fn play(&self, pos: Pos) -> GameState {
        self.try_play(pos).unwrap_or_else(|_| self.clone())
    }
}

/// Starting snapshot: empty board, Black to move.
pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// True iff the game is running, `pos` is on the board and its cell is empty.
pub fn is_legal_move(state: &GameState, pos: Pos) -> bool {
    state.is_legal(pos)
}

/// Apply one move. Illegal input returns `state` unchanged; use
/// [`GameState::try_play`] to learn why.
pub fn apply_move(state: &GameState, pos: Pos) -> GameState {
    state.play(pos)
}

/// Display name for a player
pub fn get_player_label(player: Stone) -> &'static str {
    player.label()
}
