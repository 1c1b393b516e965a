//! Omok (five-in-a-row) rules engine
//!
//! A pure, side-effect-free engine for the 15x15 five-in-a-row game:
//! - Black moves first, players alternate
//! - Five or more stones in a row (horizontal, vertical, diagonal) wins
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`game`]: Immutable game snapshots and move application
//! - [`ui`]: egui desktop board consuming the engine
//! - [`config`], [`logging`], [`error`]: application plumbing
//!
//! # Quick Start
//!
//! ```
//! use omok::{create_initial_state, GameOutcome, Pos, Stone};
//!
//! let mut state = create_initial_state();
//! for (black, white) in [(7, 0), (7, 1), (7, 2), (7, 3)].into_iter().zip(0..4) {
//!     state = state.play(Pos::new(black.0, black.1));
//!     state = state.play(Pos::new(0, white));
//! }
//! let state = state.play(Pos::new(7, 4));
//! assert_eq!(state.outcome(), GameOutcome::Win(Stone::Black));
//! ```
//!
//! Illegal moves passed to [`apply_move`] leave the state unchanged; use
//! [`GameState::try_play`] for an explicit [`MoveError`].

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use error::MoveError;
pub use game::{
    apply_move, create_initial_state, get_player_label, is_legal_move, GameOutcome, GameState,
};
pub use rules::{check_win, find_winning_line};
