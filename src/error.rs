//! Error types.

use thiserror::Error;

use crate::board::Stone;
use crate::config::ConfigError;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner or the board is full
    #[error("Game is over")]
    GameOver,

    /// Position lies outside the board
    #[error("Position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Cell already holds a stone
    #[error("Position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
}

/// A deserialized snapshot that no sequence of moves could have produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Board has overlapping or off-board stones")]
    MalformedBoard,

    #[error("Current player must be Black or White")]
    NoCurrentPlayer,

    #[error("Move count {move_count} does not match {stones} stones on the board")]
    MoveCountMismatch { move_count: u32, stones: u32 },

    #[error("{player} cannot be to move after {move_count} moves")]
    WrongTurn { player: Stone, move_count: u32 },

    #[error("Last move does not hold the previous player's stone")]
    BadLastMove,

    #[error("Winner and game-over flags disagree with the board")]
    InconsistentResult,
}

/// Errors surfaced by the desktop binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::GameOver.to_string(), "Game is over");
        assert_eq!(
            MoveError::OutOfBounds { row: -1, col: 3 }.to_string(),
            "Position (-1, 3) is off the board"
        );
        assert_eq!(
            MoveError::Occupied { row: 7, col: 7 }.to_string(),
            "Position (7, 7) is already occupied"
        );
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::WrongTurn {
            player: Stone::White,
            move_count: 4,
        };
        assert_eq!(err.to_string(), "White cannot be to move after 4 moves");
        assert_eq!(
            SnapshotError::MoveCountMismatch { move_count: 1, stones: 0 }.to_string(),
            "Move count 1 does not match 0 stones on the board"
        );
    }

    #[test]
    fn test_app_error_from_config() {
        let err: AppError = ConfigError::Invalid {
            var: "OMOK_LOG".to_string(),
            reason: "Must not be empty".to_string(),
        }
        .into();
        assert!(err.to_string().contains("OMOK_LOG"));
    }
}
