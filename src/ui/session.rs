//! Session wrapper around the engine for the GUI
//!
//! Holds the current snapshot and the UI-only bits around it (status
//! message, turn timer). All rule decisions are delegated to [`GameState`].

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{GameState, MoveError, Pos};

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// One game as seen by the window
pub struct Session {
    state: GameState,
    winning_line: Option<Vec<Pos>>,
    pub message: Option<String>,
    pub move_timer: MoveTimer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: crate::create_initial_state(),
            winning_line: None,
            message: None,
            move_timer: MoveTimer::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Discard the current game and start from the initial state
    pub fn reset(&mut self) {
        info!(previous_moves = self.state.move_count(), "new game");
        *self = Self::new();
    }

    /// Attempt to place the current player's stone at `pos`
    pub fn click(&mut self, pos: Pos) -> Result<(), MoveError> {
        match self.state.try_play(pos) {
            Ok(next) => {
                self.state = next;
                self.message = None;
                self.move_timer.stop();
                if self.state.is_over() {
                    self.winning_line = self.state.winning_line();
                } else {
                    self.move_timer.start();
                }
                Ok(())
            }
            Err(err) => {
                debug!(row = pos.row, col = pos.col, %err, "click ignored");
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOutcome, Stone};

    #[test]
    fn test_click_advances_state() {
        let mut session = Session::new();
        assert!(session.click(Pos::new(7, 7)).is_ok());
        assert_eq!(session.state().move_count(), 1);
        assert_eq!(session.state().current_player(), Stone::White);
        assert!(session.message.is_none());
        assert!(session.move_timer.last_move_duration.is_some());
    }

    #[test]
    fn test_illegal_click_sets_message() {
        let mut session = Session::new();
        session.click(Pos::new(7, 7)).unwrap();
        let err = session.click(Pos::new(7, 7)).unwrap_err();
        assert_eq!(err, MoveError::Occupied { row: 7, col: 7 });
        assert_eq!(session.message.as_deref(), Some("Position (7, 7) is already occupied"));
        assert_eq!(session.state().move_count(), 1);

        // A later good click clears it
        session.click(Pos::new(0, 0)).unwrap();
        assert!(session.message.is_none());
    }

    #[test]
    fn test_win_records_line_and_reset_clears() {
        let mut session = Session::new();
        for (r, c) in [(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)] {
            session.click(Pos::new(r, c)).unwrap();
        }
        assert_eq!(session.state().outcome(), GameOutcome::Win(Stone::Black));
        assert_eq!(session.winning_line().map(|l| l.len()), Some(5));
        assert_eq!(session.click(Pos::new(9, 9)), Err(MoveError::GameOver));

        session.reset();
        assert_eq!(session.state(), &crate::create_initial_state());
        assert!(session.winning_line().is_none());
        assert!(session.message.is_none());
    }

    #[test]
    fn test_timer_stop_records_duration() {
        let mut timer = MoveTimer::default();
        let d = timer.stop();
        assert_eq!(timer.last_move_duration, Some(d));
        assert_eq!(timer.elapsed(), Duration::ZERO);
        timer.start();
        assert!(timer.start_time.is_some());
    }
}
