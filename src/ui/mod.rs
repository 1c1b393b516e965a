//! GUI module for the Omok game
//!
//! A native board built on egui/eframe. It only consumes the engine:
//! clicks become [`Pos`](crate::Pos) values and every frame renders the
//! current snapshot.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::OmokApp;
pub use session::{MoveTimer, Session};
