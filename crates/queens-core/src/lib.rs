//! Core engine for the queens domination puzzle
//!
//! The puzzle: dominate every square of an N×M chess board with as few
//! queens as possible. A square is dominated when at least one placed
//! queen attacks it through its row, column, or either diagonal; a
//! queen's own square counts as dominated too.
//!
//! The engine is headless. It owns the board, the per-square domination
//! counters, and the session score tracking, and reports which squares a
//! toggle touched so a front end can decide when to repaint.

mod board;
mod domination;
mod error;
mod session;

pub use board::{Board, BoardSize, Cell, Position, MAX_DIMENSION, MIN_DIMENSION};
pub use error::{GameError, Result};
pub use session::{GameSession, ToggleOutcome};
