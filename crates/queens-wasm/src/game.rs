//! Game state management for the WASM queens puzzle.

use queens_core::{BoardSize, GameSession, Position, Result, ToggleOutcome};
use serde::Serialize;

/// Session snapshot handed to the embedding page as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub width: usize,
    pub height: usize,
    pub queens_used: usize,
    pub best: Option<usize>,
    pub solved: bool,
}

/// The game state: one core session plus the status strings the page shows.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    session: GameSession,
}

impl GameState {
    /// Fresh 8×8 session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn cols(&self) -> usize {
        self.session.size().width()
    }

    pub fn rows(&self) -> usize {
        self.session.size().height()
    }

    pub fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    /// Toggle the queen on a board square.
    pub fn toggle(&mut self, pos: Position) -> Result<ToggleOutcome> {
        self.session.toggle(pos)
    }

    /// Parse user input like `"8x8"` and rebuild the board at that size.
    ///
    /// On any parse or range error the session is left untouched, so the
    /// board keeps its previous dimensions rather than falling back to a
    /// default.
    pub fn set_board_size(&mut self, input: &str) -> Result<BoardSize> {
        let size = BoardSize::parse(input)?;
        self.session.resize(size);
        Ok(size)
    }

    pub fn queens_used_text(&self) -> String {
        format!("Queens used: {}", self.session.queens_placed())
    }

    pub fn best_text(&self) -> String {
        match self.session.best_score() {
            Some(best) => format!("Best: {}", best),
            None => "Best: Not solved yet".to_string(),
        }
    }

    pub fn status(&self) -> Status {
        Status {
            width: self.cols(),
            height: self.rows(),
            queens_used: self.session.queens_placed(),
            best: self.session.best_score(),
            solved: self.is_solved(),
        }
    }
}
