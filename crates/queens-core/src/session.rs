//! Game session: the board plus queens-used and best-score tracking.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSize, Position};
use crate::domination;
use crate::error::Result;

/// What a single toggle did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleOutcome {
    /// True if a queen was placed, false if one was removed.
    pub placed: bool,
    /// True if the board is fully dominated after this toggle.
    pub solved: bool,
    /// Every square whose domination counter changed. The caller decides
    /// when and how to repaint; the engine performs no rendering.
    pub changed: Vec<Position>,
}

/// One sitting at one board size.
///
/// Owns the board and the running score. The best score survives
/// solved/unsolved excursions and resets only on [`GameSession::resize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    queens_placed: usize,
    /// Minimum queens-placed seen at any solved moment since the last
    /// resize; `None` until the board has been solved once.
    best_score: Option<usize>,
}

impl GameSession {
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            queens_placed: 0,
            best_score: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    pub fn queens_placed(&self) -> usize {
        self.queens_placed
    }

    pub fn best_score(&self) -> Option<usize> {
        self.best_score
    }

    pub fn has_solved_once(&self) -> bool {
        self.best_score.is_some()
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_fully_dominated()
    }

    /// Discard all cell state and scores and start over at `size`.
    ///
    /// Dimension validation lives in [`BoardSize`], so resize itself cannot
    /// fail; a caller holding invalid input never reaches this point and
    /// keeps its previous board untouched.
    pub fn resize(&mut self, size: BoardSize) {
        *self = Self::new(size);
    }

    /// Place or remove a queen at `pos` and re-evaluate the solved state.
    ///
    /// Toggling the same square twice restores every counter to its prior
    /// value. Out-of-bounds coordinates leave the session untouched.
    pub fn toggle(&mut self, pos: Position) -> Result<ToggleOutcome> {
        let placed = !self.board.cell(pos)?.has_queen();
        self.board.set_queen(pos, placed)?;
        if placed {
            self.queens_placed += 1;
        } else {
            self.queens_placed -= 1;
        }

        let delta = if placed { 1 } else { -1 };
        let changed = domination::sweep(&mut self.board, pos, delta);

        let solved = self.board.is_fully_dominated();
        if solved {
            self.best_score = Some(match self.best_score {
                Some(best) => best.min(self.queens_placed),
                None => self.queens_placed,
            });
        }

        Ok(ToggleOutcome {
            placed,
            solved,
            changed,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
