//! Board state: validated dimensions, cells, and coordinate-bounded access.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

/// Smallest accepted board dimension.
pub const MIN_DIMENSION: usize = 3;
/// Largest accepted board dimension.
pub const MAX_DIMENSION: usize = 16;

/// A cell coordinate, column first, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Validated board dimensions.
///
/// Can only be built through [`BoardSize::new`] or [`BoardSize::parse`],
/// so a held value is always within `[MIN_DIMENSION, MAX_DIMENSION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    width: usize,
    height: usize,
}

impl BoardSize {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let in_range = |n: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&n);
        if in_range(width) && in_range(height) {
            Ok(Self { width, height })
        } else {
            Err(GameError::SizeOutOfRange { width, height })
        }
    }

    /// Parse user input of the form `<1-2 digits>x<1-2 digits>`, e.g. `"8x8"`.
    ///
    /// Surrounding whitespace is tolerated; whitespace inside the pattern
    /// is not, so `"8 x 8"` is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || GameError::MalformedSize {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let (w, h) = trimmed.split_once('x').ok_or_else(malformed)?;
        if !is_dimension_token(w) || !is_dimension_token(h) {
            return Err(malformed());
        }
        let width = w.parse::<usize>().map_err(|_| malformed())?;
        let height = h.parse::<usize>().map_err(|_| malformed())?;
        Self::new(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for BoardSize {
    /// The classic 8×8 chess board.
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One or two ASCII digits.
fn is_dimension_token(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// A single board square: occupancy plus its domination counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_queen: bool,
    dominated_by: u32,
}

impl Cell {
    pub fn has_queen(&self) -> bool {
        self.has_queen
    }

    /// Number of placed queens currently attacking this square. The
    /// occupying queen contributes exactly one to its own square.
    pub fn dominated_by(&self) -> u32 {
        self.dominated_by
    }

    pub fn is_dominated(&self) -> bool {
        self.dominated_by > 0
    }
}

/// A rectangular grid of cells, owned exclusively, indexed by coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Fresh board: no queens, all counters zero.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.cell_count()],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width()
    }

    pub fn height(&self) -> usize {
        self.size.height()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.width() && pos.row < self.height()
    }

    pub fn cell(&self, pos: Position) -> Result<&Cell> {
        let idx = self.index(pos)?;
        Ok(&self.cells[idx])
    }

    /// Every coordinate on the board, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| Position::new(col, row)))
    }

    /// Positions currently holding a queen.
    pub fn queens(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.has_queen)
            .map(move |(idx, _)| Position::new(idx % width, idx / width))
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_queen).count()
    }

    /// True iff every square is attacked by at least one queen.
    pub fn is_fully_dominated(&self) -> bool {
        self.cells.iter().all(Cell::is_dominated)
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.row * self.width() + pos.col)
        } else {
            Err(GameError::OutOfBounds {
                pos,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Unchecked access for the sweep loops, which stay in bounds by
    /// construction.
    pub(crate) fn at_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        let width = self.width();
        &mut self.cells[row * width + col]
    }

    pub(crate) fn set_queen(&mut self, pos: Position, present: bool) -> Result<()> {
        let idx = self.index(pos)?;
        self.cells[idx].has_queen = present;
        Ok(())
    }

    pub(crate) fn adjust_domination(&mut self, col: usize, row: usize, delta: i32) {
        let cell = self.at_mut(col, row);
        cell.dominated_by = cell.dominated_by.wrapping_add_signed(delta);
    }
}

impl fmt::Display for Board {
    /// ASCII board: `Q` queen, `*` dominated, `.` untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                let cell = &self.cells[row * self.width() + col];
                let ch = if cell.has_queen {
                    'Q'
                } else if cell.is_dominated() {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_accepts_boundaries() {
        assert!(BoardSize::new(3, 3).is_ok());
        assert!(BoardSize::new(16, 16).is_ok());
        assert!(BoardSize::new(3, 16).is_ok());
    }

    #[test]
    fn test_size_rejects_out_of_range() {
        assert!(matches!(
            BoardSize::new(2, 8),
            Err(GameError::SizeOutOfRange { width: 2, height: 8 })
        ));
        assert!(BoardSize::new(17, 5).is_err());
        assert!(BoardSize::new(0, 0).is_err());
    }

    #[test]
    fn test_parse_valid_input() {
        assert_eq!(BoardSize::parse("8x8").unwrap(), BoardSize::default());
        assert_eq!(BoardSize::parse("3x3").unwrap(), BoardSize::new(3, 3).unwrap());
        assert_eq!(
            BoardSize::parse("16x16").unwrap(),
            BoardSize::new(16, 16).unwrap()
        );
        // Surrounding whitespace is trimmed
        assert_eq!(BoardSize::parse("  10x12 ").unwrap().width(), 10);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["abc", "8 x 8", "8x", "x8", "8", "", "8x8x8", "08ax8"] {
            assert!(
                matches!(BoardSize::parse(input), Err(GameError::MalformedSize { .. })),
                "expected {:?} to be malformed",
                input
            );
        }
        // Three digits never match, even if the value would be in range
        assert!(BoardSize::parse("008x8").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert!(matches!(
            BoardSize::parse("2x8"),
            Err(GameError::SizeOutOfRange { .. })
        ));
        assert!(matches!(
            BoardSize::parse("17x5"),
            Err(GameError::SizeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_board_bounds() {
        let board = Board::new(BoardSize::new(4, 6).unwrap());
        assert!(board.cell(Position::new(3, 5)).is_ok());
        assert!(matches!(
            board.cell(Position::new(4, 0)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert!(board.cell(Position::new(0, 6)).is_err());
    }

    #[test]
    fn test_fresh_board_is_undominated() {
        let board = Board::new(BoardSize::new(3, 3).unwrap());
        assert!(!board.is_fully_dominated());
        assert_eq!(board.queen_count(), 0);
        assert_eq!(board.positions().count(), 9);
    }

    #[test]
    fn test_size_serialization() {
        let size = BoardSize::new(5, 12).unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, r#"{"width":5,"height":12}"#);
        let back: BoardSize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);
    }
}
