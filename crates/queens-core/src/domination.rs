//! Incremental maintenance of the per-square domination counters.
//!
//! Placing or removing a queen touches its row, its column, and the four
//! diagonal rays out to the board edge: O(width + height) work instead of
//! rescanning the whole grid.

use crate::board::{Board, Position};

/// Extra sweep contributions the queen's own square receives: the row, the
/// column, and all four diagonal rays pass through it, six hits where
/// exactly one should remain.
pub(crate) const OWN_SQUARE_OVERCOUNT: i32 = 5;

/// The four diagonal directions as (col, row) steps.
const DIAGONALS: [(isize, isize); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// Adjust every counter a queen at `pos` reaches, `delta` being +1 on
/// placement and -1 on removal. Returns the affected positions with the
/// queen's own square listed once, so a place-then-remove pair restores
/// every counter exactly.
pub(crate) fn sweep(board: &mut Board, pos: Position, delta: i32) -> Vec<Position> {
    let width = board.width();
    let height = board.height();
    let mut changed = Vec::with_capacity(3 * (width + height));

    // Row
    for col in 0..width {
        board.adjust_domination(col, pos.row, delta);
        changed.push(Position::new(col, pos.row));
    }

    // Column; the shared square is already listed by the row sweep
    for row in 0..height {
        board.adjust_domination(pos.col, row, delta);
        if row != pos.row {
            changed.push(Position::new(pos.col, row));
        }
    }

    // Diagonal rays, each starting on the queen's own square
    for (dc, dr) in DIAGONALS {
        let mut col = pos.col as isize;
        let mut row = pos.row as isize;
        while col >= 0 && row >= 0 && (col as usize) < width && (row as usize) < height {
            board.adjust_domination(col as usize, row as usize, delta);
            if (col as usize, row as usize) != (pos.col, pos.row) {
                changed.push(Position::new(col as usize, row as usize));
            }
            col += dc;
            row += dr;
        }
    }

    // The six sweeps above all crossed the queen's square; leave it with a
    // single net contribution from this queen.
    board.adjust_domination(pos.col, pos.row, -OWN_SQUARE_OVERCOUNT * delta);

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn dominated_by(board: &Board, col: usize, row: usize) -> u32 {
        board.cell(Position::new(col, row)).unwrap().dominated_by()
    }

    #[test]
    fn test_lone_queen_counts() {
        let mut board = Board::new(BoardSize::new(5, 6).unwrap());
        let queen = Position::new(2, 3);
        sweep(&mut board, queen, 1);

        for pos in board.positions().collect::<Vec<_>>() {
            let on_line = pos.row == queen.row
                || pos.col == queen.col
                || pos.col as isize - queen.col as isize
                    == pos.row as isize - queen.row as isize
                || pos.col as isize - queen.col as isize
                    == queen.row as isize - pos.row as isize;
            let expected = u32::from(on_line);
            assert_eq!(
                dominated_by(&board, pos.col, pos.row),
                expected,
                "wrong counter at {}",
                pos
            );
        }
    }

    #[test]
    fn test_corner_queen_rays_stop_at_edges() {
        let mut board = Board::new(BoardSize::new(4, 4).unwrap());
        sweep(&mut board, Position::new(0, 0), 1);

        assert_eq!(dominated_by(&board, 0, 0), 1);
        assert_eq!(dominated_by(&board, 3, 3), 1); // main diagonal
        assert_eq!(dominated_by(&board, 3, 0), 1); // row
        assert_eq!(dominated_by(&board, 0, 3), 1); // column
        assert_eq!(dominated_by(&board, 2, 1), 0); // off every line
    }

    #[test]
    fn test_overlapping_queens_accumulate() {
        let mut board = Board::new(BoardSize::new(3, 3).unwrap());
        sweep(&mut board, Position::new(0, 0), 1);
        sweep(&mut board, Position::new(2, 2), 1);

        // The queens sit on a shared diagonal and attack each other
        assert_eq!(dominated_by(&board, 0, 0), 2);
        assert_eq!(dominated_by(&board, 2, 2), 2);
        assert_eq!(dominated_by(&board, 1, 1), 2);
    }

    #[test]
    fn test_sweep_reports_own_square_once() {
        let mut board = Board::new(BoardSize::new(8, 8).unwrap());
        let queen = Position::new(4, 2);
        let mut changed = sweep(&mut board, queen, 1);

        let listed = changed.iter().filter(|&&p| p == queen).count();
        assert_eq!(listed, 1);

        changed.sort();
        let before = changed.len();
        changed.dedup();
        assert_eq!(changed.len(), before, "duplicate dirty positions");
    }

    #[test]
    fn test_place_then_remove_restores_counters() {
        let fresh = Board::new(BoardSize::new(7, 5).unwrap());
        let mut board = fresh.clone();

        let queens = [
            Position::new(0, 0),
            Position::new(3, 2),
            Position::new(6, 4),
            Position::new(3, 4),
        ];
        for &q in &queens {
            sweep(&mut board, q, 1);
        }
        // Remove in a different order
        for &q in &[queens[2], queens[0], queens[3], queens[1]] {
            sweep(&mut board, q, -1);
        }

        assert_eq!(board, fresh);
    }
}
