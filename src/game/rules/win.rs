//! Win detection logic.

use super::super::types::{Board, Cell, Mark};

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills a row, column, or diagonal,
/// `None` otherwise. Mixed lines never count.
pub fn winner(board: &Board) -> Option<Mark> {
    // Row-major indices of the 8 winning lines.
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
        [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
        [0, 4, 8], [2, 4, 6],            // Diagonals
    ];

    let cells = board.cells();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return match cell {
                Cell::Taken(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}

/// True iff either mark has completed a line.
pub fn has_winner(board: &Board) -> bool {
    winner(board).is_some()
}
