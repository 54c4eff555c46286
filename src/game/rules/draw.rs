//! Draw detection logic.

use super::super::types::{Board, Cell};

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a tie. Equivalent to
/// `board.legal_moves().is_empty()`.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
