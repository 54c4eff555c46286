//! Core domain types for the tic-tac-toe board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human's mark (moves first).
    Cross,
    /// The bot's mark.
    Zero,
}

impl Mark {
    /// Returns the display glyph for this mark.
    pub fn glyph(self) -> &'static str {
        match self {
            Mark::Cross => "X",
            Mark::Zero => "O",
        }
    }
}

/// One slot of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Slot holds a mark.
    Taken(Mark),
}

/// A validated board coordinate: row and column each in 0..3.
///
/// Out-of-range coordinates are unrepresentable; [`Coord::new`] is the
/// only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if either component is out of range.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Parses the two-digit wire encoding used by front-end buttons,
    /// e.g. `"12"` = row 1, column 2.
    pub fn from_callback(data: &str) -> Option<Self> {
        let mut chars = data.chars();
        let row = chars.next()?.to_digit(10)?;
        let col = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Two-digit wire encoding of this coordinate.
    pub fn callback_data(self) -> String {
        format!("{}{}", self.row, self.col)
    }

    /// Row-major index into the flat cell array.
    pub(crate) fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised when applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Target cell already holds a mark.
    #[display("cell {_0} is already taken")]
    Occupied(#[error(not(source))] Coord),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new all-empty board. Each call yields an independent value.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Places `mark` at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] and leaves the board untouched if
    /// the cell already holds a mark.
    pub fn apply(&mut self, coord: Coord, mark: Mark) -> Result<(), MoveError> {
        if self.cells[coord.index()] != Cell::Empty {
            return Err(MoveError::Occupied(coord));
        }
        self.cells[coord.index()] = Cell::Taken(mark);
        Ok(())
    }

    /// Returns all empty coordinates in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if let Some(coord) = Coord::new(row, col) {
                    if self.get(coord) == Cell::Empty {
                        moves.push(coord);
                    }
                }
            }
        }
        moves
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
