//! Outbound renderings for the chat front-end.
//!
//! The core hands the front-end a [`GridView`]: a 3x3 grid of button
//! descriptions, each carrying a display label and the two-digit
//! callback payload the front-end echoes back on a press.

use crate::game::{Board, Cell, Coord};
use derive_getters::Getters;
use serde::Serialize;

/// Label shown on a free cell's button.
pub const FREE_LABEL: &str = "·";

/// One tappable cell control.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct CellButton {
    /// Display label: the mark glyph, or [`FREE_LABEL`] when empty.
    label: String,
    /// Callback payload for a press, e.g. `"12"` for row 1, column 2.
    callback: String,
}

/// Full 3x3 grid of controls, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GridView {
    /// Button rows, top to bottom.
    rows: Vec<Vec<CellButton>>,
}

impl GridView {
    /// Renders the board into a grid of controls.
    pub fn new(board: &Board) -> Self {
        let rows = (0..3)
            .map(|row| {
                (0..3)
                    .filter_map(|col| Coord::new(row, col))
                    .map(|coord| {
                        let label = match board.get(coord) {
                            Cell::Empty => FREE_LABEL.to_string(),
                            Cell::Taken(mark) => mark.glyph().to_string(),
                        };
                        CellButton {
                            label,
                            callback: coord.callback_data(),
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Formats the grid as a human-readable string, for terminal
    /// front-ends and logs.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                result.push_str("\n-+-+-\n");
            }
            let line: Vec<&str> = row.iter().map(|b| b.label.as_str()).collect();
            result.push_str(&line.join("|"));
        }
        result
    }
}
