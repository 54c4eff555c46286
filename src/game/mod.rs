mod ai;
mod rules;
mod types;

pub use ai::{Exhausted, FirstFreePicker, MovePicker, RandomPicker, choose_move};
pub use rules::{has_winner, is_full, winner};
pub use types::{Board, Cell, Coord, Mark, MoveError};
