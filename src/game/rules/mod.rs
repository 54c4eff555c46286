//! Win and draw detection for the 3x3 board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{has_winner, winner};
