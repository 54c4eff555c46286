//! Opponent move selection.

use super::types::{Board, Coord};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Signalled when no empty cell remains.
///
/// This is an expected branch, not a fault: crosses move first on an
/// odd-sized board, so exhaustion is exactly the caller's cue to
/// declare a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no free cell left on the board")]
pub struct Exhausted;

/// Strategy seam for the bot's move choice.
///
/// The production picker is uniform-random; tests substitute a
/// deterministic one without touching the session logic.
pub trait MovePicker: Send + std::fmt::Debug {
    /// Picks one coordinate from the legal moves, or `None` if the
    /// picker has nothing to offer for this list.
    fn pick(&mut self, legal: &[Coord]) -> Option<Coord>;
}

/// Chooses the bot's next move on `board`.
///
/// # Errors
///
/// Returns [`Exhausted`] when the board has no empty cell.
pub fn choose_move(board: &Board, picker: &mut dyn MovePicker) -> Result<Coord, Exhausted> {
    let legal = board.legal_moves();
    let coord = picker.pick(&legal).ok_or(Exhausted)?;
    debug!(%coord, remaining = legal.len(), "Bot move chosen");
    Ok(coord)
}

/// Uniform-random picker backed by [`rand`].
///
/// Not cryptographically strong and not meant to be; seed it for
/// reproducible games.
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Creates a picker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a picker with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for RandomPicker {
    fn pick(&mut self, legal: &[Coord]) -> Option<Coord> {
        legal.choose(&mut self.rng).copied()
    }
}

/// Deterministic picker that always takes the first legal move
/// (row-major). Useful for reproducible demos and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFreePicker;

impl MovePicker for FirstFreePicker {
    fn pick(&mut self, legal: &[Coord]) -> Option<Coord> {
        legal.first().copied()
    }
}
