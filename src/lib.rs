//! Tic-tac-toe core for a chat-bot front-end.
//!
//! The human places crosses, a uniform-random strategy places zeros,
//! and a two-state conversation flow tracks each chat session until a
//! win or tie. The chat transport itself (message delivery, button
//! events, credentials) is an external collaborator: it feeds events
//! into a [`SessionManager`] and renders the [`GridView`] and status
//! string returned in each [`TurnReport`].
//!
//! # Example
//!
//! ```
//! use ticbot::{Coord, Phase, SessionManager};
//!
//! let manager = SessionManager::new();
//! let report = manager.start_game("chat-42");
//! assert_eq!(*report.phase(), Phase::InProgress);
//!
//! // A button press arrives as a two-digit payload.
//! let coord = Coord::from_callback("11").unwrap();
//! let report = manager.submit_human_move("chat-42", coord).unwrap();
//! println!("{}\n{}", report.grid().display(), report.outcome());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod render;
mod session;

// Crate-level exports - configuration
pub use config::{BotConfig, ConfigError};

// Crate-level exports - board and rules
pub use game::{
    Board, Cell, Coord, Exhausted, FirstFreePicker, Mark, MoveError, MovePicker, RandomPicker,
    choose_move, has_winner, is_full, winner,
};

// Crate-level exports - rendering
pub use render::{CellButton, FREE_LABEL, GridView};

// Crate-level exports - session management
pub use session::{
    GameSession, Phase, SessionError, SessionId, SessionManager, TurnOutcome, TurnReport,
};
