//! Conversation flow and per-chat game sessions.
//!
//! Each chat session owns one board and one phase. The controller
//! processes a human move end to end (place cross, check win, place
//! zero, check win or tie) before returning, so the front-end only
//! ever observes complete turns.

use crate::game::{Board, Coord, Mark, MoveError, MovePicker, RandomPicker, choose_move, has_winner};
use crate::render::GridView;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Opaque per-conversation key supplied by the chat front-end.
pub type SessionId = String;

/// Coarse conversation state of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Game is ongoing; human moves are accepted.
    InProgress,
    /// Game reached a win or tie; only a fresh start or an
    /// acknowledgement is meaningful.
    Finished,
}

/// One chat session's game: a board plus its phase.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// Session key.
    id: SessionId,
    /// The session's private board.
    board: Board,
    /// Conversation state.
    phase: Phase,
}

impl GameSession {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            board: Board::new(),
            phase: Phase::InProgress,
        }
    }
}

/// Outcome surfaced to the front-end after a transition.
///
/// `Display` yields the exact status strings the front-end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum TurnOutcome {
    /// Game continues; the human is prompted to move.
    #[display("X (your) turn! Please, put X to the free place")]
    YourTurn,
    /// The human completed a line.
    #[display("You win!")]
    HumanWins,
    /// The bot completed a line.
    #[display("Bot win!")]
    BotWins,
    /// The board filled with no line.
    #[display("Tie")]
    Tie,
}

/// Everything the front-end needs to render after a transition.
#[derive(Debug, Clone, Getters)]
pub struct TurnReport {
    /// Status to show next to the grid.
    outcome: TurnOutcome,
    /// The full grid of cell controls.
    grid: GridView,
    /// Session phase after the transition.
    phase: Phase,
}

/// Events rejected back to the front-end without mutating any state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No game exists for this key; a start command is needed first.
    #[display("no game in progress for session {_0}")]
    UnknownSession(#[error(not(source))] SessionId),
    /// The game already finished; waiting for an acknowledgement or a
    /// fresh start.
    #[display("game in session {_0} is already over")]
    GameOver(#[error(not(source))] SessionId),
    /// The game has not finished yet, so there is nothing to
    /// acknowledge.
    #[display("game in session {_0} is still in progress")]
    NotFinished(#[error(not(source))] SessionId),
    /// The move targets an occupied cell.
    #[display("illegal move: {_0}")]
    IllegalMove(#[error(source)] MoveError),
}

/// Manages all game sessions, keyed by the front-end's opaque ids.
///
/// Clones share the same session store, so a transport may hand copies
/// to its handlers. Per-session event serialization is the front-end's
/// contract; the store itself is safe to share.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
    picker: Arc<Mutex<Box<dyn MovePicker>>>,
}

impl SessionManager {
    /// Creates a session manager with the uniform-random bot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker::new()))
    }

    /// Creates a session manager with a custom move picker.
    pub fn with_picker(picker: Box<dyn MovePicker>) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            picker: Arc::new(Mutex::new(picker)),
        }
    }

    /// Starts (or restarts) the game for `id`.
    ///
    /// Always legal: any previous board for this session is discarded
    /// and replaced with a fresh all-empty one in [`Phase::InProgress`].
    #[instrument(skip(self, id))]
    pub fn start_game(&self, id: impl Into<SessionId>) -> TurnReport {
        let id = id.into();
        let mut sessions = self.sessions.lock().unwrap();
        let session = GameSession::new(id.clone());
        let report = TurnReport {
            outcome: TurnOutcome::YourTurn,
            grid: GridView::new(&session.board),
            phase: session.phase,
        };
        sessions.insert(id.clone(), session);
        info!(session_id = %id, "Game started");
        report
    }

    /// Processes one human move end to end.
    ///
    /// Places a cross at `coord`, then, if the game continues, places
    /// the bot's zero, and reports the resulting phase and outcome.
    ///
    /// # Errors
    ///
    /// Rejects, without touching any state, moves for unknown sessions,
    /// moves after the game finished, and moves onto occupied cells.
    #[instrument(skip(self), fields(session_id = id))]
    pub fn submit_human_move(&self, id: &str, coord: Coord) -> Result<TurnReport, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))?;

        if session.phase == Phase::Finished {
            warn!(session_id = id, "Move submitted after game over");
            return Err(SessionError::GameOver(id.to_string()));
        }

        session.board.apply(coord, Mark::Cross).map_err(|e| {
            warn!(session_id = id, %coord, error = %e, "Rejected human move");
            SessionError::IllegalMove(e)
        })?;
        debug!(session_id = id, %coord, "Human move applied");

        if has_winner(&session.board) {
            return Ok(Self::finish(session, TurnOutcome::HumanWins));
        }

        let mut picker = self.picker.lock().unwrap();
        let bot_coord = match choose_move(&session.board, picker.as_mut()) {
            Ok(coord) => coord,
            Err(_) => {
                // Crosses fill the ninth cell, so exhaustion here is
                // exactly the tie case.
                return Ok(Self::finish(session, TurnOutcome::Tie));
            }
        };

        session
            .board
            .apply(bot_coord, Mark::Zero)
            .map_err(SessionError::IllegalMove)?;
        debug!(session_id = id, coord = %bot_coord, "Bot move applied");

        if has_winner(&session.board) {
            return Ok(Self::finish(session, TurnOutcome::BotWins));
        }

        Ok(TurnReport {
            outcome: TurnOutcome::YourTurn,
            grid: GridView::new(&session.board),
            phase: session.phase,
        })
    }

    /// Acknowledges a finished game, destroying the session.
    ///
    /// The session returns to the neutral pre-game state: no board is
    /// kept, and the next meaningful event is a fresh start command.
    ///
    /// # Errors
    ///
    /// Rejects unknown sessions and sessions still in progress.
    #[instrument(skip(self), fields(session_id = id))]
    pub fn acknowledge_finish(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))?;

        if session.phase != Phase::Finished {
            warn!(session_id = id, "Acknowledgement for unfinished game");
            return Err(SessionError::NotFinished(id.to_string()));
        }

        sessions.remove(id);
        info!(session_id = id, "Session acknowledged and destroyed");
        Ok(())
    }

    /// Returns the phase of the session, if one exists.
    ///
    /// Front-ends use this to route events: `None` means the session is
    /// in the neutral pre-game state.
    pub fn phase(&self, id: &str) -> Option<Phase> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(id).map(|s| s.phase)
    }

    /// Returns a snapshot of the session, if one exists.
    pub fn session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();
        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }
        session
    }

    fn finish(session: &mut GameSession, outcome: TurnOutcome) -> TurnReport {
        session.phase = Phase::Finished;
        info!(session_id = %session.id, %outcome, "Game finished");
        TurnReport {
            outcome,
            grid: GridView::new(&session.board),
            phase: session.phase,
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
