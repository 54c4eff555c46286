//! End-to-end tests for the conversation flow.

use std::collections::VecDeque;
use ticbot::{
    Coord, FirstFreePicker, FREE_LABEL, MovePicker, Phase, SessionError, SessionManager,
    TurnOutcome,
};

/// Picker that plays a fixed sequence of coordinates, for
/// deterministic scenarios.
#[derive(Debug)]
struct ScriptedPicker {
    moves: VecDeque<Coord>,
}

impl ScriptedPicker {
    fn new(moves: &[(u8, u8)]) -> Self {
        Self {
            moves: moves
                .iter()
                .map(|&(row, col)| Coord::new(row, col).expect("valid test coordinate"))
                .collect(),
        }
    }
}

impl MovePicker for ScriptedPicker {
    fn pick(&mut self, legal: &[Coord]) -> Option<Coord> {
        let next = self.moves.pop_front()?;
        assert!(legal.contains(&next), "scripted move {next} is not legal");
        Some(next)
    }
}

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_human_wins_top_row() {
    // Bot is forced outside row 0 so the human's third move completes
    // the line.
    let picker = ScriptedPicker::new(&[(1, 0), (1, 1)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");

    let report = manager.submit_human_move("chat", coord(0, 0)).unwrap();
    assert_eq!(*report.outcome(), TurnOutcome::YourTurn);
    assert_eq!(*report.phase(), Phase::InProgress);

    let report = manager.submit_human_move("chat", coord(0, 1)).unwrap();
    assert_eq!(*report.outcome(), TurnOutcome::YourTurn);

    let report = manager.submit_human_move("chat", coord(0, 2)).unwrap();
    assert_eq!(*report.outcome(), TurnOutcome::HumanWins);
    assert_eq!(*report.phase(), Phase::Finished);
}

#[test]
fn test_bot_wins_top_row() {
    let picker = ScriptedPicker::new(&[(0, 0), (0, 1), (0, 2)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");

    manager.submit_human_move("chat", coord(1, 1)).unwrap();
    manager.submit_human_move("chat", coord(2, 0)).unwrap();
    let report = manager.submit_human_move("chat", coord(1, 2)).unwrap();

    assert_eq!(*report.outcome(), TurnOutcome::BotWins);
    assert_eq!(*report.phase(), Phase::Finished);
}

#[test]
fn test_tie_when_human_fills_last_cell() {
    // Final board: X O X / X O O / O X X - full, no line.
    let picker = ScriptedPicker::new(&[(0, 1), (1, 1), (1, 2), (2, 0)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");

    for (row, col) in [(0, 0), (0, 2), (1, 0), (2, 1)] {
        let report = manager.submit_human_move("chat", coord(row, col)).unwrap();
        assert_eq!(*report.outcome(), TurnOutcome::YourTurn);
        assert_eq!(*report.phase(), Phase::InProgress);
    }

    // Ninth cell: bot move selection is exhausted, which is the tie.
    let report = manager.submit_human_move("chat", coord(2, 2)).unwrap();
    assert_eq!(*report.outcome(), TurnOutcome::Tie);
    assert_eq!(*report.phase(), Phase::Finished);

    let session = manager.session("chat").unwrap();
    assert!(session.board().legal_moves().is_empty());
}

#[test]
fn test_start_always_resets() {
    let manager = SessionManager::with_picker(Box::new(FirstFreePicker));
    manager.start_game("chat");
    manager.submit_human_move("chat", coord(1, 1)).unwrap();

    // Restart mid-game.
    let report = manager.start_game("chat");
    assert_eq!(*report.phase(), Phase::InProgress);
    assert_eq!(*report.outcome(), TurnOutcome::YourTurn);
    for row in report.grid().rows() {
        for button in row {
            assert_eq!(button.label(), FREE_LABEL);
        }
    }
    assert_eq!(manager.session("chat").unwrap().board().legal_moves().len(), 9);
}

#[test]
fn test_start_after_finish_resets() {
    let picker = ScriptedPicker::new(&[(1, 0), (1, 1)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");
    for (row, col) in [(0, 0), (0, 1), (0, 2)] {
        manager.submit_human_move("chat", coord(row, col)).unwrap();
    }
    assert_eq!(manager.phase("chat"), Some(Phase::Finished));

    let report = manager.start_game("chat");
    assert_eq!(*report.phase(), Phase::InProgress);
    assert_eq!(manager.session("chat").unwrap().board().legal_moves().len(), 9);
}

#[test]
fn test_occupied_cell_is_rejected_without_mutation() {
    let manager = SessionManager::with_picker(Box::new(FirstFreePicker));
    manager.start_game("chat");

    // Human takes (1, 1); the bot then takes (0, 0), the first free cell.
    manager.submit_human_move("chat", coord(1, 1)).unwrap();
    let before = manager.session("chat").unwrap().board().clone();

    for taken in [coord(1, 1), coord(0, 0)] {
        let err = manager.submit_human_move("chat", taken).unwrap_err();
        assert!(matches!(err, SessionError::IllegalMove(_)));
    }

    let after = manager.session("chat").unwrap();
    assert_eq!(*after.board(), before);
    assert_eq!(*after.phase(), Phase::InProgress);
}

#[test]
fn test_moves_after_finish_are_rejected() {
    let picker = ScriptedPicker::new(&[(1, 0), (1, 1)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");
    for (row, col) in [(0, 0), (0, 1), (0, 2)] {
        manager.submit_human_move("chat", coord(row, col)).unwrap();
    }

    let board = manager.session("chat").unwrap().board().clone();
    let err = manager.submit_human_move("chat", coord(2, 2)).unwrap_err();
    assert!(matches!(err, SessionError::GameOver(_)));
    assert_eq!(*manager.session("chat").unwrap().board(), board);
}

#[test]
fn test_acknowledge_destroys_finished_session() {
    let picker = ScriptedPicker::new(&[(1, 0), (1, 1)]);
    let manager = SessionManager::with_picker(Box::new(picker));
    manager.start_game("chat");
    for (row, col) in [(0, 0), (0, 1), (0, 2)] {
        manager.submit_human_move("chat", coord(row, col)).unwrap();
    }

    manager.acknowledge_finish("chat").unwrap();
    assert_eq!(manager.phase("chat"), None);

    // A second acknowledgement has nothing to act on.
    let err = manager.acknowledge_finish("chat").unwrap_err();
    assert!(matches!(err, SessionError::UnknownSession(_)));
}

#[test]
fn test_every_turn_lands_in_a_declared_phase() {
    // Play a full deterministic game; after every accepted move the
    // session is either still in progress or finished, and the report
    // agrees with the stored phase.
    let manager = SessionManager::with_picker(Box::new(FirstFreePicker));
    manager.start_game("chat");

    let mut finished = false;
    for (row, col) in [(1, 1), (2, 0), (1, 2), (2, 2), (2, 1)] {
        if finished {
            break;
        }
        let report = manager.submit_human_move("chat", coord(row, col)).unwrap();
        assert_eq!(Some(*report.phase()), manager.phase("chat"));
        match report.phase() {
            Phase::InProgress => assert_eq!(*report.outcome(), TurnOutcome::YourTurn),
            Phase::Finished => {
                assert_ne!(*report.outcome(), TurnOutcome::YourTurn);
                finished = true;
            }
        }
    }
}

#[test]
fn test_status_strings_are_fixed() {
    assert_eq!(
        TurnOutcome::YourTurn.to_string(),
        "X (your) turn! Please, put X to the free place"
    );
    assert_eq!(TurnOutcome::HumanWins.to_string(), "You win!");
    assert_eq!(TurnOutcome::BotWins.to_string(), "Bot win!");
    assert_eq!(TurnOutcome::Tie.to_string(), "Tie");
}
