//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are checked by the move
//! postcondition in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod finished_consistent;
pub mod monotonic_history;
pub mod move_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use finished_consistent::FinishedConsistentInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use move_count::MoveCountInvariant;

/// All single-state invariants as a composable set.
pub type TicTacToeInvariants = (
    AlternatingTurnInvariant,
    MoveCountInvariant,
    FinishedConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardState, GameBoard, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = BoardState::new(Player::X);
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board = GameBoard::replay(Player::X, &[0, 4, 2, 1, 7]).expect("valid indices");
        assert!(TicTacToeInvariants::check_all(board.state()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternatingTurnInvariant, MoveCountInvariant);
        let state = BoardState::new(Player::O);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        // A hand-built state claiming two moves with an empty board.
        let json = r#"{
            "board": {"squares": ["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]},
            "current_player": "O",
            "first_player": "X",
            "finished": false,
            "outcome": null,
            "move_number": 2,
            "last_move": null
        }"#;
        let state: BoardState = serde_json::from_str(json).expect("valid json");
        let violations = TicTacToeInvariants::check_all(&state).expect_err("corrupt state");
        assert_eq!(violations.len(), 2);
    }
}
