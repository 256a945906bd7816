//! Contract-based validation for tic-tac-toe.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions decide whether a move is accepted; postconditions
//! verify the resulting state and run in debug builds only.

use super::action::{IgnoreReason, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::types::{BoardState, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why a precondition can refuse an action.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must not be finished.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Checks the precondition.
    pub fn check(state: &BoardState) -> Result<(), IgnoreReason> {
        if state.is_finished() {
            Err(IgnoreReason::GameFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(state: &BoardState, pos: Position) -> Result<(), IgnoreReason> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(pos))
        }
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Game is not finished
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to the mover's mark
/// - Move number advanced by one
/// - All state invariants hold
pub struct MoveContract;

impl Contract<BoardState, Position> for MoveContract {
    type Rejection = IgnoreReason;

    fn pre(state: &BoardState, pos: &Position) -> Result<(), IgnoreReason> {
        GameNotFinished::check(state)?;
        SquareIsEmpty::check(state, *pos)
    }

    #[instrument(skip_all)]
    fn post(before: &BoardState, after: &BoardState) -> Result<(), MoveError> {
        let mut violations = Vec::new();

        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.square(*pos) != after.square(*pos))
            .collect();
        let expected = Square::Occupied(before.current_player());
        match changed.as_slice() {
            [pos] if before.square(*pos) == Square::Empty && after.square(*pos) == expected => {}
            _ => violations.push(format!(
                "Expected one square to gain {}'s mark, found {} changed",
                before.current_player(),
                changed.len()
            )),
        }

        if after.move_number() != before.move_number() + 1 {
            violations.push(format!(
                "Move number went from {} to {}",
                before.move_number(),
                after.move_number()
            ));
        }

        if let Err(failed) = TicTacToeInvariants::check_all(after) {
            violations.extend(failed.into_iter().map(|v| v.description));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            let description = violations.join("; ");
            warn!(%description, "Move postcondition failed");
            Err(MoveError::InvariantViolation { description })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveResult, Player};

    #[test]
    fn test_precondition_empty_square() {
        let state = BoardState::new(Player::X);
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = BoardState::new(Player::X);
        let MoveResult::Accepted(state) = state.place(Position::Center) else {
            panic!("Expected accepted move");
        };
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = BoardState::new(Player::X);
        let MoveResult::Accepted(after) = before.place(Position::TopLeft) else {
            panic!("Expected accepted move");
        };
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_skipped_move() {
        let before = BoardState::new(Player::X);
        // Comparing a state with itself: nothing changed.
        assert!(matches!(
            MoveContract::post(&before, &before),
            Err(MoveError::InvariantViolation { .. })
        ));
    }
}
