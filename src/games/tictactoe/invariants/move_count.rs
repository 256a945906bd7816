//! Move count invariant: every move fills exactly one square.

use super::super::BoardState;
use super::Invariant;

/// Invariant: the number of occupied squares equals the move number.
pub struct MoveCountInvariant;

impl Invariant<BoardState> for MoveCountInvariant {
    fn holds(state: &BoardState) -> bool {
        let consistent_last_move = match state.last_move() {
            Some(mov) => state.square(mov.position).player() == Some(mov.player),
            None => state.move_number() == 0,
        };

        state.board().occupied() == state.move_number() && consistent_last_move
    }

    fn description() -> &'static str {
        "Occupied squares match the number of moves played"
    }
}
