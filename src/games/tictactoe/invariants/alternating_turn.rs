//! Alternating turn invariant: players alternate, starting with the first player.

use super::super::BoardState;
use super::Invariant;

/// Invariant: the mover alternates on every accepted move.
///
/// After `n` moves the first player has `ceil(n / 2)` marks, the other
/// player `floor(n / 2)`, and the player to move is the first player
/// exactly when `n` is even. This holds on finished states too, since
/// the turn flips on the final move as well.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(state: &BoardState) -> bool {
        let n = state.move_number();
        let first = state.first_player();
        let second = first.opponent();

        let expected_next = if n % 2 == 0 { first } else { second };

        state.board().count(first) == n.div_ceil(2)
            && state.board().count(second) == n / 2
            && state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
