//! Finished flag invariant: `finished` reflects the board.

use super::super::rules::{draw, win};
use super::super::BoardState;
use super::Invariant;

/// Invariant: a state is finished exactly when a line is complete or the
/// board is full, and the recorded outcome agrees with the board.
pub struct FinishedConsistentInvariant;

impl Invariant<BoardState> for FinishedConsistentInvariant {
    fn holds(state: &BoardState) -> bool {
        let board = state.board();
        let winner = win::check_winner(board).map(|(player, _)| player);
        let over = winner.is_some() || draw::is_full(board);

        if state.is_finished() != over || state.outcome().is_some() != over {
            return false;
        }

        match state.outcome() {
            None => true,
            Some(outcome) => match outcome.winner() {
                // The loser can never also hold a line.
                Some(player) => {
                    winner == Some(player) && !win::has_won(board, player.opponent())
                }
                None => draw::is_draw(board),
            },
        }
    }

    fn description() -> &'static str {
        "Finished flag and outcome agree with the board"
    }
}
