//! Move records and move results for tic-tac-toe.
//!
//! A move is a domain event: the player who placed a mark and where.

use super::position::Position;
use super::types::{BoardState, Player};
use serde::{Deserialize, Serialize};

/// A recorded move: the mark now occupying a square.
///
/// `player` is the player who made the move, not the player to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the mark.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
///
/// Ignored moves are not errors: the state is simply left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameFinished,
}

/// Result of offering a move to a board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied, producing this new state.
    Accepted(BoardState),
    /// The move was ignored; the state is unchanged.
    Ignored(IgnoreReason),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }
}

/// Error that can occur when recording a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}

impl std::error::Error for MoveError {}
