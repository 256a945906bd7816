//! Cells: the display and input unit bound to one board position.

use super::position::Position;
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Receives moves from cells.
///
/// Fire-and-forget: the cell does not learn whether the move was accepted.
/// The new state reaches it through the next set of cells handed out.
pub trait MoveRecorder {
    /// Records a move for the current player at `position`.
    fn record_move(&mut self, position: Position);
}

/// Typed view of one square for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell sits on the board.
    position: Position,
    /// What the cell currently holds.
    value: Square,
}

impl Cell {
    /// Creates a cell.
    pub fn new(position: Position, value: Square) -> Self {
        Self { position, value }
    }

    /// Returns the cell's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell's value.
    pub fn value(&self) -> Square {
        self.value
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the player whose mark is in the cell.
    pub fn player(&self) -> Option<Player> {
        self.value.player()
    }

    /// Text shown in the cell; empty cells show their key when `hints` is set.
    pub fn text(&self, hints: bool) -> String {
        match self.value {
            Square::Occupied(player) => player.to_string(),
            Square::Empty if hints => (self.position.to_index() + 1).to_string(),
            Square::Empty => String::new(),
        }
    }

    /// Activates the cell, forwarding a move to `recorder` if it is empty.
    ///
    /// Returns true if the move was forwarded.
    #[instrument(skip(recorder))]
    pub fn activate<R: MoveRecorder>(&self, recorder: &mut R) -> bool {
        if !self.is_empty() {
            debug!("Cell already occupied, ignoring activation");
            return false;
        }
        recorder.record_move(self.position);
        true
    }
}
