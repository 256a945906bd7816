//! Changed-square tracking for minimal redraws.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// Positions whose squares differ between two boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDiff {
    changed: Vec<Position>,
}

impl BoardDiff {
    /// Compares two boards square by square.
    pub fn between(before: &Board, after: &Board) -> Self {
        Self {
            changed: changed_cells(before, after),
        }
    }

    /// Marks every square as changed (first draw).
    pub fn all() -> Self {
        Self {
            changed: Position::ALL.to_vec(),
        }
    }

    /// Returns the changed positions in row-major order.
    pub fn changed(&self) -> &[Position] {
        &self.changed
    }

    /// Returns true if `pos` needs redrawing.
    pub fn contains(&self, pos: Position) -> bool {
        self.changed.contains(&pos)
    }

    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Returns the positions whose squares differ between `before` and `after`.
pub fn changed_cells(before: &Board, after: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| before.get(*pos) != after.get(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_identical_boards() {
        let board = Board::new();
        assert!(BoardDiff::between(&board, &board).is_empty());
    }

    #[test]
    fn test_single_change() {
        let before = Board::new();
        let mut after = before;
        after.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(changed_cells(&before, &after), vec![Position::BottomLeft]);
    }

    #[test]
    fn test_all_marks_every_square() {
        let diff = BoardDiff::all();
        assert_eq!(diff.changed().len(), 9);
        assert!(diff.contains(Position::Center));
    }
}
