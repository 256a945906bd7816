//! Win detection logic for tic-tac-toe.
//!
//! Lines are listed explicitly rather than derived from index offsets.
//! After a move only the lines through the changed square need checking.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of line a [`WinLine`] is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum LineKind {
    /// A horizontal row (0-2, top to bottom).
    #[display("row {}", _0)]
    Row(u8),
    /// A vertical column (0-2, left to right).
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One of the eight lines of three squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The kind of line.
    pub kind: LineKind,
    /// The three squares on the line.
    pub cells: [Position; 3],
}

impl WinLine {
    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells;
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// All eight winning lines.
pub static LINES: [WinLine; 8] = [
    // Rows
    WinLine {
        kind: LineKind::Row(0),
        cells: [Position::TopLeft, Position::TopCenter, Position::TopRight],
    },
    WinLine {
        kind: LineKind::Row(1),
        cells: [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    },
    WinLine {
        kind: LineKind::Row(2),
        cells: [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    },
    // Columns
    WinLine {
        kind: LineKind::Column(0),
        cells: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    },
    WinLine {
        kind: LineKind::Column(1),
        cells: [Position::TopCenter, Position::Center, Position::BottomCenter],
    },
    WinLine {
        kind: LineKind::Column(2),
        cells: [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    },
    // Diagonals
    WinLine {
        kind: LineKind::Diagonal,
        cells: [Position::TopLeft, Position::Center, Position::BottomRight],
    },
    WinLine {
        kind: LineKind::AntiDiagonal,
        cells: [Position::TopRight, Position::Center, Position::BottomLeft],
    },
];

/// Returns the lines passing through `pos`.
///
/// Corners lie on three lines, edges on two and the center on four.
pub fn lines_through(pos: Position) -> impl Iterator<Item = &'static WinLine> {
    LINES.iter().filter(move |line| line.contains(pos))
}

/// Checks the lines through `pos` for a completed line.
///
/// A line wins only if all three squares hold the same mark as `pos`.
/// Returns `None` when `pos` is empty.
#[instrument(skip(board))]
pub fn winning_line_through(board: &Board, pos: Position) -> Option<WinLine> {
    let mover = board.get(pos).player()?;
    lines_through(pos)
        .find(|line| line.owner(board) == Some(mover))
        .copied()
}

/// Checks every line for a winner.
///
/// Returns the first completed line and its owner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Convenience: does `player` hold any complete line?
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.cells
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))
    })
}
