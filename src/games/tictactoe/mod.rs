//! Tic-tac-toe: board state, win detection and move history.

mod action;
mod board;
mod cell;
pub mod contracts;
mod diff;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
pub mod types;

pub use action::{IgnoreReason, Move, MoveError, MoveResult};
pub use board::GameBoard;
pub use cell::{Cell, MoveRecorder};
pub use diff::{BoardDiff, changed_cells};
pub use history::{HistoryEntry, HistoryError, HistoryMode, MoveHistoryLog};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LineKind, WinLine};
pub use types::{Board, BoardState, Player, Square};
