//! Strictly Rewind library - type-safe tic-tac-toe with time travel.
//!
//! # Architecture
//!
//! - **Games**: board state as immutable values, win detection over
//!   explicit lines, and a move history log that can be rewound
//! - **App**: a single board plus cursor, status and changed-square tracking
//! - **TUI**: terminal front end (ratatui)
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameBoard, HistoryMode, Player};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut board = GameBoard::new(Player::X);
//! board.record_move(4)?;
//! board.record_move(0)?;
//!
//! board.jump_to(1)?;
//! assert_eq!(board.mode(), HistoryMode::Reviewing);
//!
//! board.record_move(8)?;
//! assert_eq!(board.history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod games;
mod tui;

// Crate-level exports - Application
pub use app::{App, AppEvent, Direction, Report, move_cursor};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Terminal UI
pub use tui::{draw, map_key, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardDiff, BoardState, Cell, GameBoard, HistoryEntry, HistoryError, HistoryMode,
    IgnoreReason, LineKind, Move, MoveError, MoveHistoryLog, MoveRecorder, MoveResult, Outcome,
    Player, Position, Square, WinLine, changed_cells,
};

// Crate-level exports - Rules, contracts and invariants
pub use games::tictactoe::{contracts, invariants, rules};
