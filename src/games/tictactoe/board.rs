//! The game board: live state, move acceptance and history.

use super::action::{MoveError, MoveResult};
use super::cell::{Cell, MoveRecorder};
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
#[cfg(debug_assertions)]
use super::invariants::{Invariant, MonotonicHistoryInvariant};
use super::history::{HistoryError, HistoryMode, MoveHistoryLog};
use super::outcome::Outcome;
use super::position::Position;
use super::types::{BoardState, Player};
use tracing::{debug, info, instrument, warn};

/// A tic-tac-toe board with move history.
///
/// Holds the state on display and the log of every snapshot since the
/// game started. Accepted moves are pushed to the log; selecting a log
/// entry loads that snapshot as the state on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    state: BoardState,
    history: MoveHistoryLog,
}

impl GameBoard {
    /// Creates a new game with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        let state = BoardState::new(first_player);
        Self {
            history: MoveHistoryLog::new(state.clone()),
            state,
        }
    }

    /// Builds a game by recording each cell index in order.
    ///
    /// Moves on occupied squares or after the game ends are ignored, as
    /// they would be during play.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for any index outside `0..9`.
    #[instrument]
    pub fn replay(first_player: Player, indices: &[usize]) -> Result<Self, MoveError> {
        let mut board = Self::new(first_player);
        for index in indices {
            board.record_move(*index)?;
        }
        Ok(board)
    }

    /// Returns the state on display.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the history log.
    pub fn history(&self) -> &MoveHistoryLog {
        &self.history
    }

    /// Returns the player whose move is next.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns true if the state on display is finished.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Returns the outcome of the state on display.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.state.outcome()
    }

    /// Returns whether the history is live or being reviewed.
    pub fn mode(&self) -> HistoryMode {
        self.history.mode()
    }

    /// Returns the cell view for one position.
    pub fn cell(&self, pos: Position) -> Cell {
        Cell::new(pos, self.state.square(pos))
    }

    /// Returns cell views for every position, row-major.
    pub fn cells(&self) -> [Cell; 9] {
        Position::ALL.map(|pos| self.cell(pos))
    }

    /// Records a move for the current player at a raw cell index.
    ///
    /// On acceptance the new state is pushed to the history log, which
    /// drops any snapshots after the one on display.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for an index outside `0..9`, and
    /// [`MoveError::InvariantViolation`] if the new state does not follow the
    /// history log or, in debug builds, breaks a game invariant. The board is
    /// left unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.current_player(), cursor = self.history.cursor()))]
    pub fn record_move(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        let result = self.state.record_move(index)?;

        if let MoveResult::Accepted(next) = &result {
            #[cfg(debug_assertions)]
            MoveContract::post(&self.state, next)?;

            let mut history = self.history.clone();
            let discarded = history.record_snapshot(next.clone()).map_err(|e| {
                MoveError::InvariantViolation {
                    description: e.to_string(),
                }
            })?;

            #[cfg(debug_assertions)]
            if !MonotonicHistoryInvariant::holds(&history) {
                warn!(
                    invariant = MonotonicHistoryInvariant::description(),
                    "History invariant violated"
                );
                return Err(MoveError::InvariantViolation {
                    description: MonotonicHistoryInvariant::description().to_string(),
                });
            }

            self.history = history;
            self.state = next.clone();

            info!(
                move_number = self.state.move_number(),
                discarded,
                finished = self.state.is_finished(),
                "Move recorded"
            );
            if let Some(outcome) = self.state.outcome() {
                info!(%outcome, "Game over");
            }
        }

        Ok(result)
    }

    /// Loads the snapshot at `position` from the history log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PositionOutOfRange`] if no such snapshot exists.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, position: usize) -> Result<&BoardState, HistoryError> {
        self.history.view_snapshot(position)?;
        self.state = self.history.restore();
        debug!(mode = %self.history.mode(), "Snapshot loaded");
        Ok(&self.state)
    }

    /// Starts over with the same first player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new(self.state.first_player());
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

impl MoveRecorder for GameBoard {
    fn record_move(&mut self, position: Position) {
        if let Err(e) = GameBoard::record_move(self, position.to_index()) {
            warn!(error = %e, "Move from cell failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{IgnoreReason, Square};

    #[test]
    fn test_new_board_live_and_empty() {
        let board = GameBoard::default();
        assert_eq!(board.mode(), HistoryMode::Live);
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_cell_activation_reaches_board() {
        let mut board = GameBoard::default();
        let cell = board.cell(Position::Center);
        assert!(cell.activate(&mut board));
        assert_eq!(board.cell(Position::Center).value(), Square::Occupied(Player::X));

        // Stale cell view still says empty; the board ignores the repeat.
        cell.activate(&mut board);
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_finished_game_ignores_moves() {
        let mut board = GameBoard::replay(Player::X, &[0, 3, 1, 4, 2]).expect("valid indices");
        assert!(board.is_finished());
        let result = board.record_move(8).expect("valid index");
        assert_eq!(result, MoveResult::Ignored(IgnoreReason::GameFinished));
        assert_eq!(board.history().len(), 5);
    }

    #[test]
    fn test_rejected_move_while_reviewing_keeps_history() {
        let mut board = GameBoard::replay(Player::X, &[0, 3, 1]).expect("valid indices");
        board.jump_to(1).expect("position exists");
        let result = board.record_move(0).expect("valid index");
        assert!(!result.is_accepted());
        assert_eq!(board.history().len(), 3);
        assert_eq!(board.mode(), HistoryMode::Reviewing);
    }

    #[test]
    fn test_move_out_of_step_with_history_changes_nothing() {
        let ahead = GameBoard::replay(Player::X, &[4, 0]).expect("valid indices");
        let mut board = GameBoard {
            state: ahead.state().clone(),
            history: MoveHistoryLog::new(BoardState::new(Player::X)),
        };
        let before = board.clone();

        let err = board.record_move(8).expect_err("snapshot out of sequence");
        assert!(matches!(err, MoveError::InvariantViolation { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_restart_keeps_first_player() {
        let mut board = GameBoard::replay(Player::O, &[4, 0]).expect("valid indices");
        board.restart();
        assert!(board.history().is_empty());
        assert_eq!(board.current_player(), Player::O);
    }
}
