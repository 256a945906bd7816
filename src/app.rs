//! Application state: one board plus what the front end needs to show it.

use crate::config::AppConfig;
use crate::games::tictactoe::{
    BoardDiff, GameBoard, HistoryMode, MoveResult, Outcome, Player, Position,
};
use serde::Serialize;
use std::ops::ControlFlow;
use tracing::{debug, instrument, warn};

/// Input to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A cell was activated (clicked or its key pressed).
    Activate(Position),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// A history entry was selected.
    SelectHistory(usize),
    /// Show the previous snapshot.
    StepBack,
    /// Show the next snapshot.
    StepForward,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Moves the cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// The application: a single game board and its presentation state.
#[derive(Debug, Clone)]
pub struct App {
    board: GameBoard,
    config: AppConfig,
    cursor: Position,
    status: String,
    dirty: BoardDiff,
}

impl App {
    /// Creates the application from configuration.
    #[instrument(skip(config), fields(first_player = %config.first_player()))]
    pub fn new(config: AppConfig) -> Self {
        let board = GameBoard::new(*config.first_player());
        let status = turn_message(board.current_player());
        Self {
            board,
            config,
            cursor: Position::Center,
            status,
            dirty: BoardDiff::all(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True if a move on the cursor square would be accepted.
    pub fn cursor_playable(&self) -> bool {
        self.board.state().accepts(self.cursor).is_ok()
    }

    /// Returns the squares changed by the last event.
    pub fn dirty(&self) -> &BoardDiff {
        &self.dirty
    }

    /// Handles one event. Breaks when the application should exit.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) -> ControlFlow<()> {
        let before = *self.board.state().board();

        match event {
            AppEvent::Quit => return ControlFlow::Break(()),
            AppEvent::Activate(pos) => self.activate(pos),
            AppEvent::ActivateCursor => self.activate(self.cursor),
            AppEvent::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            AppEvent::SelectHistory(position) => self.jump(position),
            AppEvent::StepBack => match self.board.history().cursor().checked_sub(1) {
                Some(position) => self.jump(position),
                None => self.status = "Already at game start".to_string(),
            },
            AppEvent::StepForward => self.jump(self.board.history().cursor() + 1),
            AppEvent::Restart => {
                self.board.restart();
                self.status = turn_message(self.board.current_player());
            }
        }

        self.dirty = BoardDiff::between(&before, self.board.state().board());
        debug!(changed = ?self.dirty.changed(), "Event handled");
        ControlFlow::Continue(())
    }

    fn activate(&mut self, pos: Position) {
        self.cursor = pos;
        match self.board.record_move(pos.to_index()) {
            Ok(MoveResult::Accepted(state)) => {
                self.status = match state.outcome() {
                    Some(outcome) => outcome_message(outcome),
                    None => turn_message(state.current_player()),
                };
            }
            Ok(MoveResult::Ignored(reason)) => {
                self.status = reason.to_string();
            }
            Err(e) => {
                warn!(error = %e, "Move failed");
                self.status = format!("Move error: {}", e);
            }
        }
    }

    fn jump(&mut self, position: usize) {
        let shown = match self.board.jump_to(position) {
            Ok(state) => match state.outcome() {
                Some(outcome) => outcome_message(outcome),
                None => turn_message(state.current_player()),
            },
            Err(e) => {
                self.status = e.to_string();
                return;
            }
        };
        self.status = match self.board.mode() {
            HistoryMode::Live => shown,
            HistoryMode::Reviewing => format!("Viewing move #{}. {}", position, shown),
        };
    }

    /// Summary of the board on display, for non-interactive output.
    pub fn report(&self) -> Report {
        Report::from_board(&self.board, *self.config.show_hints())
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}

fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Winner { player, .. } => format!("Player {} wins!", player),
        Outcome::Draw => "Draw!".to_string(),
    }
}

/// Serializable summary of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Rows of the board as text.
    pub rows: Vec<String>,
    /// Player to move next.
    pub current_player: Player,
    /// Whether the displayed state is finished.
    pub finished: bool,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Number of moves to reach the displayed state.
    pub move_number: usize,
    /// Number of moves in the history log.
    pub history_len: usize,
    /// Live or reviewing.
    pub mode: HistoryMode,
    /// Squares the next move may be played on.
    pub playable: Vec<Position>,
}

impl Report {
    /// Builds a report for the state on display.
    pub fn from_board(board: &GameBoard, hints: bool) -> Self {
        let state = board.state();
        Self {
            rows: state
                .board()
                .display(hints)
                .lines()
                .filter(|line| !line.starts_with('-'))
                .map(str::to_string)
                .collect(),
            current_player: state.current_player(),
            finished: state.is_finished(),
            winner: state.winner(),
            move_number: state.move_number(),
            history_len: board.history().len(),
            mode: board.mode(),
            playable: state.playable_squares(),
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let status = match (self.finished, self.winner) {
            (true, Some(player)) => format!("Player {} wins!", player),
            (true, None) => "Draw!".to_string(),
            (false, _) => turn_message(self.current_player),
        };
        let mut text = format!(
            "{}\n\n{}\nMove {} of {} ({})",
            self.rows.join("\n-+-+-\n"),
            status,
            self.move_number,
            self.history_len,
            self.mode
        );
        if !self.playable.is_empty() {
            let keys: Vec<String> = self
                .playable
                .iter()
                .map(|pos| pos.to_index().to_string())
                .collect();
            text.push_str(&format!("\nOpen: {}", keys.join(",")));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_quit_breaks() {
        let mut app = App::new(AppConfig::default());
        assert_eq!(app.handle_event(AppEvent::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn test_step_back_at_start() {
        let mut app = App::new(AppConfig::default());
        assert_eq!(app.handle_event(AppEvent::StepBack), ControlFlow::Continue(()));
        assert_eq!(app.status(), "Already at game start");
    }
}
