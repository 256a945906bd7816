//! Core domain types for tic-tac-toe.

use super::action::{IgnoreReason, Move, MoveError, MoveResult};
use super::contracts::{Contract, MoveContract};
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (moves first unless configured otherwise).
    #[default]
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if no player occupies the square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key when `hints` is set.
    pub fn display(&self, hints: bool) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty if hints => (row * 3 + col + 1).to_string(),
                        Square::Empty => ".".to_string(),
                        Square::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

/// Complete game state at one point in the move sequence.
///
/// States are values: applying a move returns a new state and leaves the
/// original untouched, so any state can be stored as a history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// The board.
    board: Board,
    /// Player whose move is next.
    current_player: Player,
    /// Player who made the first move.
    first_player: Player,
    /// Set once a win or draw has been detected.
    finished: bool,
    /// How the game ended, once finished.
    outcome: Option<Outcome>,
    /// Number of accepted moves that produced this state.
    move_number: usize,
    /// The move that produced this state.
    last_move: Option<Move>,
}

impl BoardState {
    /// Creates the initial state with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            first_player,
            finished: false,
            outcome: None,
            move_number: 0,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the outcome, if the game is finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.as_ref().and_then(Outcome::winner)
    }

    /// Returns the number of moves played to reach this state.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Returns the move that produced this state.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the square at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Records a move for the current player at a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not in `0..9`.
    /// Occupied squares and finished games are not errors: they yield
    /// [`MoveResult::Ignored`] and the state is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player, move_number = self.move_number))]
    pub fn record_move(&self, index: usize) -> Result<MoveResult, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex { index })?;
        Ok(self.place(pos))
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current_player, move_number = self.move_number))]
    pub fn place(&self, pos: Position) -> MoveResult {
        if let Err(reason) = MoveContract::pre(self, &pos) {
            debug!(%reason, "Move ignored");
            return MoveResult::Ignored(reason);
        }

        let player = self.current_player;
        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(player));
        next.move_number += 1;
        next.last_move = Some(Move::new(player, pos));
        next.current_player = player.opponent();

        // Only lines through the changed square can have been completed.
        if let Some(line) = rules::win::winning_line_through(&next.board, pos) {
            debug!(%player, ?line, "Winning line completed");
            next.finished = true;
            next.outcome = Some(Outcome::Winner { player, line });
        } else if rules::draw::is_full(&next.board) {
            debug!("Board full without a winner");
            next.finished = true;
            next.outcome = Some(Outcome::Draw);
        }

        MoveResult::Accepted(next)
    }

    /// Checks whether a move at `pos` would currently be accepted.
    pub fn accepts(&self, pos: Position) -> Result<(), IgnoreReason> {
        MoveContract::pre(self, &pos)
    }

    /// Squares a move would currently be accepted on.
    ///
    /// Empty once the game is finished.
    pub fn playable_squares(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.accepts(*pos).is_ok()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
