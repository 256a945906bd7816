//! Move history with time travel.
//!
//! The log holds the initial state plus one snapshot per accepted move,
//! and a cursor marking which snapshot is on display. Viewing an earlier
//! snapshot never edits the log; the snapshots after the cursor are only
//! discarded once a new move is recorded from that earlier point.

use super::types::BoardState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whether the log is showing its newest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum HistoryMode {
    /// Cursor is at the newest snapshot; new moves append.
    #[display("live")]
    Live,
    /// Cursor is behind the newest snapshot.
    #[display("reviewing")]
    Reviewing,
}

/// Errors from navigating the history log.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// No snapshot exists at the requested position.
    #[display("No snapshot at position {} (history has {} moves)", position, len)]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of recorded moves.
        len: usize,
    },

    /// A snapshot's move number does not match its place in the log.
    #[display(
        "Snapshot at position {} has move number {} (expected {})",
        position,
        actual,
        position
    )]
    SnapshotOutOfSequence {
        /// Position the snapshot would occupy.
        position: usize,
        /// Move number the snapshot carries.
        actual: usize,
    },
}

impl std::error::Error for HistoryError {}

/// One row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry<'a> {
    /// Position in the log (0 is the game start).
    pub position: usize,
    /// The snapshot.
    pub state: &'a BoardState,
    /// True if the cursor is on this entry.
    pub current: bool,
}

impl HistoryEntry<'_> {
    /// Link text for this entry.
    pub fn label(&self) -> String {
        match self.position {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{}", n),
        }
    }
}

/// Ordered board snapshots with a viewing cursor.
///
/// Position `n` holds the state after the n-th move; position 0 is the
/// state before any move. Deserialized logs are checked the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredLog")]
pub struct MoveHistoryLog {
    /// State before the first move.
    start: BoardState,
    /// One snapshot per recorded move.
    snapshots: Vec<BoardState>,
    /// Position currently on display (0..=snapshots.len()).
    cursor: usize,
}

/// Wire form of [`MoveHistoryLog`], validated before use.
#[derive(Deserialize)]
struct StoredLog {
    start: BoardState,
    snapshots: Vec<BoardState>,
    cursor: usize,
}

impl TryFrom<StoredLog> for MoveHistoryLog {
    type Error = HistoryError;

    fn try_from(stored: StoredLog) -> Result<Self, Self::Error> {
        let StoredLog {
            start,
            snapshots,
            cursor,
        } = stored;

        if cursor > snapshots.len() {
            return Err(HistoryError::PositionOutOfRange {
                position: cursor,
                len: snapshots.len(),
            });
        }
        for (position, state) in std::iter::once(&start).chain(&snapshots).enumerate() {
            in_sequence(position, state)?;
        }

        Ok(Self {
            start,
            snapshots,
            cursor,
        })
    }
}

fn in_sequence(position: usize, state: &BoardState) -> Result<(), HistoryError> {
    if state.move_number() == position {
        Ok(())
    } else {
        Err(HistoryError::SnapshotOutOfSequence {
            position,
            actual: state.move_number(),
        })
    }
}

impl MoveHistoryLog {
    /// Creates a log whose only entry is `start`.
    #[instrument(skip(start))]
    pub fn new(start: BoardState) -> Self {
        Self {
            start,
            snapshots: Vec::new(),
            cursor: 0,
        }
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Position currently on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Live when the cursor is on the newest snapshot.
    pub fn mode(&self) -> HistoryMode {
        if self.cursor == self.snapshots.len() {
            HistoryMode::Live
        } else {
            HistoryMode::Reviewing
        }
    }

    /// Returns the snapshot at `position` without moving the cursor.
    pub fn get(&self, position: usize) -> Option<&BoardState> {
        match position {
            0 => Some(&self.start),
            n => self.snapshots.get(n - 1),
        }
    }

    /// Returns the newest snapshot.
    pub fn latest(&self) -> &BoardState {
        self.snapshots.last().unwrap_or(&self.start)
    }

    /// Appends the state produced by a new move.
    ///
    /// When reviewing, every snapshot after the cursor is discarded first.
    /// Returns the number of discarded snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::SnapshotOutOfSequence`] if `state` does not
    /// follow the snapshot on display. The log is left unchanged.
    #[instrument(skip_all, fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record_snapshot(&mut self, state: BoardState) -> Result<usize, HistoryError> {
        if let Err(e) = in_sequence(self.cursor + 1, &state) {
            warn!(error = %e, "Snapshot does not follow the displayed position");
            return Err(e);
        }

        let discarded = self.snapshots.len().saturating_sub(self.cursor);
        if discarded > 0 {
            info!(discarded, from = self.cursor, "Rewriting history after rewind");
            self.snapshots.truncate(self.cursor);
        }

        self.snapshots.push(state);
        self.cursor = self.snapshots.len();
        debug!(len = self.snapshots.len(), "Snapshot recorded");
        Ok(discarded)
    }

    /// Moves the cursor to `position` and returns that snapshot.
    ///
    /// The stored sequence is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PositionOutOfRange`] if `position` is past
    /// the newest snapshot.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn view_snapshot(&mut self, position: usize) -> Result<&BoardState, HistoryError> {
        if self.get(position).is_none() {
            return Err(HistoryError::PositionOutOfRange {
                position,
                len: self.snapshots.len(),
            });
        }

        self.cursor = position;
        debug!(mode = %self.mode(), "Cursor moved");
        Ok(self.current())
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &BoardState {
        self.get(self.cursor).unwrap_or_else(|| self.latest())
    }

    /// Returns a copy of the snapshot at the cursor for the board to load.
    pub fn restore(&self) -> BoardState {
        self.current().clone()
    }

    /// Iterates over all entries, game start first.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry<'_>> {
        std::iter::once(&self.start)
            .chain(self.snapshots.iter())
            .enumerate()
            .map(|(position, state)| HistoryEntry {
                position,
                state,
                current: position == self.cursor,
            })
    }
}
