//! Monotonic history invariant: squares never change once set.

use super::super::{MoveHistoryLog, Position, Square};
use super::Invariant;

/// Invariant: each snapshot extends the previous one by a single mark.
///
/// Between consecutive snapshots exactly one square goes from empty to
/// occupied and nothing else changes. Squares are only ever cleared by
/// loading an earlier snapshot, which never touches the log itself.
pub struct MonotonicHistoryInvariant;

impl Invariant<MoveHistoryLog> for MonotonicHistoryInvariant {
    fn holds(log: &MoveHistoryLog) -> bool {
        let states: Vec<_> = log.entries().map(|entry| entry.state).collect();

        states.windows(2).all(|pair| {
            let (before, after) = (pair[0], pair[1]);
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.square(*pos) != after.square(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.square(*pos) == Square::Empty
                        && after.move_number() == before.move_number() + 1
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "History snapshots only ever add one mark at a time"
    }
}
