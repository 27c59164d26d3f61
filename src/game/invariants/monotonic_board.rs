//! Monotonic board invariant: squares never change once claimed.

use super::super::round::RoundInProgress;
use super::super::types::Board;
use super::Invariant;

/// Invariant: replaying the history onto a fresh board reproduces the
/// current board, with every placement landing on an open square.
///
/// Catches overwrites and out-of-band board edits alike.
pub struct MonotonicBoardInvariant;

impl Invariant<RoundInProgress> for MonotonicBoardInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let mut rebuilt = Board::new();

        for mov in round.history() {
            if !rebuilt.is_empty(mov.position) {
                return false;
            }
            rebuilt.place(mov.position, mov.participant);
        }

        rebuilt == *round.board()
    }

    fn description() -> &'static str {
        "claimed squares never change"
    }
}
