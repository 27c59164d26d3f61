//! History consistency invariant: the record explains the board.

use super::super::round::RoundInProgress;
use super::super::types::Square;
use super::Invariant;

/// Invariant: every occupied square is explained by exactly one recorded
/// placement, and every recorded placement still shows its participant's
/// marker on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let occupied = round
            .board()
            .squares()
            .iter()
            .filter(|sq| **sq != Square::Empty)
            .count();
        if occupied != round.history().len() {
            return false;
        }

        round
            .history()
            .iter()
            .all(|mov| round.board().get(mov.position) == Square::Occupied(mov.participant))
    }

    fn description() -> &'static str {
        "history matches the occupied squares"
    }
}
