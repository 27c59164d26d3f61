//! Alternation invariant: the two sides take turns.

use super::super::round::RoundInProgress;
use super::Invariant;

/// Invariant: consecutive placements come from different participants,
/// and the side to move is the opponent of whoever moved last.
///
/// Either side may open a round, so the expected pattern is seeded by the
/// recorded first move rather than a fixed convention.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let history = round.history();

        for window in history.windows(2) {
            if window[0].participant == window[1].participant {
                return false;
            }
        }

        match history.last() {
            Some(last) => round.to_move() == last.participant.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "participants alternate placements"
    }
}
