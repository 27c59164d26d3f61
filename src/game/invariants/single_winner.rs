//! Single-winner invariant: the line table never yields two owners.

use super::super::round::RoundInProgress;
use super::super::rules::WINNING_LINES;
use super::super::types::Square;
use super::Invariant;

/// Invariant: at most one participant owns a complete line.
///
/// Alternating legal play cannot hand both sides a full line; a board
/// that does is corrupt.
pub struct SingleWinnerInvariant;

impl Invariant<RoundInProgress> for SingleWinnerInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let board = round.board();
        let mut owners = WINNING_LINES.iter().filter_map(|&[a, b, c]| match board.get(a) {
            Square::Occupied(owner)
                if board.get(b) == Square::Occupied(owner)
                    && board.get(c) == Square::Occupied(owner) =>
            {
                Some(owner)
            }
            _ => None,
        });

        let first = owners.next();
        owners.all(|owner| Some(owner) == first)
    }

    fn description() -> &'static str {
        "at most one participant owns a complete line"
    }
}
