//! Placement actions and their failure modes.

use super::position::Position;
use super::types::Participant;
use std::fmt;

/// One placement: a participant claiming a square.
///
/// Placements are first-class domain events. A round records them in
/// order, so a finished round can be audited or replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Who is placing.
    pub participant: Participant,
    /// Where the marker lands.
    pub position: Position,
}

impl Move {
    /// Creates a placement.
    pub fn new(participant: Participant, position: Position) -> Self {
        Self {
            participant,
            position,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> square {}", self.participant, self.position)
    }
}

/// Why a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a marker.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The acting participant is not the one to move.
    #[display("it is not {_0}'s turn")]
    OutOfTurn(Participant),

    /// A round invariant broke after a placement (postcondition failure).
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
