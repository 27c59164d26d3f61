//! Placement contracts: pre- and postconditions for round transitions.
//!
//! Preconditions gate every placement; postconditions re-verify the round
//! invariants in debug builds after the transition lands.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::RoundInProgress;
use tracing::instrument;

/// Pre/postcondition pair for a state transition.
pub trait Contract<S, A> {
    /// Must hold before the action is applied.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Must hold across the transition.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target square is open.
pub struct SquareIsOpen;

impl SquareIsOpen {
    /// Rejects placements onto occupied squares.
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if round.board().is_empty(action.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(action.position))
        }
    }
}

/// Precondition: the acting participant holds the turn.
pub struct HasTheTurn;

impl HasTheTurn {
    /// Rejects placements made out of turn.
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if action.participant == round.to_move() {
            Ok(())
        } else {
            Err(MoveError::OutOfTurn(action.participant))
        }
    }
}

/// Composite precondition for a legal placement.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates every placement precondition.
    #[instrument(skip(round))]
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        SquareIsOpen::check(action, round)?;
        HasTheTurn::check(action, round)?;
        Ok(())
    }
}

/// The placement contract: legal beforehand, invariants intact afterwards.
pub struct PlacementContract;

impl Contract<RoundInProgress, Move> for PlacementContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), MoveError> {
        LegalPlacement::check(action, round)
    }

    fn post(_before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
