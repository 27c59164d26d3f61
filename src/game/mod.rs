//! Pure game logic: board, rules, move selection, rounds, and scoring.

mod action;
mod contracts;
mod invariants;
mod position;
mod round;
mod rules;
mod score;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalPlacement, PlacementContract};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, RoundInvariants, SingleWinnerInvariant,
};
pub use position::Position;
pub use round::{Outcome, RoundFinished, RoundInProgress, RoundSetup, RoundState};
pub use rules::{WINNING_LINES, check_winner, is_full};
pub use score::{MATCH_TARGET, Score};
pub use selector::{completing_move, select_move};
pub use types::{Board, Participant, Square};
