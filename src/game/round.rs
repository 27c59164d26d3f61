//! Typestate round machine: setup, play, finish.
//!
//! Each phase is its own type. A finished round cannot accept placements,
//! and an unfinished round has no outcome to misread - the compiler rules
//! both out.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlacementContract};
use super::position::Position;
use super::rules;
use super::types::{Board, Participant};
use std::fmt;
use tracing::instrument;

/// A round before the opening move: empty board, first mover undecided.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a round with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Commits the first mover and opens play.
    ///
    /// The decision is captured here once. Turn order is never inferred
    /// from board contents afterwards.
    #[instrument(skip(self))]
    pub fn start(self, first: Participant) -> RoundInProgress {
        RoundInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self::new()
    }
}

/// A round accepting placements.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Participant,
}

impl RoundInProgress {
    /// Applies a placement, consuming the round and returning the next
    /// state: still in progress, or finished on a win or a full board.
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] or [`MoveError::OutOfTurn`] when the
    /// placement contract rejects the action.
    #[instrument(skip(self))]
    pub fn play(self, action: Move) -> Result<RoundState, MoveError> {
        PlacementContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        round.board.place(action.position, action.participant);
        round.history.push(action);

        if let Some(winner) = rules::check_winner(&round.board) {
            return Ok(RoundState::Finished(RoundFinished {
                board: round.board,
                history: round.history,
                outcome: Outcome::Winner(winner),
            }));
        }

        if rules::is_full(&round.board) {
            return Ok(RoundState::Finished(RoundFinished {
                board: round.board,
                history: round.history,
                outcome: Outcome::Draw,
            }));
        }

        round.to_move = round.to_move.opponent();

        #[cfg(debug_assertions)]
        PlacementContract::post(&before, &round)?;

        Ok(RoundState::InProgress(round))
    }

    /// The participant holding the turn.
    pub fn to_move(&self) -> Participant {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Placements so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Squares still open to the mover.
    pub fn open_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Replays a move list from an empty board.
    ///
    /// Stops at the first terminal placement; trailing moves are ignored.
    #[instrument]
    pub fn replay(first: Participant, moves: &[Move]) -> Result<RoundState, MoveError> {
        let mut round = RoundSetup::new().start(first);

        for action in moves {
            match round.play(*action)? {
                RoundState::InProgress(next) => round = next,
                RoundState::Finished(finished) => return Ok(RoundState::Finished(finished)),
            }
        }

        Ok(RoundState::InProgress(round))
    }
}

/// A completed round. The outcome is always present, never an `Option`.
#[derive(Debug, Clone)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl RoundFinished {
    /// How the round ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Placements that produced the final board.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Result of a placement.
#[derive(Debug)]
pub enum RoundState {
    /// The round continues with the other participant to move.
    InProgress(RoundInProgress),
    /// The round reached a win or a draw.
    Finished(RoundFinished),
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A participant completed a line.
    Winner(Participant),
    /// The board filled with no complete line.
    Draw,
}

impl Outcome {
    /// The winner, unless the round was drawn.
    pub fn winner(&self) -> Option<Participant> {
        match self {
            Outcome::Winner(participant) => Some(*participant),
            Outcome::Draw => None,
        }
    }

    /// True when the board filled without a winner.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(participant) => write!(f, "{participant} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
