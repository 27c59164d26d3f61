//! Tic-tac-toe match engine with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Game**: board, line rules, move selection, the typestate round
//!   machine, and match scoring
//! - **Interface**: the collaborator traits the controller consumes
//!   (rendering and human input)
//! - **Controller**: the match loop - rounds accumulate score until one
//!   side reaches three wins or the player bows out
//! - **Console**: a line-oriented terminal implementation of the
//!   collaborator traits
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Console, MatchController};
//!
//! # fn example() -> anyhow::Result<()> {
//! let controller = MatchController::new(
//!     Box::new(Console::new(false)),
//!     Box::new(Console::new(false)),
//!     rand::rng(),
//! );
//! let outcome = controller.run()?;
//! println!("champion: {:?}", outcome.champion());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod controller;
mod game;
mod interface;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - console front-end
pub use console::Console;

// Crate-level exports - match orchestration
pub use controller::{MatchController, MatchOutcome};

// Crate-level exports - collaborator seams
pub use interface::{FirstPlayerChoice, PlayerInput, View};

// Crate-level exports - game types
pub use game::{
    Board, MATCH_TARGET, Move, MoveError, Outcome, Participant, Position, RoundFinished,
    RoundInProgress, RoundSetup, RoundState, Score, Square, WINNING_LINES, check_winner,
    completing_move, is_full, select_move,
};
