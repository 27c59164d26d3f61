//! Collaborator seams between the match controller and the outside world.
//!
//! The controller only ever talks to a [`View`] and a [`PlayerInput`].
//! The console front-end implements both; tests substitute scripted
//! fakes.

use crate::game::{Board, Participant, Position};
use anyhow::Result;
use rand::Rng;

/// Output collaborator: draws boards and relays announcements.
pub trait View {
    /// Draws the current board.
    fn render(&mut self, board: &Board) -> Result<()>;

    /// Relays a one-line message to the player.
    fn announce(&mut self, message: &str) -> Result<()>;
}

/// Input collaborator: every human decision the match needs.
///
/// Implementations own their retry loops. A returned position is always
/// a member of the offered open list; invalid entries never reach the
/// controller.
pub trait PlayerInput {
    /// Asks for a square among the open positions.
    fn request_move(&mut self, open: &[Position]) -> Result<Position>;

    /// Asks who should open the round.
    fn choose_first_player(&mut self) -> Result<FirstPlayerChoice>;

    /// Asks whether to play another round.
    fn continue_playing(&mut self) -> Result<bool>;
}

/// Menu answer for who opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPlayerChoice {
    /// The human opens.
    Player,
    /// The computer opens.
    Computer,
    /// Flip a coin.
    Random,
}

impl FirstPlayerChoice {
    /// Resolves the choice into a concrete first mover.
    ///
    /// `Random` is decided by a fair coin flip at this moment and never
    /// revisited; the chosen side applies to this round only.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Participant {
        match self {
            FirstPlayerChoice::Player => Participant::Player,
            FirstPlayerChoice::Computer => Participant::Computer,
            FirstPlayerChoice::Random => {
                if rng.random_bool(0.5) {
                    Participant::Player
                } else {
                    Participant::Computer
                }
            }
        }
    }
}
