//! Match orchestration between the human and the computer opponent.

use crate::game::{
    MATCH_TARGET, Move, Outcome, Participant, RoundSetup, RoundState, Score, select_move,
};
use crate::interface::{PlayerInput, View};
use anyhow::Result;
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Final report for a completed match.
#[derive(Debug, Clone, Copy, Getters)]
pub struct MatchOutcome {
    /// The side that reached the target, if the match ran that far.
    champion: Option<Participant>,
    /// Closing score.
    score: Score,
}

/// Drives rounds until a champion emerges or the player bows out.
///
/// Owns the score for the whole match. Each round gets a fresh board and
/// an explicit first mover from the input collaborator; the previous
/// round's board is discarded with the finished round.
pub struct MatchController<R: Rng> {
    view: Box<dyn View>,
    input: Box<dyn PlayerInput>,
    rng: R,
    score: Score,
}

impl<R: Rng> MatchController<R> {
    /// Creates a controller with a fresh score.
    pub fn new(view: Box<dyn View>, input: Box<dyn PlayerInput>, rng: R) -> Self {
        Self {
            view,
            input,
            rng,
            score: Score::new(),
        }
    }

    /// Plays rounds until the target score or a declined rematch.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<MatchOutcome> {
        info!(target_wins = MATCH_TARGET, "match starting");

        loop {
            match self.play_round()? {
                Outcome::Winner(winner) => {
                    self.score.record_win(winner);
                    self.view.announce(&format!("{winner} won this round!"))?;
                }
                Outcome::Draw => self.view.announce("It's a tie!")?,
            }
            self.view.announce(&self.score.to_string())?;

            if let Some(champion) = self.score.champion() {
                info!(%champion, "match decided");
                self.view
                    .announce(&format!("{champion} is the overall winner!"))?;
                self.view.announce("Thanks for playing! Good bye.")?;
                return Ok(MatchOutcome {
                    champion: Some(champion),
                    score: self.score,
                });
            }

            if !self.input.continue_playing()? {
                info!("player bowed out");
                self.view.announce("Thanks for playing! Good bye.")?;
                return Ok(MatchOutcome {
                    champion: None,
                    score: self.score,
                });
            }
        }
    }

    /// One round, from first-player choice to outcome.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<Outcome> {
        let choice = self.input.choose_first_player()?;
        let first = choice.resolve(&mut self.rng);
        debug!(%first, "round opened");

        let mut round = RoundSetup::new().start(first);
        loop {
            self.view.render(round.board())?;

            let action = match round.to_move() {
                Participant::Player => {
                    let open = round.open_positions();
                    Move::new(Participant::Player, self.input.request_move(&open)?)
                }
                Participant::Computer => Move::new(
                    Participant::Computer,
                    select_move(round.board(), Participant::Computer, &mut self.rng),
                ),
            };
            debug!(%action, "placing");

            match round.play(action)? {
                RoundState::InProgress(next) => round = next,
                RoundState::Finished(finished) => {
                    self.view.render(finished.board())?;
                    return Ok(finished.outcome());
                }
            }
        }
    }
}
