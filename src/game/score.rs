//! Match scoring.

use super::types::Participant;
use derive_getters::Getters;
use std::fmt;

/// Rounds a participant must win to take the match.
pub const MATCH_TARGET: u32 = 3;

/// Win counts for the current match.
///
/// Owned by the match controller and handed across round boundaries;
/// nothing else survives a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Score {
    /// Rounds the human has won.
    player: u32,
    /// Rounds the computer has won.
    computer: u32,
}

impl Score {
    /// A fresh 0-0 score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a round win. At most one per round, by construction of the
    /// round outcome.
    pub fn record_win(&mut self, winner: Participant) {
        match winner {
            Participant::Player => self.player += 1,
            Participant::Computer => self.computer += 1,
        }
    }

    /// Win count for one side.
    pub fn of(&self, participant: Participant) -> u32 {
        match participant {
            Participant::Player => self.player,
            Participant::Computer => self.computer,
        }
    }

    /// The side that reached [`MATCH_TARGET`], if either has.
    pub fn champion(&self) -> Option<Participant> {
        if self.player >= MATCH_TARGET {
            Some(Participant::Player)
        } else if self.computer >= MATCH_TARGET {
            Some(Participant::Computer)
        } else {
            None
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {}, Computer: {}.", self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_level() {
        let score = Score::new();
        assert_eq!(score.of(Participant::Player), 0);
        assert_eq!(score.of(Participant::Computer), 0);
        assert_eq!(score.champion(), None);
    }

    #[test]
    fn wins_accumulate_per_side() {
        let mut score = Score::new();
        score.record_win(Participant::Player);
        score.record_win(Participant::Computer);
        score.record_win(Participant::Player);

        assert_eq!(score.of(Participant::Player), 2);
        assert_eq!(score.of(Participant::Computer), 1);
        assert_eq!(score.champion(), None);
    }

    #[test]
    fn third_win_crowns_a_champion_despite_a_trailing_opponent() {
        let mut score = Score::new();
        score.record_win(Participant::Computer);
        score.record_win(Participant::Player);
        score.record_win(Participant::Computer);
        score.record_win(Participant::Player);
        score.record_win(Participant::Player);

        assert_eq!(score.champion(), Some(Participant::Player));
        assert_eq!(score.of(Participant::Computer), 2);
    }

    #[test]
    fn display_matches_the_scoreboard_line() {
        let mut score = Score::new();
        score.record_win(Participant::Computer);
        assert_eq!(score.to_string(), "Player: 0, Computer: 1.");
    }
}
