//! Move selection for the computer opponent.

use super::position::Position;
use super::rules::WINNING_LINES;
use super::types::{Board, Participant, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the computer's next square.
///
/// Priority order: complete an own line, block the opponent's line, take
/// the center, otherwise a uniformly random open square. The first three
/// tiers are pure functions of the board; only the fallback consults the
/// RNG. One ply deep by construction - a fork two moves out goes unseen.
///
/// The board must have at least one open square.
#[instrument(skip(rng))]
pub fn select_move<R: Rng>(board: &Board, marker: Participant, rng: &mut R) -> Position {
    if let Some(pos) = completing_move(board, marker) {
        debug!(square = %pos, "taking the winning square");
        return pos;
    }
    if let Some(pos) = completing_move(board, marker.opponent()) {
        debug!(square = %pos, "blocking the opponent");
        return pos;
    }
    if board.is_empty(Position::Center) {
        return Position::Center;
    }
    let open = board.empty_positions();
    open[rng.random_range(0..open.len())]
}

/// Finds the square that would complete a line for `marker`, if any.
///
/// Scans the line table in order and returns the open square of the first
/// line already holding two of `marker`'s markers.
pub fn completing_move(board: &Board, marker: Participant) -> Option<Position> {
    for line in WINNING_LINES {
        let mut open = None;
        let mut owned = 0;
        for pos in line {
            match board.get(pos) {
                Square::Empty => open = Some(pos),
                Square::Occupied(owner) if owner == marker => owned += 1,
                Square::Occupied(_) => {}
            }
        }
        if owned == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn board_with(moves: &[(Position, Participant)]) -> Board {
        let mut board = Board::new();
        for &(pos, who) in moves {
            board.place(pos, who);
        }
        board
    }

    #[test]
    fn takes_the_winning_square() {
        let board = board_with(&[
            (Position::TopLeft, Participant::Computer),
            (Position::TopCenter, Participant::Computer),
        ]);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            Position::TopRight
        );
    }

    #[test]
    fn blocks_the_opponent() {
        let board = board_with(&[
            (Position::TopLeft, Participant::Player),
            (Position::TopCenter, Participant::Player),
        ]);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            Position::TopRight
        );
    }

    #[test]
    fn winning_beats_blocking() {
        // Both sides threaten a row; the computer finishes its own.
        let board = board_with(&[
            (Position::TopLeft, Participant::Computer),
            (Position::TopCenter, Participant::Computer),
            (Position::MiddleLeft, Participant::Player),
            (Position::Center, Participant::Player),
        ]);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            Position::TopRight
        );
    }

    #[test]
    fn takes_the_center_on_an_empty_board() {
        assert_eq!(
            select_move(&Board::new(), Participant::Computer, &mut rng()),
            Position::Center
        );
    }

    #[test]
    fn prefers_center_when_no_line_is_live() {
        let board = board_with(&[(Position::TopLeft, Participant::Player)]);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            Position::Center
        );
    }

    #[test]
    fn falls_back_to_a_random_open_square() {
        let board = board_with(&[
            (Position::Center, Participant::Player),
            (Position::TopLeft, Participant::Computer),
        ]);
        let pick = select_move(&board, Participant::Computer, &mut rng());
        assert!(board.empty_positions().contains(&pick));
    }

    #[test]
    fn lone_open_square_is_the_only_answer() {
        let board = board_with(&[
            (Position::TopLeft, Participant::Player),
            (Position::Center, Participant::Computer),
            (Position::TopRight, Participant::Player),
            (Position::TopCenter, Participant::Computer),
            (Position::MiddleLeft, Participant::Player),
            (Position::MiddleRight, Participant::Computer),
            (Position::BottomCenter, Participant::Player),
            (Position::BottomLeft, Participant::Computer),
        ]);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            Position::BottomRight
        );
    }

    #[test]
    fn line_scans_are_deterministic() {
        let board = board_with(&[
            (Position::TopLeft, Participant::Computer),
            (Position::TopCenter, Participant::Computer),
        ]);
        let first = completing_move(&board, Participant::Computer);
        let second = completing_move(&board, Participant::Computer);
        assert_eq!(first, second);
        assert_eq!(
            select_move(&board, Participant::Computer, &mut rng()),
            select_move(&board, Participant::Computer, &mut rng()),
        );
    }
}
