//! Full-board detection.

use super::super::types::{Board, Square};
use tracing::instrument;

/// True when every square is occupied.
///
/// A full board with no complete line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|sq| *sq != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::Participant;
    use super::super::win::check_winner;
    use super::*;
    use strum::IntoEnumIterator;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn empty_board_is_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn partial_board_is_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Participant::Player);
        assert!(!is_full(&board));
    }

    #[test]
    fn nine_markers_fill_the_board() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.place(pos, Participant::Player);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        for (pos, who) in [
            (Position::TopLeft, Participant::Player),
            (Position::TopCenter, Participant::Computer),
            (Position::TopRight, Participant::Player),
            (Position::MiddleLeft, Participant::Player),
            (Position::Center, Participant::Computer),
            (Position::MiddleRight, Participant::Computer),
            (Position::BottomLeft, Participant::Computer),
            (Position::BottomCenter, Participant::Player),
            (Position::BottomRight, Participant::Player),
        ] {
            board.place(pos, who);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn winning_board_is_not_a_draw() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Participant::Player);
        board.place(Position::TopCenter, Participant::Player);
        board.place(Position::TopRight, Participant::Player);
        board.place(Position::MiddleLeft, Participant::Computer);
        board.place(Position::Center, Participant::Computer);
        assert!(!is_draw(&board));
    }
}
