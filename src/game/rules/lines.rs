//! The winning-line table.

use super::super::position::Position;

/// The 8 ways to own a full line: rows, then columns, then diagonals.
///
/// The order is load-bearing. Both the winner scan and the move selector
/// resolve ties by taking the first qualifying line in this table.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn eight_lines_of_three_distinct_positions() {
        assert_eq!(WINNING_LINES.len(), 8);
        for line in WINNING_LINES {
            assert_ne!(line[0], line[1]);
            assert_ne!(line[1], line[2]);
            assert_ne!(line[0], line[2]);
        }
    }

    #[test]
    fn every_position_sits_on_the_expected_number_of_lines() {
        for pos in Position::iter() {
            let count = WINNING_LINES
                .iter()
                .filter(|line| line.contains(&pos))
                .count();
            let expected = match pos {
                Position::Center => 4,
                Position::TopLeft
                | Position::TopRight
                | Position::BottomLeft
                | Position::BottomRight => 3,
                _ => 2,
            };
            assert_eq!(count, expected, "line count for square {pos}");
        }
    }

    #[test]
    fn rows_precede_columns_precede_diagonals() {
        assert_eq!(
            WINNING_LINES[0],
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert_eq!(
            WINNING_LINES[3],
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );
        assert_eq!(
            WINNING_LINES[6],
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
        assert_eq!(
            WINNING_LINES[7],
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }
}
