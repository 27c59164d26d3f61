//! Board positions for the 3x3 grid.

use std::fmt;
use strum::EnumIter;

/// A square position on the 3x3 board.
///
/// Variants are declared in row-major order, so iterating with
/// `strum::IntoEnumIterator` visits squares in ascending board order. The
/// same order backs the 1-9 numbering the player sees at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Position {
    /// Top-left (square 1).
    TopLeft,
    /// Top-center (square 2).
    TopCenter,
    /// Top-right (square 3).
    TopRight,
    /// Middle-left (square 4).
    MiddleLeft,
    /// Center (square 5).
    Center,
    /// Middle-right (square 6).
    MiddleRight,
    /// Bottom-left (square 7).
    BottomLeft,
    /// Bottom-center (square 8).
    BottomCenter,
    /// Bottom-right (square 9).
    BottomRight,
}

impl Position {
    /// Converts to a board array index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board array index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// User-facing square number (1-9, left to right, top to bottom).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Parses a user-facing square number.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn index_round_trips() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn numbers_run_one_through_nine() {
        let numbers: Vec<usize> = Position::iter().map(Position::number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
        assert_eq!(Position::from_number(5), Some(Position::Center));
    }
}
