//! Line, win, and draw rules for the 3x3 grid.

mod draw;
mod lines;
mod win;

pub use draw::is_full;
pub use lines::WINNING_LINES;
pub use win::check_winner;
