//! Console front-end: draws the grid and gathers keyboard decisions.

use crate::game::{Board, Participant, Position, Square};
use crate::interface::{FirstPlayerChoice, PlayerInput, View};
use anyhow::{Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use strum::IntoEnumIterator;

const PLAYER_MARK: char = 'X';
const COMPUTER_MARK: char = 'O';

/// Line-oriented console implementing both collaborator traits.
pub struct Console {
    plain: bool,
}

impl Console {
    /// Creates a console front-end. With `plain`, turns print sequentially
    /// instead of repainting a cleared screen.
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn read_line(&mut self) -> Result<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("standard input closed");
        }
        Ok(line)
    }
}

fn mark(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Participant::Player) => PLAYER_MARK,
        Square::Occupied(Participant::Computer) => COMPUTER_MARK,
    }
}

/// Joins square numbers the way the prompt reads them: "1, 2, or 3".
fn join_or(open: &[Position]) -> String {
    let numbers: Vec<String> = open.iter().map(|pos| pos.number().to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    }
}

fn parse_square(input: &str, open: &[Position]) -> Option<Position> {
    let number: usize = input.trim().parse().ok()?;
    Position::from_number(number).filter(|pos| open.contains(pos))
}

fn parse_first_player(input: &str) -> Option<FirstPlayerChoice> {
    match input.trim() {
        "1" => Some(FirstPlayerChoice::Player),
        "2" => Some(FirstPlayerChoice::Computer),
        "3" => Some(FirstPlayerChoice::Random),
        _ => None,
    }
}

fn parse_yes(input: &str) -> bool {
    input.trim().to_lowercase().starts_with('y')
}

impl View for Console {
    fn render(&mut self, board: &Board) -> Result<()> {
        if !self.plain {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }

        println!();
        println!("You're {PLAYER_MARK}. Computer is {COMPUTER_MARK}.");
        let positions: Vec<Position> = Position::iter().collect();
        for (row, squares) in positions.chunks(3).enumerate() {
            println!("     |     |");
            println!(
                "  {}  |  {}  |  {}",
                mark(board.get(squares[0])),
                mark(board.get(squares[1])),
                mark(board.get(squares[2])),
            );
            println!("     |     |");
            if row < 2 {
                println!("-----+-----+-----");
            }
        }
        println!();
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        println!("==> {message}");
        Ok(())
    }
}

impl PlayerInput for Console {
    fn request_move(&mut self, open: &[Position]) -> Result<Position> {
        loop {
            self.announce(&format!("Choose a square ({}):", join_or(open)))?;
            let line = self.read_line()?;
            if let Some(pos) = parse_square(&line, open) {
                return Ok(pos);
            }
            self.announce("Sorry, that's not a valid choice.")?;
        }
    }

    fn choose_first_player(&mut self) -> Result<FirstPlayerChoice> {
        loop {
            self.announce("Who should go first? (1 / 2 / 3)")?;
            self.announce("1) Player")?;
            self.announce("2) Computer")?;
            self.announce("3) Random")?;
            let line = self.read_line()?;
            if let Some(choice) = parse_first_player(&line) {
                return Ok(choice);
            }
            self.announce("Invalid choice. Type 1, 2, or 3.")?;
        }
    }

    fn continue_playing(&mut self) -> Result<bool> {
        self.announce("Continue playing? (y/n)")?;
        Ok(parse_yes(&self.read_line()?))
    }
}
