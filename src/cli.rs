//! Command-line interface.

use clap::Parser;

/// Terminal tic-tac-toe against a heuristic computer opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe to three round wins against the computer")]
#[command(version)]
pub struct Cli {
    /// Print turns sequentially instead of clearing the screen.
    #[arg(long)]
    pub plain: bool,
}
