//! Binary entry point: wires the console to the match controller.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Console, MatchController};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the board display.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let controller = MatchController::new(
        Box::new(Console::new(cli.plain)),
        Box::new(Console::new(cli.plain)),
        rand::rng(),
    );
    controller.run()?;

    Ok(())
}
