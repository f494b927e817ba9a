//! battlemenu CLI — battle command menu previewer and notetag checker.
//!
//! Loads RPG Maker MV-style data files and resolves each actor's battle
//! command menu from `<Battle Commands>` note blocks.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
