//! battlemenu TUI — interactive battle command menu previewer.
//!
//! Shows every actor's resolved command menu side by side with the actor
//! list, with live level and inventory toggles, built with `ratatui` +
//! `crossterm`.

mod app;
mod widgets;

use std::path::PathBuf;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let data_dir = std::env::args().nth(1).map(PathBuf::from);
    app::run(data_dir)
}
