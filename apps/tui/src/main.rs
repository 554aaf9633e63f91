//! CareerDocs TUI — interactive form for the résumé and cover-letter generator.
//!
//! Presents every profile field plus the output folder, built with
//! `ratatui` + `crossterm`.

mod app;
mod screens;
mod widgets;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    app::run()
}
