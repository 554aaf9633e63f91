//! CareerDocs CLI — generate a résumé and cover letter from an applicant profile.
//!
//! Reads a profile file and/or per-field flags and writes both documents into a
//! timestamped folder.

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
