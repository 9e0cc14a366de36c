//! flagfetch binary entry point.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => commands::handle_render(&args),
        Command::Presets { json } => commands::handle_presets(json),
        Command::Completions { shell } => commands::handle_completions(shell),
    }
}
