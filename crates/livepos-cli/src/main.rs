//! Livepos CLI - an order-entry ledger for live-streamed sales sessions.
//!
//! `livepos live` runs the interactive session loop; the remaining
//! subcommands inspect saved session files without touching them.

mod app;
mod cli;
mod commands;
mod config;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Commands::Live { resume } => commands::live::handle_live(&ctx, resume.as_deref()),
        Commands::Files { json } => commands::sessions::handle_files(&ctx, *json),
        Commands::Show { name, json, format } => {
            commands::sessions::handle_show(&ctx, name, *json, format.as_deref())
        }
        Commands::Summary { name, json, format } => {
            commands::sessions::handle_summary(&ctx, name, *json, format.as_deref())
        }
        Commands::Export { name } => commands::sessions::handle_export(&ctx, name),
    }
}
