//! Command-line definitions for the `livepos` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use livepos_core::VERSION;

/// Livepos - an order-entry ledger for live-streamed sales sessions
#[derive(Parser)]
#[command(name = "livepos")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding session CSV files
    #[arg(long, global = true, env = "LIVEPOS_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive live session
    Live {
        /// Load a saved session before the loop starts
        #[arg(long, value_name = "NAME")]
        resume: Option<String>,
    },

    /// List saved session files, most recent first
    Files {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the order list from a saved session
    Show {
        /// Session name (without .csv)
        #[arg(value_name = "NAME")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format (table, plain)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Show totals, counts, and the size pivot for a saved session
    Summary {
        /// Session name (without .csv)
        #[arg(value_name = "NAME")]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format (table, plain)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Export a saved session's records as JSON
    Export {
        /// Session name (without .csv)
        #[arg(value_name = "NAME")]
        name: String,
    },
}
