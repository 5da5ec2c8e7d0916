use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod handler;
pub mod output;

/// fileman - read, rewrite and total a comma-separated data file
#[derive(Parser, Debug)]
#[command(name = "fileman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of searching for one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data file to operate on (overrides data.path from the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable verbose console logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute; without one the demo sequence runs
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every row of the data file
    Read {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the data file with the given rows
    Write {
        /// Rows as comma-separated lines, e.g. "a,1,2.5"
        #[arg(required = true, value_name = "ROW")]
        rows: Vec<String>,
    },

    /// Append the running total of the file plus a number
    Append {
        /// The number to add
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Create the data file from the configured seed rows
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
}
