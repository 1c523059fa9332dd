//! CLI argument structures

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Read-only REST backend for the pizza catalog
#[derive(Parser)]
#[command(name = "pizza-catalog")]
#[command(about = "Serve the pizza catalog API or export its tables to JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    #[command(name = "serve")]
    Serve {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Storage backend, overrides the config file
        #[arg(long, value_enum)]
        backend: Option<Backend>,

        /// SQLite database file (sqlite backend)
        #[arg(long)]
        database: Option<PathBuf>,

        /// Snapshot directory (json backend)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Port to listen on, overrides config and PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Dump every table of a SQLite database to JSON files
    #[command(name = "export")]
    Export {
        /// SQLite database file to read
        #[arg(long, default_value = "./pizza.sqlite")]
        database: PathBuf,

        /// Output directory for the JSON files
        #[arg(short, long, default_value = "./data")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Sqlite,
    Json,
}
