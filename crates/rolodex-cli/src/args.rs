use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Browse and search a batch of user profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml [default: $ROLODEX_PATH or the XDG config dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Read the batch from a saved API response instead of the network
    #[arg(long, global = true)]
    pub source_file: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file (the browser discards logs otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive gallery (default)")]
    Browse,

    #[command(about = "Print the gallery, optionally filtered by name")]
    List {
        #[arg(long, short)]
        query: Option<String>,
    },

    #[command(about = "Print the detail view for one card of the gallery")]
    Show {
        /// Card index within the (filtered) gallery
        index: usize,

        #[arg(long, short)]
        query: Option<String>,
    },

    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,
}
