//! CLI module for Faktum.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Faktum - A2A Animal Facts Agent
///
/// Serves a conversational animal-facts agent over the A2A JSON-RPC protocol.
/// The name "Faktum" comes from the Norwegian/Scandinavian word for "fact."
#[derive(Parser, Debug)]
#[command(name = "faktum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the A2A HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch a single animal fact directly from the fact provider
    Fact {
        /// Fact category (cat, dog, random)
        #[arg(default_value = "random")]
        category: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default configuration file if none exists
    Init,

    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
