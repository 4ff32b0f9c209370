use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{OutputFormat, LOG_LEVELS};

#[derive(Parser, Debug)]
#[command(
    name = "ledger-values",
    version,
    about = "Encode and decode ledger API enum values"
)]
pub struct ClientCliArgs {
    /// Configuration file, overriding the default lookup
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configured one
    #[arg(
        short,
        long,
        global = true,
        help = "Set the logging level",
        value_parser = LOG_LEVELS
    )]
    pub log_level: Option<String>,

    /// Output format for decoded values
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode an enum value and print it as hex
    Encode {
        /// Constructor label, e.g. Red
        #[arg(short, long)]
        constructor: String,

        /// Enum type as package:Module:Entity, Module:Entity or Entity
        #[arg(short, long)]
        enum_id: Option<String>,

        /// Emit the bare enum message instead of the value envelope
        #[arg(long)]
        bare: bool,
    },

    /// Decode a hex encoded enum value
    Decode {
        /// Hex encoded message
        hex: String,

        /// Input is a bare enum message rather than a value envelope
        #[arg(long)]
        bare: bool,
    },
}

/// Maps a validated level name onto a tracing level
pub fn get_log_level(level: &str) -> tracing::Level {
    match level {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}
