// main.rs
mod cmd;
mod config;
mod handlers;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use crate::cmd::cli::{get_log_level, ClientCliArgs, Command};
use crate::config::ClientConfig;
use crate::handlers::{DecodeHandler, EncodeHandler, Handler};

fn main() {
    // Parse command line arguments
    let args = ClientCliArgs::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: ClientCliArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ClientConfig::load_default().context("Failed to load configuration")?,
    };

    // Initialize logging, command line level first
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(config.output.log_level.as_str());
    tracing_subscriber::fmt()
        .with_max_level(get_log_level(log_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration loaded");

    let output = match args.command {
        Command::Encode {
            constructor,
            enum_id,
            bare,
        } => EncodeHandler::new(&config, &constructor, enum_id.as_deref(), bare)?.handle()?,
        Command::Decode { hex, bare } => {
            let format = args.format.unwrap_or(config.output.format);
            DecodeHandler::new(&hex, bare, format)?.handle()?
        }
    };

    println!("{}", output);
    Ok(())
}
