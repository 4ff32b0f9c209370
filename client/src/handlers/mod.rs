// Basic trait that all handlers must implement
use ledger_common::BindingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Each subcommand is served by a handler that renders its output
pub trait Handler {
    fn handle(&self) -> HandlerResult<String>;
}

/// Errors raised while serving a subcommand
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decoded value is not an enum")]
    NotAnEnum,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HandlerResult<T> = Result<T, HandlerError>;

// Declare the submodules
pub mod decode;
pub mod encode;

// Re-export the handlers from submodules for easier access
pub use decode::DecodeHandler;
pub use encode::EncodeHandler;
