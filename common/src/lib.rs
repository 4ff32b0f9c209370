//! Typed bindings for values exchanged with the ledger API.

// Wire messages and the value types built on them
pub mod error;
pub mod proto;
pub mod types;

// Re-export commonly used types
pub use error::{BindingError, BindingResult};
pub use types::enum_value::EnumValue;
pub use types::identifier::Identifier;
pub use types::ledger_enum::LedgerEnum;
pub use types::value::Value;
