use ledger_common::proto::v1;
use ledger_common::{EnumValue, Value};
use prost::Message;
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::handlers::{Handler, HandlerError, HandlerResult};

/// Decodes a hex encoded enum value and renders it
pub struct DecodeHandler {
    bytes: Vec<u8>,
    bare: bool,
    format: OutputFormat,
}

impl DecodeHandler {
    pub fn new(input: &str, bare: bool, format: OutputFormat) -> HandlerResult<Self> {
        let bytes = hex::decode(input.trim())?;
        Ok(Self {
            bytes,
            bare,
            format,
        })
    }

    fn decode(&self) -> HandlerResult<EnumValue> {
        if self.bare {
            let message =
                v1::Enum::decode(self.bytes.as_slice()).map_err(ledger_common::BindingError::from)?;
            return Ok(EnumValue::from_proto(&message));
        }

        match Value::decode(&self.bytes)? {
            Value::Enum(value) => Ok(value),
            other => {
                warn!(value = ?other, "Decoded value is not an enum");
                Err(HandlerError::NotAnEnum)
            }
        }
    }
}

impl Handler for DecodeHandler {
    fn handle(&self) -> HandlerResult<String> {
        let value = self.decode()?;
        info!(length = self.bytes.len(), "Decoded enum value");

        match self.format {
            OutputFormat::Text => Ok(value.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&value)?),
        }
    }
}
