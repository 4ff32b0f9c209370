use ledger_common::{EnumValue, Value};
use prost::Message;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::handlers::{Handler, HandlerResult};

/// Encodes an enum value given on the command line
pub struct EncodeHandler {
    value: EnumValue,
    bare: bool,
}

impl EncodeHandler {
    pub fn new(
        config: &ClientConfig,
        constructor: &str,
        enum_id: Option<&str>,
        bare: bool,
    ) -> HandlerResult<Self> {
        let value = match enum_id {
            Some(raw) => {
                let id = config.resolve_enum_id(raw)?;
                debug!(enum_id = %id, "Resolved enum identifier");
                EnumValue::new(id, constructor)?
            }
            None => EnumValue::untyped(constructor)?,
        };

        Ok(Self { value, bare })
    }
}

impl Handler for EncodeHandler {
    fn handle(&self) -> HandlerResult<String> {
        let bytes = if self.bare {
            self.value.to_proto().encode_to_vec()
        } else {
            Value::Enum(self.value.clone()).encode_to_vec()
        };

        info!(value = %self.value, length = bytes.len(), "Encoded enum value");
        Ok(hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerError;
    use ledger_common::BindingError;

    #[test]
    fn test_encode_bare_untyped() {
        let handler = EncodeHandler::new(&ClientConfig::default(), "Red", None, true).unwrap();
        assert_eq!(handler.handle().unwrap(), "1203526564");
    }

    #[test]
    fn test_encode_envelope_untyped() {
        let handler = EncodeHandler::new(&ClientConfig::default(), "Red", None, false).unwrap();
        assert_eq!(handler.handle().unwrap(), "8a01051203526564");
    }

    #[test]
    fn test_encode_rejects_empty_constructor() {
        let result = EncodeHandler::new(&ClientConfig::default(), "", None, false);
        assert!(matches!(
            result,
            Err(HandlerError::Binding(BindingError::EmptyConstructor))
        ));
    }

    #[test]
    fn test_encode_needs_defaults_for_short_ids() {
        let result = EncodeHandler::new(&ClientConfig::default(), "Red", Some("Color"), false);
        assert!(matches!(result, Err(HandlerError::Config(_))));
    }
}
