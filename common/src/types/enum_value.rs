use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BindingError, BindingResult};
use crate::proto::v1;
use crate::types::identifier::Identifier;

/// A ledger enum value: the name of the selected constructor, optionally
/// tagged with the identifier of the enum type that defines it.
///
/// The type tag is frequently left off the wire once the type is known from
/// context, so `enum_id` is a real `Option` rather than an empty identifier.
/// Values are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EnumValueRepr")]
pub struct EnumValue {
    enum_id: Option<Identifier>,
    constructor: String,
}

/// Unchecked serde form, validated on the way into `EnumValue`
#[derive(Deserialize)]
struct EnumValueRepr {
    #[serde(default)]
    enum_id: Option<Identifier>,
    constructor: String,
}

impl TryFrom<EnumValueRepr> for EnumValue {
    type Error = BindingError;

    fn try_from(repr: EnumValueRepr) -> Result<Self, Self::Error> {
        Self::build(repr.enum_id, repr.constructor)
    }
}

impl EnumValue {
    /// Creates an enum value tagged with the type that defines it.
    /// Fails if the constructor label is empty.
    pub fn new(enum_id: Identifier, constructor: impl Into<String>) -> BindingResult<Self> {
        Self::build(Some(enum_id), constructor.into())
    }

    /// Creates an enum value without a type tag
    pub fn untyped(constructor: impl Into<String>) -> BindingResult<Self> {
        Self::build(None, constructor.into())
    }

    fn build(enum_id: Option<Identifier>, constructor: String) -> BindingResult<Self> {
        if constructor.is_empty() {
            return Err(BindingError::EmptyConstructor);
        }

        Ok(Self {
            enum_id,
            constructor,
        })
    }

    /// Case labels declared through `ledger_enum!` are identifiers and never empty
    pub(crate) fn from_case(enum_id: Option<Identifier>, constructor: &'static str) -> Self {
        Self {
            enum_id,
            constructor: constructor.to_string(),
        }
    }

    pub fn enum_id(&self) -> Option<&Identifier> {
        self.enum_id.as_ref()
    }

    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// Builds the value from its wire message. The identifier is only
    /// decoded when the message carries one.
    pub fn from_proto(message: &v1::Enum) -> Self {
        Self {
            enum_id: message.enum_id.as_ref().map(Identifier::from_proto),
            constructor: message.constructor.clone(),
        }
    }

    pub fn to_proto(&self) -> v1::Enum {
        v1::Enum {
            enum_id: self.enum_id.as_ref().map(Identifier::to_proto),
            constructor: self.constructor.clone(),
        }
    }

    /// Wraps the enum message in the generic ledger value envelope
    pub fn to_value_proto(&self) -> v1::Value {
        v1::Value {
            sum: Some(v1::value::Sum::Enum(self.to_proto())),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.enum_id {
            Some(id) => write!(f, "Enum{{enumId={}, constructor='{}'}}", id, self.constructor),
            None => write!(f, "Enum{{enumId=<none>, constructor='{}'}}", self.constructor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn color_id() -> Identifier {
        Identifier::new("e3b0c442", "Tests.EnumTest", "Color")
    }

    fn hash_of(value: &EnumValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_constructor_fails_fast() {
        assert_eq!(EnumValue::untyped(""), Err(BindingError::EmptyConstructor));
        assert_eq!(
            EnumValue::new(color_id(), String::new()),
            Err(BindingError::EmptyConstructor)
        );
    }

    #[test]
    fn test_from_proto_without_id() {
        let message = v1::Enum {
            enum_id: None,
            constructor: "Red".into(),
        };

        let value = EnumValue::from_proto(&message);
        assert_eq!(value.enum_id(), None);
        assert_eq!(value.constructor(), "Red");
        assert_eq!(value, EnumValue::untyped("Red").unwrap());
    }

    #[test]
    fn test_to_proto_carries_exactly_the_identifier() {
        let typed = EnumValue::new(color_id(), "Green").unwrap();
        assert_eq!(typed.to_proto().enum_id, Some(color_id().to_proto()));

        let untyped = EnumValue::untyped("Green").unwrap();
        assert_eq!(untyped.to_proto().enum_id, None);
    }

    #[test]
    fn test_value_envelope_wraps_enum_message() {
        let value = EnumValue::new(color_id(), "Blue").unwrap();
        match value.to_value_proto().sum {
            Some(v1::value::Sum::Enum(message)) => assert_eq!(message, value.to_proto()),
            other => panic!("expected enum envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_and_untyped_are_distinct() {
        let typed = EnumValue::new(color_id(), "Red").unwrap();
        let untyped = EnumValue::untyped("Red").unwrap();
        assert_ne!(typed, untyped);
    }

    #[test]
    fn test_display_shows_both_fields() {
        let typed = EnumValue::new(color_id(), "Red").unwrap();
        assert_eq!(
            typed.to_string(),
            "Enum{enumId=e3b0c442:Tests.EnumTest:Color, constructor='Red'}"
        );

        let untyped = EnumValue::untyped("Red").unwrap();
        assert_eq!(untyped.to_string(), "Enum{enumId=<none>, constructor='Red'}");
    }

    #[test]
    fn test_serde_rejects_empty_constructor() {
        let parsed: Result<EnumValue, _> = serde_json::from_str(r#"{"constructor":""}"#);
        assert!(parsed.is_err());

        let parsed: EnumValue = serde_json::from_str(r#"{"constructor":"Red"}"#).unwrap();
        assert_eq!(parsed, EnumValue::untyped("Red").unwrap());
    }

    fn arb_identifier() -> impl Strategy<Value = Identifier> {
        ("[a-f0-9]{8,64}", "[A-Z][a-z]{0,8}(\\.[A-Z][a-z]{0,8}){0,2}", "[A-Z][A-Za-z]{0,12}")
            .prop_map(|(package, module, entity)| Identifier::new(package, module, entity))
    }

    fn arb_enum_value() -> impl Strategy<Value = EnumValue> {
        (proptest::option::of(arb_identifier()), "[A-Z][A-Za-z0-9_]{0,15}").prop_map(
            |(enum_id, constructor)| match enum_id {
                Some(id) => EnumValue::new(id, constructor).unwrap(),
                None => EnumValue::untyped(constructor).unwrap(),
            },
        )
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_bytes(value in arb_enum_value()) {
            let bytes = value.to_proto().encode_to_vec();
            let decoded = v1::Enum::decode(bytes.as_slice()).unwrap();
            prop_assert_eq!(EnumValue::from_proto(&decoded), value);
        }

        #[test]
        fn prop_presence_matches_wire(value in arb_enum_value()) {
            let message = value.to_proto();
            prop_assert_eq!(message.enum_id.is_some(), value.enum_id().is_some());
            prop_assert_eq!(message.constructor.as_str(), value.constructor());
        }

        #[test]
        fn prop_equal_values_hash_equally(value in arb_enum_value()) {
            let copy = EnumValue::from_proto(&value.to_proto());
            prop_assert_eq!(&copy, &value);
            prop_assert_eq!(hash_of(&copy), hash_of(&value));
        }
    }
}
