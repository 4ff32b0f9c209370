use ledger_common::proto::v1;
use ledger_common::{ledger_enum, BindingError, EnumValue, LedgerEnum, Value};
use prost::Message;

ledger_enum! {
    /// Mirrors `data Color = Red | Green | Blue` from `Tests.EnumTest`
    pub enum Color = "6f1c3b0e" : "Tests.EnumTest" : "Color" {
        Red,
        Green,
        Blue,
    }
}

#[test]
fn test_enum_round_trip() {
    let message = v1::Enum {
        enum_id: None,
        constructor: "Red".to_string(),
    };

    let an_enum = EnumValue::from_proto(&message);
    let from_value = Color::from_value(&an_enum).unwrap();
    let from_constructor = Color::Red;
    let from_round_trip = Color::from_value(&from_constructor.to_value()).unwrap();

    assert_eq!(from_value, from_constructor);
    assert_eq!(from_constructor.to_value(), an_enum);
    assert_eq!(from_constructor, from_round_trip);
}

#[test]
fn test_every_case_survives_the_value_envelope() {
    for case in Color::CASES {
        let bytes = case.to_typed_value().to_value_proto().encode_to_vec();
        let value = Value::decode(&bytes).unwrap();
        let decoded = value.as_enum().expect("enum envelope");

        assert_eq!(decoded.enum_id(), Some(&Color::enum_id()));
        assert_eq!(Color::try_from(decoded), Ok(*case));
    }
}

#[test]
fn test_enum_from_a_different_type_is_rejected() {
    let shape_id = ledger_common::Identifier::new("6f1c3b0e", "Tests.EnumTest", "Shape");
    let value = EnumValue::new(shape_id, "Red").unwrap();

    assert!(matches!(
        Color::from_value(&value),
        Err(BindingError::IdentifierMismatch { .. })
    ));
}

#[test]
fn test_enum_value_json_shape() {
    let json = serde_json::to_value(Color::Blue.to_typed_value()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "enum_id": {
                "package_id": "6f1c3b0e",
                "module_name": "Tests.EnumTest",
                "entity_name": "Color"
            },
            "constructor": "Blue"
        })
    );

    let parsed: EnumValue = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, Color::Blue.to_typed_value());
}
