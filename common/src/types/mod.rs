pub mod enum_value;
pub mod identifier;
pub mod ledger_enum;
pub mod value;
