/// Wire messages of the ledger API value schema.
///
/// Field tags follow `com/daml/ledger/api/v1/value.proto`; only the value
/// kinds modelled by [`crate::types::value::Value`] are declared, so unknown
/// kinds decode to a `Value` with no `sum` set.
pub mod v1 {
    use prost::{Message, Oneof};

    /// Fully qualified reference to a type definition.
    #[derive(Clone, PartialEq, Eq, Message)]
    pub struct Identifier {
        #[prost(string, tag = "1")]
        pub package_id: String,
        #[prost(string, tag = "3")]
        pub module_name: String,
        #[prost(string, tag = "4")]
        pub entity_name: String,
    }

    /// A value of a ledger enum type.
    #[derive(Clone, PartialEq, Eq, Message)]
    pub struct Enum {
        #[prost(message, optional, tag = "1")]
        pub enum_id: Option<Identifier>,
        #[prost(string, tag = "2")]
        pub constructor: String,
    }

    #[derive(Clone, PartialEq, Eq, Message)]
    pub struct Empty {}

    #[derive(Clone, PartialEq, Eq, Message)]
    pub struct List {
        #[prost(message, repeated, tag = "1")]
        pub elements: Vec<Value>,
    }

    /// Envelope carrying any ledger value.
    #[derive(Clone, PartialEq, Eq, Message)]
    pub struct Value {
        #[prost(oneof = "value::Sum", tags = "3, 4, 5, 6, 8, 9, 11, 12, 13, 14, 17")]
        pub sum: Option<value::Sum>,
    }

    /// Nested message and enum types in `Value`.
    pub mod value {
        use super::Oneof;

        #[derive(Clone, PartialEq, Eq, Oneof)]
        pub enum Sum {
            #[prost(string, tag = "3")]
            ContractId(String),
            #[prost(message, tag = "4")]
            List(super::List),
            #[prost(sint64, tag = "5")]
            Int64(i64),
            #[prost(string, tag = "6")]
            Numeric(String),
            #[prost(string, tag = "8")]
            Text(String),
            /// Microseconds since the unix epoch
            #[prost(sfixed64, tag = "9")]
            Timestamp(i64),
            #[prost(string, tag = "11")]
            Party(String),
            #[prost(bool, tag = "12")]
            Bool(bool),
            #[prost(message, tag = "13")]
            Unit(super::Empty),
            /// Days since the unix epoch
            #[prost(int32, tag = "14")]
            Date(i32),
            #[prost(message, tag = "17")]
            Enum(super::Enum),
        }
    }
}
