use prost::Message;
use tracing::{debug, warn};

use crate::error::{BindingError, BindingResult};
use crate::proto::v1::{self, value::Sum};
use crate::types::enum_value::EnumValue;

/// Any ledger-visible value carried by the wire envelope.
///
/// Records, variants, maps and optionals are handled elsewhere and do not
/// appear here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Unit,
    Bool(bool),
    Int64(i64),
    /// Decimal number kept in its textual wire form
    Numeric(String),
    Text(String),
    Party(String),
    ContractId(String),
    /// Days since the unix epoch
    Date(i32),
    /// Microseconds since the unix epoch
    Timestamp(i64),
    List(Vec<Value>),
    Enum(EnumValue),
}

impl Value {
    /// Converts a decoded envelope, failing when no value kind is set
    pub fn from_proto(message: v1::Value) -> BindingResult<Self> {
        let sum = match message.sum {
            Some(sum) => sum,
            None => {
                warn!("Ledger value envelope carries no value kind");
                return Err(BindingError::MissingField("sum"));
            }
        };

        let value = match sum {
            Sum::Unit(_) => Self::Unit,
            Sum::Bool(b) => Self::Bool(b),
            Sum::Int64(i) => Self::Int64(i),
            Sum::Numeric(n) => Self::Numeric(n),
            Sum::Text(t) => Self::Text(t),
            Sum::Party(p) => Self::Party(p),
            Sum::ContractId(c) => Self::ContractId(c),
            Sum::Date(d) => Self::Date(d),
            Sum::Timestamp(t) => Self::Timestamp(t),
            Sum::List(list) => Self::List(
                list.elements
                    .into_iter()
                    .map(Self::from_proto)
                    .collect::<BindingResult<Vec<_>>>()?,
            ),
            Sum::Enum(e) => Self::Enum(EnumValue::from_proto(&e)),
        };

        Ok(value)
    }

    pub fn to_proto(&self) -> v1::Value {
        let sum = match self {
            Self::Unit => Sum::Unit(v1::Empty {}),
            Self::Bool(b) => Sum::Bool(*b),
            Self::Int64(i) => Sum::Int64(*i),
            Self::Numeric(n) => Sum::Numeric(n.clone()),
            Self::Text(t) => Sum::Text(t.clone()),
            Self::Party(p) => Sum::Party(p.clone()),
            Self::ContractId(c) => Sum::ContractId(c.clone()),
            Self::Date(d) => Sum::Date(*d),
            Self::Timestamp(t) => Sum::Timestamp(*t),
            Self::List(elements) => Sum::List(v1::List {
                elements: elements.iter().map(Self::to_proto).collect(),
            }),
            Self::Enum(e) => return e.to_value_proto(),
        };

        v1::Value { sum: Some(sum) }
    }

    /// Decodes an encoded envelope
    pub fn decode(bytes: &[u8]) -> BindingResult<Self> {
        let message = v1::Value::decode(bytes)?;
        debug!(length = bytes.len(), "Decoded ledger value envelope");
        Self::from_proto(message)
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}
