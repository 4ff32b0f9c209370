use tracing::warn;

use crate::error::{BindingError, BindingResult};
use crate::types::enum_value::EnumValue;
use crate::types::identifier::Identifier;

/// Conversion between a strongly typed enum and the generic [`EnumValue`].
///
/// Implemented by the types declared through [`ledger_enum!`](crate::ledger_enum),
/// one per enum defined on the ledger.
pub trait LedgerEnum: Sized + Copy + 'static {
    /// Every case, in declaration order
    const CASES: &'static [Self];

    /// Identifier of the ledger type this enum mirrors
    fn enum_id() -> Identifier;

    /// Constructor label of this case as it appears on the wire
    fn constructor(&self) -> &'static str;

    /// Converts to the compact wire form, without a type tag
    fn to_value(&self) -> EnumValue {
        EnumValue::from_case(None, self.constructor())
    }

    /// Converts to a value tagged with [`LedgerEnum::enum_id`]
    fn to_typed_value(&self) -> EnumValue {
        EnumValue::from_case(Some(Self::enum_id()), self.constructor())
    }

    /// Resolves a generic enum value to one of the cases.
    ///
    /// An absent identifier is accepted since the caller already knows the
    /// type; a present one must match.
    fn from_value(value: &EnumValue) -> BindingResult<Self> {
        let expected = Self::enum_id();
        if let Some(actual) = value.enum_id() {
            if *actual != expected {
                warn!(%expected, %actual, "Enum identifier mismatch");
                return Err(BindingError::IdentifierMismatch {
                    expected,
                    actual: actual.clone(),
                });
            }
        }

        Self::CASES
            .iter()
            .copied()
            .find(|case| case.constructor() == value.constructor())
            .ok_or_else(|| BindingError::UnknownConstructor {
                enum_name: expected.entity_name,
                constructor: value.constructor().to_string(),
            })
    }
}

/// Declares a Rust enum mirroring a ledger enum type and implements
/// [`LedgerEnum`](crate::types::ledger_enum::LedgerEnum) for it.
///
/// ```
/// ledger_common::ledger_enum! {
///     /// Colors defined in `Tests.EnumTest`
///     pub enum Color = "e3b0c442" : "Tests.EnumTest" : "Color" {
///         Red,
///         Green,
///         Blue,
///     }
/// }
///
/// use ledger_common::LedgerEnum;
/// assert_eq!(Color::Green.to_value().constructor(), "Green");
/// ```
#[macro_export]
macro_rules! ledger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $package:literal : $module:literal : $entity:literal {
            $($case:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($case),+
        }

        impl $crate::types::ledger_enum::LedgerEnum for $name {
            const CASES: &'static [Self] = &[$(Self::$case),+];

            fn enum_id() -> $crate::types::identifier::Identifier {
                $crate::types::identifier::Identifier::new($package, $module, $entity)
            }

            fn constructor(&self) -> &'static str {
                match self {
                    $(Self::$case => stringify!($case)),+
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::types::enum_value::EnumValue {
            fn from(case: $name) -> Self {
                $crate::types::ledger_enum::LedgerEnum::to_value(&case)
            }
        }

        impl ::core::convert::TryFrom<&$crate::types::enum_value::EnumValue> for $name {
            type Error = $crate::error::BindingError;

            fn try_from(
                value: &$crate::types::enum_value::EnumValue,
            ) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::types::ledger_enum::LedgerEnum>::from_value(value)
            }
        }
    };
}
