use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BindingError, BindingResult};
use crate::proto::v1;

/// Fully qualified reference to a type definition on the ledger:
/// the package that defines it, the module path and the entity name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    /// Hash of the package containing the definition
    pub package_id: String,

    /// Dot separated module path, e.g. `Tests.EnumTest`
    pub module_name: String,

    /// Name of the type inside the module
    pub entity_name: String,
}

impl Identifier {
    pub fn new(
        package_id: impl Into<String>,
        module_name: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            module_name: module_name.into(),
            entity_name: entity_name.into(),
        }
    }

    /// Checks that every component of the identifier is present
    pub fn validate(&self) -> BindingResult<()> {
        if self.package_id.is_empty() {
            return Err(BindingError::InvalidIdentifier(
                "Package ID cannot be empty".into(),
            ));
        }

        if self.module_name.is_empty() {
            return Err(BindingError::InvalidIdentifier(
                "Module name cannot be empty".into(),
            ));
        }

        if self.entity_name.is_empty() {
            return Err(BindingError::InvalidIdentifier(
                "Entity name cannot be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn from_proto(identifier: &v1::Identifier) -> Self {
        Self {
            package_id: identifier.package_id.clone(),
            module_name: identifier.module_name.clone(),
            entity_name: identifier.entity_name.clone(),
        }
    }

    pub fn to_proto(&self) -> v1::Identifier {
        v1::Identifier {
            package_id: self.package_id.clone(),
            module_name: self.module_name.clone(),
            entity_name: self.entity_name.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.package_id, self.module_name, self.entity_name
        )
    }
}

impl FromStr for Identifier {
    type Err = BindingError;

    /// Parses the `package:Module.Path:Entity` form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(BindingError::InvalidIdentifier(format!(
                "expected package:module:entity, got '{}'",
                s
            )));
        }

        let identifier = Self::new(parts[0], parts[1], parts[2]);
        identifier.validate()?;
        Ok(identifier)
    }
}
