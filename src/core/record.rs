//! Configuration records - the flat field sets each generator consumes

use crate::template::Template;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for record collection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown field '{field}' for the {variant} generator")]
    UnknownField { variant: Variant, field: String },

    #[error("Field '{field}' must be a plain value, not a list or mapping")]
    NotScalar { field: String },

    #[error("Values must be a mapping of field names to values")]
    NotMapping,

    #[error("Invalid field override: {0}")]
    InvalidOverride(String),
}

/// Which generator a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Single-environment build, push and deploy
    Simple,
    /// Dual-environment blue/green deployment
    BlueGreen,
}

impl Variant {
    /// Display name of the generator
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Simple => "Simple Deploy",
            Variant::BlueGreen => "Blue/Green Deploy",
        }
    }

    /// Field specs of the variant, in template order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Variant::Simple => crate::core::SimpleDeployRecord::FIELDS,
            Variant::BlueGreen => crate::core::BlueGreenRecord::FIELDS,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key used in values files and template placeholders
    pub name: &'static str,

    /// Short human-readable label
    pub label: &'static str,

    /// What the value is used for in the generated pipeline
    pub description: &'static str,
}

/// A fixed set of named string fields driving one render
///
/// Every field exists on every record; an absent value is the empty string.
/// Values are opaque text and are never validated.
pub trait ConfigRecord: Default + Clone + Serialize {
    /// The generator this record feeds
    const VARIANT: Variant;

    /// Field specs in template order
    const FIELDS: &'static [FieldSpec];

    /// Look up a field value by name
    fn field(&self, name: &str) -> Option<&str>;

    /// Mutable access to a field by name
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// The built-in template for this record
    fn builtin_template() -> &'static Template;

    /// Set a field by name
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), RecordError> {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(RecordError::UnknownField {
                variant: Self::VARIANT,
                field: name.to_string(),
            }),
        }
    }

    /// Whether `name` is one of this record's fields
    fn has_field(name: &str) -> bool {
        Self::FIELDS.iter().any(|spec| spec.name == name)
    }
}
