//! Input collection - values files and command-line overrides into a record

use crate::core::record::{ConfigRecord, RecordError};
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Builds a record from a values document and `key=value` overrides
///
/// Later sources win: values file first, then overrides in the order given.
#[derive(Debug, Clone)]
pub struct InputCollector<R> {
    record: R,
}

impl<R: ConfigRecord> InputCollector<R> {
    /// Start from a record with every field empty
    pub fn new() -> Self {
        Self {
            record: R::default(),
        }
    }

    /// Load field values from a YAML (or JSON) file
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read values file {}", path.display()))?;
        self.with_yaml(&content)
            .with_context(|| format!("Invalid values file {}", path.display()))
    }

    /// Load field values from a YAML string
    pub fn with_yaml(mut self, yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(self);
        }
        let document: Value = serde_yaml::from_str(yaml)?;
        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            // An empty document leaves every field empty
            Value::Null => return Ok(self),
            _ => return Err(RecordError::NotMapping.into()),
        };

        let mut names = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = key_name(key)?;
            ensure_scalar(&name, &value)?;
            names.push(name);
        }

        // Re-read with every scalar as written, so `80.50` stays `80.50`
        let mut written: HashMap<String, Option<String>> = serde_yaml::from_str(yaml)?;
        for name in names {
            let text = written.remove(&name).flatten().unwrap_or_default();
            debug!("Collected {} from values file", name);
            self.record.set_field(&name, text)?;
        }

        Ok(self)
    }

    /// Apply a single override
    pub fn with_override(mut self, name: &str, value: &str) -> Result<Self, RecordError> {
        self.record.set_field(name, value)?;
        Ok(self)
    }

    /// Apply overrides in order
    pub fn with_overrides<'a, I>(self, overrides: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        overrides
            .into_iter()
            .try_fold(self, |collector, (name, value)| collector.with_override(name, value))
    }

    /// Finish collection
    pub fn finish(self) -> R {
        self.record
    }
}

impl<R: ConfigRecord> Default for InputCollector<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Field name of a mapping key
fn key_name(key: Value) -> Result<String, RecordError> {
    match key {
        Value::String(name) => Ok(name),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => key_name(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => Err(RecordError::NotScalar {
            field: "<key>".to_string(),
        }),
    }
}

/// Field values must be scalars or `null`
fn ensure_scalar(field: &str, value: &Value) -> Result<(), RecordError> {
    match value {
        Value::Tagged(tagged) => ensure_scalar(field, &tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(RecordError::NotScalar {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(RecordError::InvalidOverride(s.to_string()).to_string()),
    }
}
