//! Pipeline template rendering
//!
//! Templates are parsed once into an ordered list of segments and rendered by
//! concatenating segment values. Record values are inserted exactly once and
//! never re-scanned, so pipeline references (`${...}`) survive untouched no
//! matter what the record contains.

pub mod document;
pub mod parser;
pub mod segment;

pub use document::RenderedDocument;
pub use segment::{target_var, Segment};

use crate::core::{ConfigRecord, Variant};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for template loading
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{template}' line {line}: unknown field '{field}' for the {variant} generator")]
    UnknownField {
        template: String,
        field: String,
        line: usize,
        variant: Variant,
    },

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed pipeline template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source
    ///
    /// Parsing never fails; use [`Template::check`] to make sure every field
    /// placeholder belongs to a record type.
    pub fn parse(name: impl Into<String>, source: &str) -> Self {
        Self {
            name: name.into(),
            segments: parser::parse_segments(source),
        }
    }

    /// Parse template source and check it against a record type
    pub fn for_record<R: ConfigRecord>(
        name: impl Into<String>,
        source: &str,
    ) -> Result<Self, TemplateError> {
        let template = Self::parse(name, source);
        template.check::<R>()?;
        Ok(template)
    }

    /// Load a template file and check it against a record type
    pub fn from_file<R: ConfigRecord, P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::for_record::<R>(path.display().to_string(), &source)
    }

    /// Ensure every field placeholder names a field of `R`
    pub fn check<R: ConfigRecord>(&self) -> Result<(), TemplateError> {
        for segment in &self.segments {
            if let Segment::Field { name, line } = segment {
                if !R::has_field(name) {
                    return Err(TemplateError::UnknownField {
                        template: self.name.clone(),
                        field: name.clone(),
                        line: *line,
                        variant: R::VARIANT,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Field placeholders in template order (with repeats)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Pipeline references in template order (with repeats)
    pub fn target_vars(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::TargetVar(expr) => Some(expr.as_str()),
            _ => None,
        })
    }

    /// Render the template with a record's values
    pub fn render<R: ConfigRecord>(&self, record: &R) -> RenderedDocument {
        let capacity = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.len(),
                Segment::Field { .. } => 16,
                Segment::TargetVar(expr) => expr.len() + 3,
            })
            .sum();

        let mut out = String::with_capacity(capacity);
        for segment in &self.segments {
            segment.write_to(&mut out, |name| record.field(name));
        }
        RenderedDocument::new(out)
    }
}

/// Built-in templates, parsed on first use
pub mod builtin {
    use super::Template;
    use once_cell::sync::Lazy;

    /// Simple Deploy pipeline
    pub static SIMPLE: Lazy<Template> = Lazy::new(|| {
        Template::parse("simple", include_str!("../../templates/simple.Jenkinsfile"))
    });

    /// Blue/Green Deploy pipeline
    pub static BLUE_GREEN: Lazy<Template> = Lazy::new(|| {
        Template::parse("blue-green", include_str!("../../templates/bluegreen.Jenkinsfile"))
    });
}

/// Render a record with its built-in template
pub fn render<R: ConfigRecord>(record: &R) -> RenderedDocument {
    R::builtin_template().render(record)
}
