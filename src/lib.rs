//! pipegen - Jenkins pipeline generator
//!
//! Turns a flat record of deployment settings into a Jenkins declarative
//! pipeline. Pipeline-side `${...}` references in the templates are carried
//! through untouched; only `{{ field }}` placeholders are filled.

pub mod cli;
pub mod core;
pub mod sink;
pub mod site;
pub mod template;

// Re-export commonly used types
pub use crate::core::{BlueGreenRecord, ConfigRecord, InputCollector, SimpleDeployRecord, Variant};
pub use crate::sink::{Clipboard, ClipboardError, CopyOutcome, OutputSink};
pub use crate::template::{render, target_var, RenderedDocument, Template, TemplateError};
