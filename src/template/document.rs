//! Rendered pipeline text

use std::fmt;

/// A fully rendered pipeline definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    /// Wrap already rendered text
    pub fn new(text: String) -> Self {
        Self(text)
    }

    /// The document text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document bytes, as offered for download
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of lines in the document
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
