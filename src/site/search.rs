//! In-page section filter

/// A searchable content section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableSection {
    pub id: String,
    pub text: String,
}

impl SearchableSection {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Case-insensitive substring filter over section text
///
/// Section text is lowercased once up front; there is no ranking.
#[derive(Debug, Clone, Default)]
pub struct SectionFilter {
    sections: Vec<(String, String)>,
}

impl SectionFilter {
    pub fn new(sections: &[SearchableSection]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|s| (s.id.clone(), s.text.to_lowercase()))
                .collect(),
        }
    }

    /// Visibility of every section for `query`, in document order
    pub fn visibility(&self, query: &str) -> Vec<bool> {
        let query = query.to_lowercase();
        self.sections
            .iter()
            .map(|(_, text)| query.is_empty() || text.contains(&query))
            .collect()
    }

    /// Ids of the sections that stay visible for `query`
    pub fn visible_ids(&self, query: &str) -> Vec<&str> {
        self.sections
            .iter()
            .zip(self.visibility(query))
            .filter(|(_, visible)| *visible)
            .map(|((id, _), _)| id.as_str())
            .collect()
    }
}
