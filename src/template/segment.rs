//! Template segments

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text copied to the output unchanged
    Text(String),

    /// Placeholder replaced by the named record field
    Field {
        name: String,
        /// 1-based line of the placeholder in the template source
        line: usize,
    },

    /// Variable reference of the generated pipeline (`${...}`), never substituted
    TargetVar(String),
}

impl Segment {
    /// Append this segment's rendered text to `out`
    pub(crate) fn write_to<'v>(
        &self,
        out: &mut String,
        lookup: impl FnOnce(&str) -> Option<&'v str>,
    ) {
        match self {
            Segment::Text(text) => out.push_str(text),
            Segment::Field { name, .. } => out.push_str(lookup(name).unwrap_or_default()),
            Segment::TargetVar(expr) => push_target_var(out, expr),
        }
    }
}

/// Produce the pipeline-side reference `${expr}` as inert text
///
/// This is the only place that emits the `${` sigil.
pub fn target_var(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 3);
    push_target_var(&mut out, expr);
    out
}

fn push_target_var(out: &mut String, expr: &str) {
    out.push('$');
    out.push('{');
    out.push_str(expr);
    out.push('}');
}
