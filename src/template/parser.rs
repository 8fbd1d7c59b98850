//! Template source parsing
//!
//! Two placeholder forms are recognised and they never overlap:
//! - `{{ fieldName }}` is filled from the record
//! - `${...}` belongs to the generated pipeline and is kept as a reference
//!
//! Anything else, including a lone `{{` or `$`, is literal text.

use crate::template::segment::Segment;
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}|\$\{([^}\n]*)\}")
        .expect("placeholder pattern is valid")
});

/// Split template source into segments
pub fn parse_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;
    let mut line = 1;

    for caps in PLACEHOLDER.captures_iter(source) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };

        let gap = &source[last_end..whole.start()];
        line += gap.matches('\n').count();
        push_text(&mut segments, gap);

        if let Some(field) = caps.get(1) {
            segments.push(Segment::Field {
                name: field.as_str().to_string(),
                line,
            });
        } else if let Some(expr) = caps.get(2) {
            segments.push(Segment::TargetVar(expr.as_str().to_string()));
        }

        last_end = whole.end();
    }

    push_text(&mut segments, &source[last_end..]);
    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(Segment::Text(previous)) => previous.push_str(text),
        _ => segments.push(Segment::Text(text.to_string())),
    }
}
