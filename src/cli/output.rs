//! CLI output formatting

use crate::core::{FieldSpec, Variant};
use crate::sink::CopyOutcome;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");

/// Format the field list of a generator as an aligned table
pub fn format_fields(variant: Variant, fields: &[FieldSpec]) -> String {
    let name_width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let label_width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);

    let mut out = format!("{} fields:\n", style(variant.title()).bold());
    for field in fields {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            style(format!("{:<width$}", field.name, width = name_width)).cyan(),
            format!("{:<width$}", field.label, width = label_width),
            style(field.description).dim()
        ));
    }
    out
}

/// Format the result of a copy request
pub fn format_copy_outcome(outcome: CopyOutcome) -> String {
    match outcome {
        CopyOutcome::Copied => format!("{} Copied to clipboard", CHECK),
        CopyOutcome::Failed => format!(
            "{} {}",
            WARN,
            style("Could not copy to clipboard (see log)").yellow()
        ),
        CopyOutcome::Unavailable => format!(
            "{} {}",
            WARN,
            style("No clipboard helper available; copying is disabled").yellow()
        ),
    }
}

/// Format a values file skeleton with a header comment
pub fn format_values_skeleton(variant: Variant, yaml: &str) -> String {
    format!(
        "# {} values for pipegen\n# Every field is optional; missing fields render as empty text.\n{}",
        variant.title(),
        yaml
    )
}
