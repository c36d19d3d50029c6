//! Output formatting for structures and analysis results.
//!
//! Supports both human-readable terminal output and JSON for scripting.
//! Metric rows keep the order the backend sent them in.

use protlens_core::{metric_rows, MetricTable, StructurePayload};
use std::path::Path;

/// Formats metrics as `key: value` lines, one per metric.
pub fn format_human(table: &MetricTable) -> String {
    if table.is_empty() {
        return "No metrics returned".to_string();
    }

    metric_rows(table)
        .iter()
        .map(|row| format!("{}: {}", row.key, row.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats metrics as pretty JSON, as received.
pub fn format_json(table: &MetricTable) -> String {
    serde_json::to_string_pretty(table).unwrap_or_else(|_| "{}".to_string())
}

/// Confirmation line after writing a structure to disk.
pub fn format_saved(id: &str, payload: &StructurePayload, path: &Path) -> String {
    let lines = payload.line_count();
    format!(
        "Saved PDB {} ({} line{}) to {}",
        id,
        lines,
        if lines == 1 { "" } else { "s" },
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> MetricTable {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_format_human_empty() {
        assert_eq!(format_human(&table("{}")), "No metrics returned");
    }

    #[test]
    fn test_format_human_keeps_order() {
        let output = format_human(&table(r#"{"zeta": 1, "alpha": "x", "tags": ["a", "b"]}"#));
        assert_eq!(output, "zeta: 1\nalpha: x\ntags: [\"a\",\"b\"]");
    }

    #[test]
    fn test_format_json_keeps_order() {
        let output = format_json(&table(r#"{"zeta": 1, "alpha": 2.5}"#));
        let zeta = output.find("zeta").unwrap();
        let alpha = output.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(output.contains("2.5"));
    }

    #[test]
    fn test_format_saved() {
        let one = StructurePayload::new("END");
        assert_eq!(
            format_saved("1crn", &one, Path::new("out.pdb")),
            "Saved PDB 1crn (1 line) to out.pdb"
        );

        let many = StructurePayload::new("HEADER\nATOM\nEND");
        assert!(format_saved("1crn", &many, Path::new("out.pdb")).contains("(3 lines)"));
    }
}
