//! Display rows for a sequence analysis result.
//!
//! The result schema belongs to the backend, so every entry is rendered the
//! same way: one row per key, in the order received. Composite values are
//! shown as compact JSON, scalars as a browser would print them.

use serde_json::{Number, Value};

use crate::protocol::MetricTable;

/// One `key: value` line in the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub key: String,
    pub value: String,
}

/// Converts a metric table into display rows, preserving order.
///
/// # Examples
///
/// ```
/// use protlens_core::metrics::metric_rows;
/// use protlens_core::protocol::MetricTable;
///
/// let table: MetricTable = serde_json::from_str(r#"{"length": 120, "gc_content": 0.41}"#).unwrap();
/// let rows = metric_rows(&table);
/// assert_eq!(rows[0].key, "length");
/// assert_eq!(rows[0].value, "120");
/// assert_eq!(rows[1].value, "0.41");
/// ```
pub fn metric_rows(table: &MetricTable) -> Vec<MetricRow> {
    table
        .iter()
        .map(|(key, value)| MetricRow {
            key: key.clone(),
            value: display_value(value),
        })
        .collect()
}

/// Renders a single value for display.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        Value::Bool(b) => b.to_string(),
        // null, arrays and objects all go through JSON
        Value::Null | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => {
            let text = n.to_string();
            // Browsers always sign the exponent: 1e+21, 1e-7
            match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
                _ => text,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(value: Value) -> MetricTable {
        match value {
            Value::Object(map) => map,
            _ => panic!("test table must be an object"),
        }
    }

    #[test]
    fn test_rows_follow_backend_order() {
        let rows = metric_rows(&table(json!({
            "molecular_weight": 11997.3,
            "length": 110,
            "aromaticity": 0.09,
        })));
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["molecular_weight", "length", "aromaticity"]);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(display_value(&json!("acidic")), "acidic");
        assert_eq!(display_value(&json!(120)), "120");
        assert_eq!(display_value(&json!(-3)), "-3");
        assert_eq!(display_value(&json!(0.41)), "0.41");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "null");
    }

    #[test]
    fn test_integral_floats_drop_fraction() {
        assert_eq!(display_value(&json!(42.0)), "42");
        assert_eq!(display_value(&json!(-0.0)), "0");
    }

    #[test]
    fn test_exponents_are_signed() {
        assert_eq!(display_value(&json!(1e21)), "1e+21");
        assert_eq!(display_value(&json!(1.5e300)), "1.5e+300");
        assert_eq!(display_value(&json!(1e-7)), "1e-7");
        assert_eq!(display_value(&json!(1e20)), "100000000000000000000");
    }

    #[test]
    fn test_composites_are_compact_json() {
        assert_eq!(
            display_value(&json!({"A": 3, "C": 0})),
            r#"{"A":3,"C":0}"#
        );
        assert_eq!(display_value(&json!([1, "x"])), r#"[1,"x"]"#);
    }

    #[test]
    fn test_empty_table_has_no_rows() {
        assert!(metric_rows(&MetricTable::new()).is_empty());
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let rows = metric_rows(&table(json!({"<b>": "<script>x</script>"})));
        assert_eq!(rows[0].key, "<b>");
        assert_eq!(rows[0].value, "<script>x</script>");
    }
}
