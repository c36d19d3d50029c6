//! Wire format of the structure/analysis backend.
//!
//! The backend is external; this module only knows its two endpoints:
//!
//! - `GET {base}/fetch/pdb?pdbid=<id>` → `{"pdb": "<structure text>"}`
//! - `POST {base}/analyze/sequence` with `{"seq": "<text>"}` → flat JSON object
//!   of metric name to value, or `{"detail": "<message>"}` on failure
//!
//! Response interpretation is split from transport so it can be tested
//! without a server: [`interpret_structure`] and [`interpret_analysis`] take a
//! status code and the raw body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::config::{ANALYZE_FALLBACK_ERROR, ANALYZE_PATH, STRUCTURE_PATH, STRUCTURE_QUERY_KEY};
use crate::error::ClientError;

/// Structure file text returned by the backend (PDB format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePayload(String);

impl StructurePayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of lines in the payload, used for log output only.
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

/// Analysis result: metric name to value, in the order the backend sent them.
///
/// Backed by an insertion-ordered map (`serde_json/preserve_order`).
pub type MetricTable = serde_json::Map<String, Value>;

/// Body of the analysis request.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub seq: &'a str,
}

#[derive(Debug, Deserialize)]
struct StructureResponse {
    pdb: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

fn endpoint(base: &str, path: &str) -> Result<Url, ClientError> {
    let raw = format!("{}{}", base.trim_end_matches('/'), path);
    Url::parse(&raw)
        .map_err(|e| ClientError::Transport(format!("invalid backend address {}: {}", raw, e)))
}

/// Builds the structure download URL, percent-encoding the identifier.
pub fn structure_url(base: &str, id: &str) -> Result<Url, ClientError> {
    let mut url = endpoint(base, STRUCTURE_PATH)?;
    url.query_pairs_mut().append_pair(STRUCTURE_QUERY_KEY, id);
    Ok(url)
}

/// Builds the sequence analysis URL.
pub fn analyze_url(base: &str) -> Result<Url, ClientError> {
    endpoint(base, ANALYZE_PATH)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a structure response to a payload.
///
/// Any non-2xx status is "not found"; the body is not read on that path.
pub fn interpret_structure(
    id: &str,
    status: u16,
    body: &[u8],
) -> Result<StructurePayload, ClientError> {
    if !is_success(status) {
        return Err(ClientError::NotFound { id: id.to_string() });
    }

    let parsed: StructureResponse = serde_json::from_slice(body)
        .map_err(|e| ClientError::MalformedBody(format!("structure response: {}", e)))?;
    Ok(StructurePayload(parsed.pdb))
}

/// Maps an analysis response to a metric table or a user-facing rejection.
///
/// On failure the message is the body's `detail` when it is present and
/// truthy (not null, `false`, `0` or empty), otherwise
/// [`ANALYZE_FALLBACK_ERROR`]. A body that is not JSON
/// at all also falls back.
pub fn interpret_analysis(status: u16, body: &[u8]) -> Result<MetricTable, ClientError> {
    if !is_success(status) {
        return Err(ClientError::Rejected(rejection_message(body)));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(table)) => Ok(table),
        Ok(other) => Err(ClientError::MalformedBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ClientError::MalformedBody(format!(
            "analysis response: {}",
            e
        ))),
    }
}

fn rejection_message(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(Value::String(msg)) if !msg.is_empty() => msg,
        // FastAPI validation failures put a list of objects here
        Some(other) if !is_falsy(&other) => other.to_string(),
        _ => ANALYZE_FALLBACK_ERROR.to_string(),
    }
}

/// `null`, `false`, `0` and `""` count as no detail at all.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_structure_url_encodes_identifier() {
        let url = structure_url(BASE, "1crn").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/fetch/pdb?pdbid=1crn");

        let url = structure_url(BASE, "a b/&c").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/fetch/pdb?pdbid=a+b%2F%26c"
        );
        let (_, id) = url.query_pairs().next().unwrap();
        assert_eq!(id, "a b/&c");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let url = analyze_url("http://localhost:8000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/analyze/sequence");
    }

    #[test]
    fn test_invalid_base_is_transport_error() {
        assert!(matches!(
            analyze_url("not a url"),
            Err(ClientError::Transport(_))
        ));
    }

    #[test]
    fn test_analyze_request_body() {
        let body = serde_json::to_string(&AnalyzeRequest { seq: "MVLS" }).unwrap();
        assert_eq!(body, r#"{"seq":"MVLS"}"#);
    }

    #[test]
    fn test_structure_success() {
        let body = br#"{"pdb": "ATOM      1  N   THR A   1\nEND"}"#;
        let payload = interpret_structure("1crn", 200, body).unwrap();
        assert_eq!(payload.as_str(), "ATOM      1  N   THR A   1\nEND");
        assert_eq!(payload.line_count(), 2);
    }

    #[test]
    fn test_structure_failure_ignores_body() {
        let err = interpret_structure("zzzz", 404, b"not json at all").unwrap_err();
        assert_eq!(err.to_string(), "PDB zzzz not found");

        let err = interpret_structure("1crn", 500, br#"{"pdb": "x"}"#).unwrap_err();
        assert_eq!(err, ClientError::NotFound { id: "1crn".into() });
    }

    #[test]
    fn test_structure_missing_field_is_malformed() {
        let err = interpret_structure("1crn", 200, br#"{"structure": "x"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedBody(_)));
    }

    #[test]
    fn test_analysis_preserves_key_order() {
        let body = br#"{"length": 120, "gc_content": 0.41, "aa_counts": {"A": 3}}"#;
        let table = interpret_analysis(200, body).unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["length", "gc_content", "aa_counts"]);
    }

    #[test]
    fn test_analysis_non_object_is_malformed() {
        let err = interpret_analysis(200, b"[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed response: expected a JSON object, got an array"
        );
    }

    #[test]
    fn test_analysis_detail_message() {
        let err = interpret_analysis(400, br#"{"detail": "invalid character"}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid character");
    }

    #[test]
    fn test_analysis_fallback_message() {
        let bodies: [&[u8]; 7] = [
            b"{}",
            br#"{"detail": ""}"#,
            br#"{"detail": null}"#,
            br#"{"detail": false}"#,
            br#"{"detail": 0}"#,
            br#"{"detail": 0.0}"#,
            b"<html>",
        ];
        for body in bodies {
            let err = interpret_analysis(422, body).unwrap_err();
            assert_eq!(err, ClientError::Rejected("Bad sequence".to_string()));
        }
    }

    #[test]
    fn test_analysis_truthy_scalar_detail() {
        let err = interpret_analysis(400, br#"{"detail": 42}"#).unwrap_err();
        assert_eq!(err.to_string(), "42");

        let err = interpret_analysis(400, br#"{"detail": true}"#).unwrap_err();
        assert_eq!(err.to_string(), "true");
    }

    #[test]
    fn test_analysis_structured_detail() {
        let body = br#"{"detail": [{"loc": ["body", "seq"], "msg": "field required"}]}"#;
        let err = interpret_analysis(422, body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"[{"loc":["body","seq"],"msg":"field required"}]"#
        );
    }
}
