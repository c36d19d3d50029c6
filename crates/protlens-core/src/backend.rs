//! HTTP access to the structure/analysis backend.
//!
//! [`Backend`] is the seam the dispatch flow is written against; the app and
//! the CLI use [`HttpBackend`], tests use in-memory fakes.
//!
//! reqwest runs on both targets:
//! - Native: hyper with rustls
//! - WASM: the browser's `fetch()`
//!
//! No timeout and no retry are configured. A request waits for the backend
//! for as long as the transport allows.

use async_trait::async_trait;
use instant::Instant;
use tracing::{debug, info, warn};

use crate::config::API_BASE;
use crate::error::ClientError;
use crate::protocol::{
    analyze_url, interpret_analysis, interpret_structure, structure_url, AnalyzeRequest,
    MetricTable, StructurePayload,
};

/// Operations the backend offers.
///
/// Inputs are expected to be validated already (see [`crate::input::validate`]).
#[async_trait(?Send)]
pub trait Backend {
    /// Downloads the structure file for `id`.
    async fn fetch_structure(&self, id: &str) -> Result<StructurePayload, ClientError>;

    /// Submits `seq` for analysis and returns the metric table.
    async fn analyze_sequence(&self, seq: &str) -> Result<MetricTable, ClientError>;
}

/// reqwest-backed [`Backend`].
///
/// Cloning is cheap: `reqwest::Client` pools connections behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Uses a preconfigured client, e.g. one with proxies disabled.
    pub fn with_client(client: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_structure(&self, id: &str) -> Result<StructurePayload, ClientError> {
        let url = structure_url(&self.base, id)?;
        debug!("GET {}", url);
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Failure path never looks at the body
        let body = if status.is_success() {
            response.bytes().await?.to_vec()
        } else {
            Vec::new()
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let result = interpret_structure(id, status.as_u16(), &body);
        match &result {
            Ok(payload) => info!(
                "Fetched structure {} ({} lines) in {:.0}ms",
                id,
                payload.line_count(),
                elapsed_ms
            ),
            Err(e) => warn!("Structure {} failed with {}: {}", id, status, e),
        }
        result
    }

    async fn analyze_sequence(&self, seq: &str) -> Result<MetricTable, ClientError> {
        let url = analyze_url(&self.base)?;
        debug!("POST {} ({} chars)", url, seq.len());
        let start = Instant::now();

        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest { seq })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let result = interpret_analysis(status.as_u16(), &body);
        match &result {
            Ok(table) => info!(
                "Analyzed sequence: {} metrics in {:.0}ms",
                table.len(),
                elapsed_ms
            ),
            Err(e) => warn!("Sequence analysis failed with {}: {}", status, e),
        }
        result
    }
}
