//! Backend calls behind the `fetch` and `analyze` subcommands.

use anyhow::{Context, Result};
use protlens_core::input::{residue_count, validate};
use protlens_core::{Backend, InputKind, MetricTable, StructurePayload};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Fetches a structure, returning the trimmed identifier with the payload.
pub async fn fetch<B: Backend + ?Sized>(
    backend: &B,
    raw_id: &str,
) -> Result<(String, StructurePayload)> {
    let id = validate(raw_id, InputKind::Identifier)?;
    info!("Fetching structure {}", id);
    let payload = backend.fetch_structure(&id).await?;
    info!("Received {} lines for {}", payload.line_count(), id);
    Ok((id, payload))
}

/// Submits a sequence and returns the metric table.
pub async fn analyze<B: Backend + ?Sized>(backend: &B, raw_seq: &str) -> Result<MetricTable> {
    let seq = validate(raw_seq, InputKind::Sequence)?;
    info!("Analyzing {} residues", residue_count(&seq));
    Ok(backend.analyze_sequence(&seq).await?)
}

/// Writes the structure text to `path`.
pub fn save_structure(path: &Path, payload: &StructurePayload) -> Result<()> {
    std::fs::write(path, payload.as_str())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Picks the sequence source: the argument, a file, or stdin.
pub fn read_sequence(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(seq) = inline {
        return Ok(seq);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read sequence from stdin")?;
    Ok(text)
}
