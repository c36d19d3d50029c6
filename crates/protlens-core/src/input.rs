//! User input checks.
//!
//! Both text fields follow the same rule: trim, then refuse empty input
//! before anything goes over the network.

use crate::config::{IDENTIFIER_PROMPT, SEQUENCE_PROMPT};
use crate::error::ClientError;

/// Which text field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Structure identifier field (`#pdbid`).
    Identifier,
    /// Sequence / FASTA text area (`#sequence`).
    Sequence,
}

impl InputKind {
    /// Blocking prompt shown when this field is empty.
    pub fn prompt(&self) -> &'static str {
        match self {
            InputKind::Identifier => IDENTIFIER_PROMPT,
            InputKind::Sequence => SEQUENCE_PROMPT,
        }
    }
}

/// Trims `raw` and rejects it if nothing is left.
///
/// # Examples
///
/// ```
/// use protlens_core::input::{validate, InputKind};
///
/// assert_eq!(validate("  1crn \n", InputKind::Identifier).unwrap(), "1crn");
/// assert!(validate("   ", InputKind::Sequence).is_err());
/// ```
pub fn validate(raw: &str, kind: InputKind) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::EmptyInput(kind));
    }
    Ok(trimmed.to_string())
}

/// Counts residues in sequence text, ignoring FASTA header lines and whitespace.
///
/// Only used for the hint under the sequence box; the request body always
/// carries the trimmed text as typed.
pub fn residue_count(text: &str) -> usize {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.chars())
        .filter(|c| !c.is_whitespace())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(
            validate("\t4HHB  ", InputKind::Identifier).unwrap(),
            "4HHB"
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        for raw in ["", " ", "\n\t  \r\n"] {
            assert_eq!(
                validate(raw, InputKind::Identifier),
                Err(ClientError::EmptyInput(InputKind::Identifier))
            );
        }
    }

    #[test]
    fn test_validate_keeps_inner_whitespace() {
        let fasta = ">sp|P69905\nMVLSPADKTN\nVKAAWGKVGA\n";
        assert_eq!(
            validate(fasta, InputKind::Sequence).unwrap(),
            ">sp|P69905\nMVLSPADKTN\nVKAAWGKVGA"
        );
    }

    #[test]
    fn test_residue_count_skips_headers() {
        assert_eq!(residue_count(">header line\nMVLS\n PADK \n"), 8);
        assert_eq!(residue_count("MVLSPADKTN"), 10);
        assert_eq!(residue_count(""), 0);
    }
}
