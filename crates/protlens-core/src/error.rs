//! Error types for protlens-core.
//!
//! Every failure a user can trigger ends up as one [`ClientError`]; its
//! `Display` text is exactly what the front ends show.

use crate::input::InputKind;
use thiserror::Error;

/// Errors produced while validating input or talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Input was empty after trimming; no request was made.
    #[error("{}", .0.prompt())]
    EmptyInput(InputKind),
    /// Structure request returned a non-success status.
    #[error("PDB {id} not found")]
    NotFound { id: String },
    /// Analysis request was refused; carries the message to show.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced an HTTP status.
    #[error("Request failed: {0}")]
    Transport(String),
    /// Success status, but the body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedBody(String),
}

impl ClientError {
    /// Whether this error blocks the action before any request is sent.
    pub fn is_blocking(&self) -> bool {
        matches!(self, ClientError::EmptyInput(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_identifier() {
        let err = ClientError::NotFound {
            id: "1abc".to_string(),
        };
        assert_eq!(err.to_string(), "PDB 1abc not found");
    }

    #[test]
    fn test_empty_input_displays_prompt() {
        assert_eq!(
            ClientError::EmptyInput(InputKind::Identifier).to_string(),
            "Enter PDB ID"
        );
        assert_eq!(
            ClientError::EmptyInput(InputKind::Sequence).to_string(),
            "Paste sequence or FASTA"
        );
    }

    #[test]
    fn test_rejected_is_verbatim() {
        let err = ClientError::Rejected("invalid character".to_string());
        assert_eq!(err.to_string(), "invalid character");
        assert!(!err.is_blocking());
    }
}
