//! Classified ingestion failures.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const EMPTY_INPUT_SUGGESTION: &str = "Please provide a valid PGN file with chess moves";
pub const PARSE_ERROR_SUGGESTION: &str =
    "Ensure the PGN contains valid chess moves in standard notation (e.g., 1. e4 e5 2. Nf3 Nc6)";
pub const NO_MOVES_SUGGESTION: &str =
    "Verify that your PGN includes the actual game moves, not just headers";
pub const REPLAY_ERROR_SUGGESTION: &str = "The PGN may be corrupted or contain invalid moves";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    EmptyInput,
    ParseError,
    NoMoves,
    ReplayError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::EmptyInput => "EmptyInput",
            FailureKind::ParseError => "ParseError",
            FailureKind::NoMoves => "NoMoves",
            FailureKind::ReplayError => "ReplayError",
        };
        f.write_str(name)
    }
}

/// Why a PGN could not be ingested.
///
/// `message` and `suggestion` are meant for the end user; `details` is
/// diagnostic text (usually the rules engine's own error) for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ParseFailure {
    pub fn empty_input() -> Self {
        Self {
            kind: FailureKind::EmptyInput,
            message: "Empty PGN content".to_string(),
            details: Some("The provided PGN text is empty".to_string()),
            suggestion: Some(EMPTY_INPUT_SUGGESTION.to_string()),
        }
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::ParseError,
            message: "Failed to parse PGN".to_string(),
            details: Some(details.into()),
            suggestion: Some(PARSE_ERROR_SUGGESTION.to_string()),
        }
    }

    pub fn no_moves() -> Self {
        Self {
            kind: FailureKind::NoMoves,
            message: "No valid moves found".to_string(),
            details: Some("The PGN file was parsed but contains no chess moves".to_string()),
            suggestion: Some(NO_MOVES_SUGGESTION.to_string()),
        }
    }

    pub fn replay_error(san: &str) -> Self {
        Self {
            kind: FailureKind::ReplayError,
            message: "Invalid move in sequence".to_string(),
            details: Some(format!("Move \"{san}\" could not be replayed")),
            suggestion: Some(REPLAY_ERROR_SUGGESTION.to_string()),
        }
    }

    /// Message plus suggestion, as shown to the end user.
    pub fn user_message(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!("{}. {}", self.message, suggestion),
            None => self.message.clone(),
        }
    }
}
