//! PGN ingestion entry points.

use serde::Serialize;
use tracing::debug;

use crate::engine::{RulesEngine, ShakmatyEngine};
use crate::error::ParseFailure;
use crate::game_data::ParsedGame;
use crate::headers::extract_headers;
use crate::normalize::normalize;
use crate::observer::{NoopObserver, ParseObserver};
use crate::replay::replay_positions;
use crate::resolver::{resolve_moves, Strategy};

/// Ingestion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Loader strategies, tried in order.
    pub strategies: Vec<Strategy>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strategies: Strategy::DEFAULT_ORDER.to_vec(),
        }
    }
}

/// Parse untrusted PGN text into a validated game.
pub fn parse(raw: &str) -> Result<ParsedGame, ParseFailure> {
    parse_with(&ShakmatyEngine, raw, &ParseOptions::default(), &mut NoopObserver)
}

/// [`parse`] against any rules engine, with explicit options and observer.
pub fn parse_with<E: RulesEngine>(
    engine: &E,
    raw: &str,
    options: &ParseOptions,
    observer: &mut dyn ParseObserver,
) -> Result<ParsedGame, ParseFailure> {
    if raw.trim().is_empty() {
        return Err(ParseFailure::empty_input());
    }

    let text = normalize(raw);
    let headers = extract_headers(&text);
    let moves = resolve_moves(engine, &text, &options.strategies, observer)?;
    let positions = replay_positions(engine, &moves)?;

    debug!(tags = headers.len(), plies = moves.len(), "Parsed PGN");

    Ok(ParsedGame {
        headers,
        moves,
        positions,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Whether `raw` parses, with a user-facing error when it does not.
pub fn validate_pgn(raw: &str) -> Validation {
    match parse(raw) {
        Ok(_) => Validation {
            valid: true,
            error: None,
        },
        Err(failure) => Validation {
            valid: false,
            error: Some(failure.user_message()),
        },
    }
}

/// Cheap structural screen before an upload is accepted. The length floor
/// applies after trimming the ends; inner whitespace counts.
pub fn quick_check(raw: &str) -> Result<(), &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("PGN content is required");
    }
    if trimmed.chars().count() < 10 {
        return Err("PGN content appears to be too short");
    }
    if !raw.contains("[Event") && !raw.contains("1.") {
        return Err("PGN content does not appear to be valid chess notation");
    }
    Ok(())
}

pub fn is_valid_result(result: &str) -> bool {
    matches!(result, "1-0" | "0-1" | "1/2-1/2" | "*")
}
