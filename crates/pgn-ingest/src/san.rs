//! UCI -> SAN conversion for engine output and board input.

use serde::Serialize;
use shakmaty::{uci::UciMove, Chess, Color, Position};

use crate::engine::{play_san, EngineError, ShakmatyBoard};

/// Result of converting a UCI move line to SAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanLine {
    pub formatted: String,
    pub moves: Vec<String>,
}

fn start_position(fen: Option<&str>) -> Result<Chess, EngineError> {
    match fen {
        Some(fen) => Ok(ShakmatyBoard::from_fen(fen)?.position().clone()),
        None => Ok(Chess::default()),
    }
}

/// SAN of a from/to (+ promotion) move played from the standard start.
/// e.g. ("g1", "f3", None) -> "Nf3"
pub fn move_to_san(from: &str, to: &str, promotion: Option<char>) -> Option<String> {
    let uci = match promotion {
        Some(p) => format!("{from}{to}{}", p.to_ascii_lowercase()),
        None => format!("{from}{to}"),
    };
    uci_to_san(None, &uci).ok()
}

/// Convert a single UCI move to SAN at a given position (start when `None`).
pub fn uci_to_san(fen: Option<&str>, uci_str: &str) -> Result<String, EngineError> {
    let mut pos = start_position(fen)?;
    let uci_move: UciMove = uci_str
        .parse()
        .map_err(|_| EngineError::InvalidSan(uci_str.to_string()))?;
    let legal_move = uci_move
        .to_move(&pos)
        .map_err(|e| EngineError::IllegalMove {
            san: uci_str.to_string(),
            ply: 1,
            reason: e.to_string(),
        })?;
    Ok(play_san(&mut pos, legal_move))
}

/// Convert a UCI move line to SAN formatted line + moves array.
/// e.g. "e2e4 e7e5 g1f3 f7f6" -> ("1. e4 e5 2. Nf3 f6", ["e4", "e5", "Nf3", "f6"])
///
/// Stops at the first move that does not parse or is illegal.
pub fn uci_line_to_san(fen: Option<&str>, uci_line: &str) -> Result<SanLine, EngineError> {
    let mut pos = start_position(fen)?;
    let mut formatted = String::new();
    let mut moves = Vec::new();

    for uci_str in uci_line.split_whitespace() {
        let Ok(uci_move) = uci_str.parse::<UciMove>() else {
            break;
        };
        let Ok(legal_move) = uci_move.to_move(&pos) else {
            break;
        };

        let move_num = pos.fullmoves().get();
        let white_to_move = pos.turn() == Color::White;
        let san_str = play_san(&mut pos, legal_move);

        if white_to_move {
            if !formatted.is_empty() {
                formatted.push(' ');
            }
            formatted.push_str(&format!("{move_num}. {san_str}"));
        } else if formatted.is_empty() {
            formatted.push_str(&format!("{move_num}... {san_str}"));
        } else {
            formatted.push_str(&format!(" {san_str}"));
        }
        moves.push(san_str);
    }

    Ok(SanLine { formatted, moves })
}
