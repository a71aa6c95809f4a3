use serde::Serialize;

use crate::headers::HeaderSet;

/// A fully validated game: tags, SAN moves, and one FEN per ply plus the start.
///
/// Only built by a successful `parse`; `positions.len() == moves.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedGame {
    pub headers: HeaderSet,
    pub moves: Vec<String>,    // SAN notation
    pub positions: Vec<String>, // FEN, index = ply
}

/// Numbered row of a move list: "12. Nf3 Nc6".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePair {
    pub number: usize,
    pub white: String,
    pub black: Option<String>,
}

/// Header subset persisted alongside a stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMetadata {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
    pub date: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation
    pub pgn: String,
}

/// Game context handed to the coaching collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachingContext {
    pub white: String,
    pub black: String,
    pub result: String,
    pub white_elo: Option<i32>,
    pub black_elo: Option<i32>,
    pub event: Option<String>,
    pub date: Option<String>,
    pub ply: Option<usize>,
    pub position: Option<String>,
    pub move_history: Vec<String>,
}

impl ParsedGame {
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// FEN after `ply` half-moves; 0 is the starting position.
    pub fn position_at(&self, ply: usize) -> Option<&str> {
        self.positions.get(ply).map(String::as_str)
    }

    /// SAN of the move that produced ply `ply` (1-based).
    pub fn move_at(&self, ply: usize) -> Option<&str> {
        ply.checked_sub(1)
            .and_then(|i| self.moves.get(i))
            .map(String::as_str)
    }

    pub fn initial_position(&self) -> &str {
        self.positions.first().map(String::as_str).unwrap_or_default()
    }

    pub fn final_position(&self) -> &str {
        self.positions.last().map(String::as_str).unwrap_or_default()
    }

    pub fn move_pairs(&self) -> Vec<MovePair> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| MovePair {
                number: i + 1,
                white: pair[0].clone(),
                black: pair.get(1).cloned(),
            })
            .collect()
    }

    /// Storage metadata with defaults for missing tags.
    pub fn metadata(&self) -> GameMetadata {
        GameMetadata {
            white: self.headers.get_or("White", "Unknown").to_string(),
            black: self.headers.get_or("Black", "Unknown").to_string(),
            result: self.headers.get_or("Result", "*").to_string(),
            date: self.headers.get_or("Date", "").to_string(),
            event: self.headers.get_or("Event", "").to_string(),
        }
    }

    /// Record for storage; `pgn` is the raw text the game was parsed from.
    pub fn to_record(&self, pgn: &str) -> GameRecord {
        GameRecord {
            metadata: self.metadata(),
            moves: self.moves.clone(),
            pgn: pgn.to_string(),
        }
    }

    /// Coaching context, optionally anchored at a ply. With `Some(ply)` the
    /// history is truncated to the moves played so far; out-of-range plies
    /// are clamped to the final position.
    pub fn coaching_context(&self, ply: Option<usize>) -> CoachingContext {
        let ply = ply.map(|p| p.min(self.ply_count()));
        let metadata = self.metadata();

        CoachingContext {
            white: metadata.white,
            black: metadata.black,
            result: metadata.result,
            white_elo: self.headers.get_int("WhiteElo"),
            black_elo: self.headers.get_int("BlackElo"),
            event: self.headers.get_nonempty("Event").map(str::to_string),
            date: self.headers.get_nonempty("Date").map(str::to_string),
            ply,
            position: ply.and_then(|p| self.position_at(p)).map(str::to_string),
            move_history: match ply {
                Some(p) => self.moves[..p].to_vec(),
                None => self.moves.clone(),
            },
        }
    }
}
