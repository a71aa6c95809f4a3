//! Rules-engine seam for the ingestor.
//!
//! The ingestor never interprets chess rules itself. It asks a [`RulesEngine`]
//! to walk PGN movetext into a legal SAN history, and asks a [`ReplayBoard`]
//! to re-apply that history one move at a time. [`ShakmatyEngine`] is the
//! production implementation on top of `shakmaty` and `pgn-reader`.

use std::ops::ControlFlow;
use std::sync::LazyLock;

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use regex::Regex;
use serde::Serialize;
use shakmaty::{fen::Fen, san::San, CastlingMode, Chess, EnPassantMode, Move, Position};
use thiserror::Error;

static WELL_FORMED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[\s*\w+\s*"(?:[^"\\]|\\.)*"\s*\]"#).expect("tag pair regex")
});

// Brace comments, rest-of-line comments and `%` escape lines.
static NON_MOVETEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*|(?m:^%[^\n]*)").expect("comment regex"));

// One movetext element at the start of the input. Results come before move
// numbers and castling before digits so `1-0`/`0-0` are not split.
static MOVETEXT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:1-0|0-1|1/2-1/2|\*",
        r"|(?:O-O-O|O-O|0-0-0|0-0|[KQRBNP]?[a-h]?[1-8]?[x:]?[a-h][1-8](?:=?[QRBN])?)[+#]?",
        r"|\d+\.*|\$\d+|[!?]+|[()])",
    ))
    .expect("movetext token regex")
});

/// How strictly movetext tokens are checked while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadMode {
    /// Any token that resolves to a legal move is accepted.
    Lenient,
    /// Tokens must be the canonical SAN of the move they denote.
    Strict,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move in PGN at ply {ply}: {san} ({reason})")]
    IllegalMove {
        san: String,
        ply: usize,
        reason: String,
    },

    #[error("Non-canonical move in PGN at ply {ply}: {san} (expected {canonical})")]
    NonCanonicalSan {
        san: String,
        canonical: String,
        ply: usize,
    },

    #[error("Invalid SAN: {0}")]
    InvalidSan(String),

    #[error("Unexpected token in movetext: {0}")]
    UnexpectedToken(String),

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rules-aware walker that can load PGN and hand out fresh boards.
pub trait RulesEngine {
    type Board: ReplayBoard;

    /// Load the first game of `pgn` and return its mainline as canonical SAN
    /// (with `+`/`#` suffixes). Text without any game yields an empty history.
    /// Movetext tokens that are not moves, move numbers, annotations or
    /// results are an error, never skipped.
    fn load_pgn(&self, pgn: &str, mode: LoadMode) -> Result<Vec<String>, EngineError>;

    /// A board at the standard starting position.
    fn new_board(&self) -> Self::Board;
}

pub trait ReplayBoard {
    /// FEN of the current position.
    fn position_id(&self) -> String;

    /// Apply one SAN move and return the FEN of the resulting position.
    fn apply_san(&mut self, san: &str) -> Result<String, EngineError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyEngine;

impl RulesEngine for ShakmatyEngine {
    type Board = ShakmatyBoard;

    fn load_pgn(&self, pgn: &str, mode: LoadMode) -> Result<Vec<String>, EngineError> {
        screen_movetext(pgn)?;

        let mut collector = HistoryCollector { mode };
        let mut reader = Reader::new(pgn.as_bytes());

        match reader.read_game(&mut collector)? {
            Some(history) => history,
            None => Ok(Vec::new()),
        }
    }

    fn new_board(&self) -> ShakmatyBoard {
        ShakmatyBoard::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShakmatyBoard {
    pos: Chess,
}

impl ShakmatyBoard {
    /// Build a board from a FEN, e.g. one of `ParsedGame::positions`.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| EngineError::InvalidFen(format!("{fen}: {e}")))?;
        let pos = fen
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidFen(e.to_string()))?;
        Ok(Self { pos })
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }
}

impl ReplayBoard for ShakmatyBoard {
    fn position_id(&self) -> String {
        fen_of(&self.pos)
    }

    fn apply_san(&mut self, san: &str) -> Result<String, EngineError> {
        let san_plus: SanPlus = san
            .parse()
            .map_err(|_| EngineError::InvalidSan(san.to_string()))?;
        let m = san_plus
            .san
            .to_move(&self.pos)
            .map_err(|e| EngineError::IllegalMove {
                san: san.to_string(),
                ply: 0,
                reason: e.to_string(),
            })?;
        self.pos.play_unchecked(m);
        Ok(fen_of(&self.pos))
    }
}

pub(crate) fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// Canonical SAN of `m` in `pos`, with check/mate suffix. Plays the move.
pub(crate) fn play_san(pos: &mut Chess, m: Move) -> String {
    let san = San::from_move(&*pos, m.clone());
    pos.play_unchecked(m);

    let suffix = if pos.is_checkmate() {
        "#"
    } else if pos.is_check() {
        "+"
    } else {
        ""
    };
    format!("{san}{suffix}")
}

/// pgn-reader drops tokens it cannot read as SAN without telling the visitor,
/// so anything outside tag pairs and comments is checked up front.
fn screen_movetext(pgn: &str) -> Result<(), EngineError> {
    let text = WELL_FORMED_TAG.replace_all(pgn, " ");
    let text = NON_MOVETEXT.replace_all(&text, " ");

    for token in text.split_whitespace() {
        // "1.e4", "e4!?" and "d5)" are several elements glued together.
        let mut rest = token;
        while !rest.is_empty() {
            match MOVETEXT_TOKEN.find(rest) {
                Some(m) if m.end() > 0 => rest = &rest[m.end()..],
                _ => return Err(EngineError::UnexpectedToken(token.to_string())),
            }
        }
    }
    Ok(())
}

/// Visitor collecting the mainline SAN history of a single game.
struct HistoryCollector {
    mode: LoadMode,
}

/// Movetext state: the walked position and the moves played so far.
struct Walk {
    pos: Chess,
    history: Vec<String>,
}

impl Visitor for HistoryCollector {
    type Tags = ();
    type Movetext = Walk;
    type Output = Result<Vec<String>, EngineError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(())
    }

    fn tag(&mut self, _: &mut Self::Tags, _: &[u8], _: RawTag<'_>) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(Walk {
            pos: Chess::default(),
            history: Vec::new(),
        })
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true)) // mainline only
    }

    fn san(&mut self, walk: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        let ply = walk.history.len() + 1;

        let m = match san_plus.san.to_move(&walk.pos) {
            Ok(m) => m,
            Err(e) => {
                return ControlFlow::Break(Err(EngineError::IllegalMove {
                    san: san_plus.to_string(),
                    ply,
                    reason: e.to_string(),
                }));
            }
        };

        if self.mode == LoadMode::Strict {
            let canonical = San::from_move(&walk.pos, m.clone());
            if canonical != san_plus.san {
                return ControlFlow::Break(Err(EngineError::NonCanonicalSan {
                    san: san_plus.to_string(),
                    canonical: canonical.to_string(),
                    ply,
                }));
            }
        }

        walk.history.push(play_san(&mut walk.pos, m));
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, walk: Self::Movetext) -> Self::Output {
        Ok(walk.history)
    }
}
