//! PGN ingestion: untrusted PGN text in, a validated move/position sequence
//! or a classified [`ParseFailure`] out.
//!
//! ```
//! let game = pgn_ingest::parse("[White \"A\"]\n\n1. e4 e5 2. Nf3 *").unwrap();
//! assert_eq!(game.moves, vec!["e4", "e5", "Nf3"]);
//! assert_eq!(game.positions.len(), game.moves.len() + 1);
//! ```

pub mod engine;
pub mod error;
pub mod game_data;
pub mod headers;
pub mod normalize;
pub mod observer;
pub mod pgn;
pub mod replay;
pub mod resolver;
pub mod san;

pub use engine::{EngineError, LoadMode, ReplayBoard, RulesEngine, ShakmatyBoard, ShakmatyEngine};
pub use error::{FailureKind, ParseFailure};
pub use game_data::{CoachingContext, GameMetadata, GameRecord, MovePair, ParsedGame};
pub use headers::{extract_headers, HeaderSet};
pub use normalize::normalize;
pub use observer::{AttemptOutcome, NoopObserver, ParseObserver, StrategyAttempt};
pub use pgn::{is_valid_result, parse, parse_with, quick_check, validate_pgn, ParseOptions, Validation};
pub use resolver::Strategy;
pub use san::{move_to_san, uci_line_to_san, uci_to_san, SanLine};
