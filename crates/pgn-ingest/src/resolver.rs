//! Move-sequence resolution: ordered loader strategies, first success wins.

use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::{LoadMode, RulesEngine};
use crate::error::ParseFailure;
use crate::observer::{AttemptOutcome, ParseObserver, StrategyAttempt};

/// Synthetic tags wrapped around bare movetext.
const PLACEHOLDER_TAGS: &str = "[Event \"Game\"]\n[White \"White\"]\n[Black \"Black\"]\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// Whole text, lenient loader.
    Lenient,
    /// Whole text, strict loader.
    Strict,
    /// Tag lines dropped, placeholder tags added, lenient loader.
    MovetextOnly,
}

impl Strategy {
    pub const DEFAULT_ORDER: [Strategy; 3] =
        [Strategy::Lenient, Strategy::Strict, Strategy::MovetextOnly];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Lenient => "Standard (non-strict)",
            Strategy::Strict => "Standard (strict)",
            Strategy::MovetextOnly => "Moves-only extraction",
        }
    }

    fn attempt<E: RulesEngine>(self, engine: &E, text: &str) -> Result<Vec<String>, String> {
        let loaded = match self {
            Strategy::Lenient => engine.load_pgn(text, LoadMode::Lenient),
            Strategy::Strict => engine.load_pgn(text, LoadMode::Strict),
            Strategy::MovetextOnly => {
                let movetext = movetext_only(text);
                if movetext.is_empty() {
                    return Err("No moves found after header extraction".to_string());
                }
                engine.load_pgn(&format!("{PLACEHOLDER_TAGS}{movetext}"), LoadMode::Lenient)
            }
        };
        loaded.map_err(|e| e.to_string())
    }
}

/// Drop every line that starts with `[` and join the rest with spaces.
pub fn movetext_only(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('[') && !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Resolve `text` to a non-empty SAN history.
///
/// Fails with `ParseError` (carrying the last loader error) when every
/// strategy rejects the text, or `NoMoves` when a loader succeeds with an
/// empty history.
pub fn resolve_moves<E: RulesEngine>(
    engine: &E,
    text: &str,
    strategies: &[Strategy],
    observer: &mut dyn ParseObserver,
) -> Result<Vec<String>, ParseFailure> {
    let mut last_error: Option<String> = None;

    for (index, &strategy) in strategies.iter().enumerate() {
        match strategy.attempt(engine, text) {
            Ok(history) => {
                debug!(strategy = strategy.name(), moves = history.len(), "PGN strategy succeeded");
                observer.on_attempt(&StrategyAttempt {
                    strategy,
                    index,
                    outcome: AttemptOutcome::Loaded { moves: history.len() },
                });

                if history.is_empty() {
                    return Err(ParseFailure::no_moves());
                }
                return Ok(history);
            }
            Err(error) => {
                debug!(strategy = strategy.name(), %error, "PGN strategy rejected input");
                observer.on_attempt(&StrategyAttempt {
                    strategy,
                    index,
                    outcome: AttemptOutcome::Rejected { error: error.clone() },
                });
                last_error = Some(error);
            }
        }
    }

    let details = last_error.unwrap_or_else(|| "No parsing strategy configured".to_string());
    warn!(%details, "All PGN parsing strategies failed");
    Err(ParseFailure::parse_error(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineError, ShakmatyBoard, ShakmatyEngine};
    use crate::error::FailureKind;
    use crate::observer::NoopObserver;

    /// Engine that fails in the listed modes and records every text it sees.
    struct ScriptedEngine {
        fail_lenient: bool,
        fail_strict: bool,
        seen: std::cell::RefCell<Vec<(LoadMode, String)>>,
    }

    impl ScriptedEngine {
        fn new(fail_lenient: bool, fail_strict: bool) -> Self {
            Self {
                fail_lenient,
                fail_strict,
                seen: Default::default(),
            }
        }
    }

    impl RulesEngine for ScriptedEngine {
        type Board = ShakmatyBoard;

        fn load_pgn(&self, pgn: &str, mode: LoadMode) -> Result<Vec<String>, EngineError> {
            self.seen.borrow_mut().push((mode, pgn.to_string()));
            let fail = match mode {
                LoadMode::Lenient => self.fail_lenient,
                LoadMode::Strict => self.fail_strict,
            };
            if fail {
                return Err(EngineError::InvalidSan(format!("{mode:?} refused")));
            }
            ShakmatyEngine.load_pgn(pgn, mode)
        }

        fn new_board(&self) -> ShakmatyBoard {
            ShakmatyBoard::default()
        }
    }

    #[test]
    fn test_first_strategy_wins() {
        let engine = ScriptedEngine::new(false, false);
        let moves = resolve_moves(&engine, "1. e4 e5", &Strategy::DEFAULT_ORDER, &mut NoopObserver)
            .unwrap();
        assert_eq!(moves, vec!["e4", "e5"]);
        assert_eq!(engine.seen.borrow().len(), 1);
    }

    #[test]
    fn test_falls_back_to_strict() {
        let engine = ScriptedEngine::new(true, false);
        let mut attempts = Vec::new();
        let mut record = |a: &StrategyAttempt| attempts.push(a.clone());

        let moves =
            resolve_moves(&engine, "1. d4 d5", &Strategy::DEFAULT_ORDER, &mut record).unwrap();
        assert_eq!(moves, vec!["d4", "d5"]);

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].strategy, Strategy::Lenient);
        assert!(matches!(attempts[0].outcome, AttemptOutcome::Rejected { .. }));
        assert_eq!(attempts[1].index, 1);
        assert_eq!(attempts[1].outcome, AttemptOutcome::Loaded { moves: 2 });
    }

    #[test]
    fn test_movetext_only_wraps_with_placeholder_tags() {
        let engine = ScriptedEngine::new(false, true);
        let text = "[Event \"x\"]\n[White \"y\"]\n1. e4\ne5";

        let moves = resolve_moves(
            &engine,
            text,
            &[Strategy::Strict, Strategy::MovetextOnly],
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(moves, vec!["e4", "e5"]);

        let seen = engine.seen.borrow();
        let (mode, fed) = &seen[1];
        assert_eq!(*mode, LoadMode::Lenient);
        assert_eq!(fed, "[Event \"Game\"]\n[White \"White\"]\n[Black \"Black\"]\n\n1. e4 e5");
    }

    #[test]
    fn test_all_strategies_fail_reports_last_error() {
        let engine = ScriptedEngine::new(true, true);
        let failure =
            resolve_moves(&engine, "1. e4", &Strategy::DEFAULT_ORDER, &mut NoopObserver)
                .unwrap_err();
        assert_eq!(failure.kind, FailureKind::ParseError);
        assert_eq!(failure.message, "Failed to parse PGN");
        assert_eq!(failure.details.as_deref(), Some("Invalid SAN: Lenient refused"));
        assert_eq!(engine.seen.borrow().len(), 3);
    }

    #[test]
    fn test_empty_movetext_skips_engine() {
        let engine = ScriptedEngine::new(true, true);
        let failure = resolve_moves(
            &engine,
            "[Event \"x\"]\n[White \"y\"]",
            &Strategy::DEFAULT_ORDER,
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(failure.kind, FailureKind::ParseError);
        assert_eq!(
            failure.details.as_deref(),
            Some("No moves found after header extraction")
        );
        assert_eq!(engine.seen.borrow().len(), 2);
    }

    #[test]
    fn test_malformed_tag_line_rescued_by_movetext_only() {
        let mut attempts = Vec::new();
        let mut record = |a: &StrategyAttempt| attempts.push(a.clone());

        let moves = resolve_moves(
            &ShakmatyEngine,
            "[Event Casual]\n[White \"W\"]\n1. e4 c5 2. Nf3 *",
            &Strategy::DEFAULT_ORDER,
            &mut record,
        )
        .unwrap();
        assert_eq!(moves, vec!["e4", "c5", "Nf3"]);

        let outcomes: Vec<_> = attempts.iter().map(|a| (a.strategy, a.outcome.clone())).collect();
        let rejected = AttemptOutcome::Rejected {
            error: "Unexpected token in movetext: [Event".to_string(),
        };
        assert_eq!(
            outcomes,
            vec![
                (Strategy::Lenient, rejected.clone()),
                (Strategy::Strict, rejected),
                (Strategy::MovetextOnly, AttemptOutcome::Loaded { moves: 3 }),
            ]
        );
    }

    #[test]
    fn test_empty_history_is_no_moves() {
        let failure = resolve_moves(
            &ShakmatyEngine,
            "[Event \"Test\"]",
            &Strategy::DEFAULT_ORDER,
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(failure.kind, FailureKind::NoMoves);
    }

    #[test]
    fn test_no_strategies_configured() {
        let failure = resolve_moves(&ShakmatyEngine, "1. e4", &[], &mut NoopObserver).unwrap_err();
        assert_eq!(failure.kind, FailureKind::ParseError);
        assert_eq!(failure.details.as_deref(), Some("No parsing strategy configured"));
    }

    #[test]
    fn test_movetext_only_lines() {
        assert_eq!(movetext_only("[A \"1\"]\n\n1. e4 e5\n2. Nf3\n"), "1. e4 e5 2. Nf3");
        assert_eq!(movetext_only("[A \"1\"]\n  \n"), "");
        // indented tag lines are not tag lines
        assert_eq!(movetext_only(" [A \"1\"]"), "[A \"1\"]");
    }
}
