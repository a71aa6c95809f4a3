//! Per-call diagnostics hook for strategy attempts.

use serde::Serialize;

use crate::resolver::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttemptOutcome {
    Loaded { moves: usize },
    Rejected { error: String },
}

/// One strategy tried by the move resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyAttempt {
    pub strategy: Strategy,
    /// Position of the strategy in the configured order, from 0.
    pub index: usize,
    pub outcome: AttemptOutcome,
}

pub trait ParseObserver {
    fn on_attempt(&mut self, attempt: &StrategyAttempt);
}

impl<F: FnMut(&StrategyAttempt)> ParseObserver for F {
    fn on_attempt(&mut self, attempt: &StrategyAttempt) {
        self(attempt)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn on_attempt(&mut self, _: &StrategyAttempt) {}
}
