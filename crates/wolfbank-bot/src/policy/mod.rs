mod heuristic;

pub use heuristic::HeuristicPolicy;

use wolfbank_core::{BankId, Game, SkipReason};

/// A CPU seat's answer for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Target {
        bank: BankId,
        slot: usize,
        /// Short label for the table log, e.g. "by priority".
        reason: &'static str,
    },
    Skip(SkipReason),
}

/// Unified interface for CPU seats.
pub trait Policy: Send {
    /// Decide for the bank that currently holds the turn.
    fn decide(&mut self, game: &Game) -> Decision;
}
