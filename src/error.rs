//! Error types for table operations.

use thiserror::Error;

/// Errors reported by round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested action is not legal in the current phase.
    ///
    /// The round is left exactly as it was, so the caller may retry with an
    /// action the phase allows.
    #[error("action is not legal in the current phase")]
    IllegalState,
    /// The deck ran out of cards in the middle of a round.
    ///
    /// The round it happened in is over and has no result; starting a new
    /// round recovers the table.
    #[error("deck ran out of cards mid-round")]
    EmptyDeck,
}
