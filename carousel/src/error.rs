//! Error types for the carousel core.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Everything that can go wrong while building or driving a rotator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A deck needs at least one card to rotate through.
    #[error("a deck must contain at least one card")]
    EmptyDeck,

    /// A raw index did not address a card in the deck.
    #[error("card index {index} is out of range for a deck of {len}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of cards in the deck
        len: usize,
    },

    /// A timing value was zero, which would spin the event loop.
    #[error("{field} must be greater than zero")]
    ZeroDuration {
        /// Name of the offending timing field
        field: &'static str,
    },

    /// The host refused to arm a timer.
    #[error("failed to arm timer: {0}")]
    Timer(String),
}
