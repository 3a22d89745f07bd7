//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card of the deck has been dealt.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur while splitting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The hand does not hold exactly two cards.
    #[error("cannot split a hand of {0} cards")]
    CardCount(usize),
    /// The two cards are not worth the same points.
    #[error("cannot split cards of different value")]
    Unpaired,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A card was needed but the deck is exhausted.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A strategy asked to split a hand that cannot be split.
    #[error(transparent)]
    Split(#[from] SplitError),
}
