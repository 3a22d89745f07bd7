//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie).
    Push,
    /// Player has a natural blackjack.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet amount for this hand, after any double.
    pub bet: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's best total, `None` if bust.
    pub player_value: Option<u8>,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each terminal player hand, in play order.
    pub hands: Vec<HandResult>,
    /// The dealer's final best total, `None` if bust.
    pub dealer_value: Option<u8>,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the sum of every hand's net result.
    #[must_use]
    pub fn net(&self) -> isize {
        self.hands.iter().map(|hand| hand.net).sum()
    }
}
