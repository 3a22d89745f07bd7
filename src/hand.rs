//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::SplitError;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// A hand of cards with the wager riding on it.
///
/// Player and dealer both hold a `Hand`; the dealer's wager is simply unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Bet amount for this hand.
    bet: usize,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize) -> Self {
        Self {
            cards: cards.to_vec(),
            bet,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns every attainable total that does not bust, ascending.
    ///
    /// Each card multiplies the enumeration by its number of legal values, so
    /// totals reached along different paths appear once per path: two Aces
    /// give `[2, 12, 12]`. An empty hand is worth `[0]`; a bust hand yields an
    /// empty vector.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        let mut sums = alloc::vec![0u8];

        for card in &self.cards {
            let mut next = Vec::with_capacity(sums.len() * card.rank.values().len());
            for &sum in &sums {
                for &value in card.rank.values() {
                    // Totals only grow, so a bust branch can be dropped early.
                    let total = sum.saturating_add(value);
                    if total <= BLACKJACK {
                        next.push(total);
                    }
                }
            }
            sums = next;
        }

        sums.sort_unstable();
        sums
    }

    /// Returns the best total that does not bust, or `None` if the hand is bust.
    ///
    /// `None` orders below every `Some`, so a bust hand never wins a comparison.
    #[must_use]
    pub fn best_value(&self) -> Option<u8> {
        self.values().last().copied()
    }

    /// Returns whether the hand has more than one attainable total.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.values().len() > 1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.values().contains(&BLACKJACK)
    }

    /// Returns whether every total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.values().is_empty()
    }

    /// Returns whether this hand's best total is higher than `other`'s.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.best_value() > other.best_value()
    }

    /// Returns whether the hand is two cards of equal point value.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => first.same_value(second),
            _ => false,
        }
    }

    /// Splits a two-card hand into two one-card hands.
    ///
    /// The first card goes to the first hand and the second card to the
    /// second; both inherit the bet.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::CardCount`] unless the hand holds exactly two
    /// cards.
    pub fn split(&self) -> Result<[Self; 2], SplitError> {
        match self.cards.as_slice() {
            [first, second] => Ok([
                Self::with_cards(&[*first], self.bet),
                Self::with_cards(&[*second], self.bet),
            ]),
            cards => Err(SplitError::CardCount(cards.len())),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
