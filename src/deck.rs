//! The 52-card deck and its dealing cursor.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// A single deck of cards dealt from the top.
///
/// The deck always holds the same 52 cards; shuffling only permutes them and
/// rewinds the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in dealing order.
    cards: Vec<Card>,
    /// Number of cards dealt since the last shuffle.
    index: usize,
}

impl Deck {
    /// Creates an unshuffled deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards, index: 0 }
    }

    /// Creates an unshuffled deck whose first cards are `draws`, in order.
    ///
    /// The remaining cards follow in construction order. Returns `None` if
    /// `draws` names a card twice.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Option<Self> {
        let mut deck = Self::new();

        for (position, card) in draws.iter().enumerate() {
            let found = deck.cards[position..].iter().position(|c| c == card)?;
            deck.cards.swap(position, position + found);
        }

        Some(deck)
    }

    /// Shuffles every card back into the deck using `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::trace!("shuffling deck");
        self.cards.shuffle(rng);
        self.index = 0;
    }

    /// Deals the next card onto `hand` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] once all 52 cards have been dealt.
    pub fn deal_to(&mut self, hand: &mut Hand) -> Result<Card, DealError> {
        let card = *self.cards.get(self.index).ok_or(DealError::Exhausted)?;
        self.index += 1;
        hand.add_card(card);
        Ok(card)
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    /// Returns all cards in dealing order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
