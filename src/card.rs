//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit's name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card rank.
///
/// Every rank carries a non-empty, ascending set of legal point values. Only
/// the [`Rank::Ace`] carries two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// King, worth 10.
    King,
    /// Queen, worth 10.
    Queen,
    /// Jack, worth 10.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl Rank {
    /// All ranks, in deck construction order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Returns the legal point values of this rank, ascending.
    #[must_use]
    pub const fn values(self) -> &'static [u8] {
        match self {
            Self::Ace => &[1, 11],
            Self::King | Self::Queen | Self::Jack | Self::Ten => &[10],
            Self::Nine => &[9],
            Self::Eight => &[8],
            Self::Seven => &[7],
            Self::Six => &[6],
            Self::Five => &[5],
            Self::Four => &[4],
            Self::Three => &[3],
            Self::Two => &[2],
        }
    }

    /// Returns the lowest legal point value (1 for an Ace).
    ///
    /// Strategy tables index the opponent's upcard by this value.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        self.values()[0]
    }

    /// Returns the rank's name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Jack => "Jack",
            Self::Ten => "Ten",
            Self::Nine => "Nine",
            Self::Eight => "Eight",
            Self::Seven => "Seven",
            Self::Six => "Six",
            Self::Five => "Five",
            Self::Four => "Four",
            Self::Three => "Three",
            Self::Two => "Two",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether both cards are worth the same points.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        self.rank.values() == other.rank.values()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
