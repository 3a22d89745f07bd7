//! Canonical dealer and player rules.
//!
//! Player tables follow the basic strategy published at
//! <https://wizardofodds.com/games/blackjack/>, grouped by the dealer upcard:
//! low (2 through 6) or high (7 through 10, and the Ace).

use crate::card::{Card, Rank};
use crate::hand::Hand;

use super::Decision;

/// Returns whether the upcard is a 2 through 6.
fn low_upcard(upcard: Card) -> bool {
    matches!(upcard.rank.base_value(), 2..=6)
}

/// Dealer: hit while the best total is below 17.
#[must_use]
pub fn hit_under_17(mine: &Hand, _upcard: Card) -> Decision {
    match mine.best_value() {
        Some(value) if value < 17 => Decision::Hit,
        _ => Decision::Skip,
    }
}

/// Dealer: hit a 17 made of exactly two cards.
///
/// This checks the card count, not whether an Ace is counted as 11, so a
/// three-card soft 17 such as Ace, Two, Four stands.
#[must_use]
pub fn hit_soft_17(mine: &Hand, _upcard: Card) -> Decision {
    if mine.best_value() == Some(17) && mine.len() == 2 {
        Decision::Hit
    } else {
        Decision::Skip
    }
}

/// Player: hit or double by best total.
#[must_use]
pub fn hard_totals(mine: &Hand, upcard: Card) -> Decision {
    let Some(value) = mine.best_value() else {
        return Decision::Skip;
    };
    let double_or_hit = if mine.len() == 2 {
        Decision::Double
    } else {
        Decision::Hit
    };

    if low_upcard(upcard) {
        match value {
            4..=8 => Decision::Hit,
            9..=11 => double_or_hit,
            _ => Decision::Skip,
        }
    } else {
        match value {
            4..=9 | 12..=16 => Decision::Hit,
            10 | 11 => double_or_hit,
            _ => Decision::Skip,
        }
    }
}

/// Player: hit soft totals. Abstains on hands with a single total.
#[must_use]
pub fn soft_totals(mine: &Hand, upcard: Card) -> Decision {
    if !mine.is_soft() {
        return Decision::Skip;
    }

    match (low_upcard(upcard), mine.best_value()) {
        (true, Some(13..=15)) | (false, Some(13..=18)) => Decision::Hit,
        _ => Decision::Skip,
    }
}

/// Player: split pairs. Abstains unless the hand is two cards of equal value.
#[must_use]
pub fn split_pairs(mine: &Hand, upcard: Card) -> Decision {
    if !mine.is_pair() {
        return Decision::Skip;
    }
    let Some(card) = mine.up_card() else {
        return Decision::Skip;
    };

    let split = match card.rank {
        Rank::Eight | Rank::Ace => true,
        Rank::Two | Rank::Three | Rank::Six | Rank::Seven | Rank::Nine => low_upcard(upcard),
        _ => false,
    };

    if split {
        Decision::Split
    } else {
        Decision::Skip
    }
}
