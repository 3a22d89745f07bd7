//! Ordered decision rules.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

pub mod rules;

/// Result of a strategy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decision {
    /// No action; the hand stands.
    #[default]
    Skip,
    /// Draw one card.
    Hit,
    /// Double the bet and draw exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

/// A pure decision rule over the acting hand and the opponent's upcard.
///
/// Rules return [`Decision::Skip`] to abstain.
pub type Rule = fn(&Hand, Card) -> Decision;

/// An ordered list of rules where the first non-[`Decision::Skip`] result wins.
///
/// Order encodes priority: a split rule must come before a hit/stand table so
/// that a splittable pair is not taken by the table first.
#[derive(Debug, Clone)]
pub struct Strategy {
    rules: Vec<Rule>,
}

impl Strategy {
    /// Creates a strategy from rules in priority order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The dealer's fixed rules: hit below 17 and on a two-card 17.
    #[must_use]
    pub fn dealer() -> Self {
        Self::new(alloc::vec![rules::hit_under_17, rules::hit_soft_17])
    }

    /// The player's basic strategy: pair splits, then hard and soft tables.
    #[must_use]
    pub fn player() -> Self {
        Self::new(alloc::vec![
            rules::split_pairs,
            rules::hard_totals,
            rules::soft_totals,
        ])
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decides what `mine` should do against `upcard`.
    #[must_use]
    pub fn decide(&self, mine: &Hand, upcard: Card) -> Decision {
        self.rules
            .iter()
            .map(|rule| rule(mine, upcard))
            .find(|&decision| decision != Decision::Skip)
            .unwrap_or_default()
    }
}
