//! Recursive resolution of a hand, including splits.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{PlayError, SplitError};
use crate::hand::Hand;
use crate::strategy::{Decision, Strategy};

/// Plays `hand` out against the opponent's `upcard` until every hand it
/// produces is terminal.
///
/// Hits repeat until the strategy abstains or the hand busts; a double draws
/// exactly one card and ends the hand. A split turns the pair into two
/// one-card hands that each receive a card and are then played in order, so
/// the result holds one hand per split branch, first card's branch first.
///
/// # Errors
///
/// Returns [`PlayError::Deal`] if the deck runs out and [`PlayError::Split`]
/// if the strategy splits a hand that is not a two-card pair.
pub fn play_hand(
    mut hand: Hand,
    upcard: Card,
    strategy: &Strategy,
    deck: &mut Deck,
) -> Result<Vec<Hand>, PlayError> {
    loop {
        let decision = strategy.decide(&hand, upcard);
        match decision {
            Decision::Skip => {
                log::debug!("\tStand on {hand} => {:?}", hand.best_value());
                return Ok(alloc::vec![hand]);
            }
            Decision::Hit => {
                let card = deck.deal_to(&mut hand)?;
                log::debug!("\tHit: draws {card} => {:?}", hand.best_value());
                if hand.is_bust() {
                    log::debug!("\tBust!");
                    return Ok(alloc::vec![hand]);
                }
            }
            Decision::Double => {
                let card = deck.deal_to(&mut hand)?;
                hand.double_bet();
                log::debug!(
                    "\tDouble to {}: draws {card} => {:?}",
                    hand.bet(),
                    hand.best_value()
                );
                return Ok(alloc::vec![hand]);
            }
            Decision::Split => return split_hand(&hand, upcard, strategy, deck),
        }
    }
}

fn split_hand(
    hand: &Hand,
    upcard: Card,
    strategy: &Strategy,
    deck: &mut Deck,
) -> Result<Vec<Hand>, PlayError> {
    let mut children = hand.split()?;
    if !hand.is_pair() {
        return Err(SplitError::Unpaired.into());
    }
    log::debug!("\tSplit {hand}");

    for child in &mut children {
        deck.deal_to(child)?;
    }

    let mut terminal = Vec::new();
    for child in children {
        terminal.extend(play_hand(child, upcard, strategy, deck)?);
    }
    Ok(terminal)
}

/// Plays a hand that may only hit or stand, such as the dealer's.
///
/// Any decision other than [`Decision::Skip`] draws a card. Drawing stops
/// once the strategy abstains or the hand busts.
///
/// # Errors
///
/// Returns [`PlayError::Deal`] if the deck runs out.
pub fn draw_out(
    hand: &mut Hand,
    upcard: Card,
    strategy: &Strategy,
    deck: &mut Deck,
) -> Result<(), PlayError> {
    while strategy.decide(hand, upcard) != Decision::Skip {
        let card = deck.deal_to(hand)?;
        log::debug!("\tDraws {card} => {:?}", hand.best_value());
        if hand.is_bust() {
            log::debug!("\tBust!");
            break;
        }
    }
    Ok(())
}
