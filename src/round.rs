//! A single round: opening deal, naturals, play and settlement.

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::options::{RoundingMode, SimOptions};
use crate::play::{draw_out, play_hand};
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::strategy::Strategy;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

#[expect(clippy::cast_possible_wrap, reason = "wagers fit in isize")]
const fn signed(amount: usize) -> isize {
    amount as isize
}

/// Returns the winnings of a natural blackjack on `bet`.
#[must_use]
pub fn blackjack_payout(bet: usize, options: &SimOptions) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for wagers"
    )]
    let winnings = round_amount(bet as f64 * options.blackjack_pays, options.rounding_blackjack);
    if options.turbo_blackjack {
        winnings * options.turbo
    } else {
        winnings
    }
}

/// Settles one terminal player hand against the dealer's final hand.
#[must_use]
pub fn settle_hand(
    hand_index: usize,
    hand: &Hand,
    dealer: &Hand,
    options: &SimOptions,
) -> HandResult {
    let bet = hand.bet();
    let win = signed(bet * options.turbo);

    let (outcome, net) = if hand.is_bust() {
        (HandOutcome::Lose, -signed(bet))
    } else if dealer.is_bust() || hand.beats(dealer) {
        (HandOutcome::Win, win)
    } else if dealer.beats(hand) {
        (HandOutcome::Lose, -signed(bet))
    } else {
        (HandOutcome::Push, 0)
    };

    log::debug!("Hand {hand_index}: {outcome:?} {net:+}");

    HandResult {
        hand_index,
        outcome,
        bet,
        net,
        player_value: hand.best_value(),
    }
}

/// Plays one full round from `deck` with a wager of `options.bet`.
///
/// Cards are dealt player, dealer, player, dealer. A dealer natural beats
/// anything but a player natural, and a player natural against a dealer
/// without one is paid at once via [`blackjack_payout`]. Otherwise the
/// player's hand is played out (possibly splitting), the dealer draws, and
/// every resulting hand is settled on its own.
///
/// # Errors
///
/// Returns [`PlayError::Deal`] if the deck runs out mid-round and
/// [`PlayError::Split`] if the player strategy splits a hand that is not a
/// pair.
pub fn play_round(
    deck: &mut Deck,
    player_strategy: &Strategy,
    dealer_strategy: &Strategy,
    options: &SimOptions,
) -> Result<RoundResult, PlayError> {
    log::debug!("Playing hand - {} cards remain", deck.remaining());

    let mut player = Hand::new(options.bet);
    let mut dealer = Hand::new(0);

    let player_up = deck.deal_to(&mut player)?;
    let dealer_up = deck.deal_to(&mut dealer)?;
    deck.deal_to(&mut player)?;
    deck.deal_to(&mut dealer)?;

    log::debug!("\tPlayer => {:?} {player}", player.values());
    log::debug!("\tDealer => {:?} {dealer}", dealer.values());

    let player_blackjack = player.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    if dealer_blackjack && !player_blackjack {
        log::debug!("Dealer wins! Blackjack!");
        return Ok(RoundResult {
            hands: alloc::vec![HandResult {
                hand_index: 0,
                outcome: HandOutcome::Lose,
                bet: player.bet(),
                net: -signed(player.bet()),
                player_value: player.best_value(),
            }],
            dealer_value: dealer.best_value(),
            dealer_bust: false,
            dealer_blackjack,
        });
    }

    if player_blackjack && !dealer_blackjack {
        log::debug!("Player wins! Blackjack!");
        return Ok(RoundResult {
            hands: alloc::vec![HandResult {
                hand_index: 0,
                outcome: HandOutcome::Blackjack,
                bet: player.bet(),
                net: signed(blackjack_payout(player.bet(), options)),
                player_value: player.best_value(),
            }],
            dealer_value: dealer.best_value(),
            dealer_bust: false,
            dealer_blackjack,
        });
    }

    log::debug!("Player's turn ...");
    let hands = play_hand(player, dealer_up, player_strategy, deck)?;

    log::debug!("Dealer's turn ...");
    draw_out(&mut dealer, player_up, dealer_strategy, deck)?;

    let results: Vec<HandResult> = hands
        .iter()
        .enumerate()
        .map(|(index, hand)| settle_hand(index, hand, &dealer, options))
        .collect();

    Ok(RoundResult {
        hands: results,
        dealer_value: dealer.best_value(),
        dealer_bust: dealer.is_bust(),
        dealer_blackjack,
    })
}
