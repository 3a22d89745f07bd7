//! Multi-shoe simulation driver.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::options::SimOptions;
use crate::round::play_round;
use crate::strategy::Strategy;

/// Totals accumulated over a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Shoes (shuffle cycles) played.
    pub shoes: usize,
    /// Rounds played to completion.
    pub rounds: usize,
    /// Rounds abandoned because the deck ran out mid-round.
    pub abandoned: usize,
    /// Net winnings over all completed rounds.
    pub cash: isize,
}

impl Summary {
    /// Returns the average net result per round, or `None` if no round was
    /// played.
    #[must_use]
    pub fn win_loss_per_hand(&self) -> Option<f64> {
        if self.rounds == 0 {
            return None;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for simulation totals"
        )]
        let average = self.cash as f64 / self.rounds as f64;
        Some(average)
    }
}

/// Plays shoe after shoe of rounds with one player against the dealer.
///
/// The simulator owns its deck and random source; the same seed and options
/// always produce the same [`Summary`].
pub struct Simulator {
    deck: Deck,
    rng: ChaCha8Rng,
    options: SimOptions,
    player: Strategy,
    dealer: Strategy,
}

impl Simulator {
    /// Creates a simulator with the canonical player and dealer strategies.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{SimOptions, Simulator};
    ///
    /// let mut simulator = Simulator::new(SimOptions::default(), 42);
    /// let summary = simulator.run().unwrap();
    /// assert_eq!(summary.shoes, 1);
    /// ```
    #[must_use]
    pub fn new(options: SimOptions, seed: u64) -> Self {
        Self::with_strategies(options, seed, Strategy::player(), Strategy::dealer())
    }

    /// Creates a simulator with custom strategies.
    #[must_use]
    pub fn with_strategies(
        options: SimOptions,
        seed: u64,
        player: Strategy,
        dealer: Strategy,
    ) -> Self {
        Self {
            deck: Deck::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
            player,
            dealer,
        }
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimOptions {
        &self.options
    }

    /// Shuffles the deck and plays rounds until no more than
    /// `reshuffle_threshold` cards remain.
    ///
    /// A round that runs out of cards is abandoned, left out of the summary,
    /// and ends the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Split`] if the player strategy splits a hand that
    /// is not a pair.
    pub fn play_shoe(&mut self, summary: &mut Summary) -> Result<(), PlayError> {
        self.deck.shuffle(&mut self.rng);
        summary.shoes += 1;

        while self.deck.remaining() > self.options.reshuffle_threshold {
            match play_round(&mut self.deck, &self.player, &self.dealer, &self.options) {
                Ok(result) => {
                    let net = result.net();
                    if net != 0 {
                        log::debug!("{net:+}");
                    }
                    summary.cash += net;
                    summary.rounds += 1;
                }
                Err(PlayError::Deal(err)) => {
                    log::warn!("round abandoned: {err}");
                    summary.abandoned += 1;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Plays `options.rounds` shoes.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Split`] if the player strategy splits a hand that
    /// is not a pair.
    pub fn run(&mut self) -> Result<Summary, PlayError> {
        let mut summary = Summary::default();
        for _ in 0..self.options.rounds {
            self.play_shoe(&mut summary)?;
        }
        Ok(summary)
    }
}
