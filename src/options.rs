//! Simulation configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a simulation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SimOptions;
///
/// let options = SimOptions::default()
///     .with_rounds(10)
///     .with_turbo(1)
///     .with_turbo_blackjack(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimOptions {
    /// Wager placed on every round.
    pub bet: usize,
    /// Multiplier applied to the wager on every win.
    pub turbo: usize,
    /// Number of shoes (shuffle cycles) to play.
    pub rounds: usize,
    /// A new round starts only while more cards than this remain.
    pub reshuffle_threshold: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether the turbo multiplier also scales blackjack payouts.
    pub turbo_blackjack: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            bet: 100,
            turbo: 3,
            rounds: 1,
            reshuffle_threshold: 20,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            turbo_blackjack: true,
        }
    }
}

impl SimOptions {
    /// Sets the wager per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_bet(25);
    /// assert_eq!(options.bet, 25);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: usize) -> Self {
        self.bet = bet;
        self
    }

    /// Sets the win multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_turbo(1);
    /// assert_eq!(options.turbo, 1);
    /// ```
    #[must_use]
    pub const fn with_turbo(mut self, turbo: usize) -> Self {
        self.turbo = turbo;
        self
    }

    /// Sets the number of shoes to play.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_rounds(500);
    /// assert_eq!(options.rounds, 500);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets how many cards must remain for a new round to start.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_reshuffle_threshold(26);
    /// assert_eq!(options.reshuffle_threshold, 26);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{RoundingMode, SimOptions};
    ///
    /// let options = SimOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether the turbo multiplier scales blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_turbo_blackjack(false);
    /// assert!(!options.turbo_blackjack);
    /// ```
    #[must_use]
    pub const fn with_turbo_blackjack(mut self, scaled: bool) -> Self {
        self.turbo_blackjack = scaled;
        self
    }
}
