//! A blackjack strategy simulator with optional `no_std` support.
//!
//! The crate values hands with every Ace reading, decides actions with
//! ordered rule chains, plays split hands out recursively, and settles each
//! round. A [`Simulator`] repeats rounds over many shuffled decks to measure a
//! strategy's average result per hand.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{SimOptions, Simulator};
//!
//! let options = SimOptions::default().with_rounds(100);
//! let mut simulator = Simulator::new(options, 42);
//! let summary = simulator.run().unwrap();
//! let _ = summary.win_loss_per_hand();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod play;
pub mod result;
pub mod round;
pub mod simulation;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, PlayError, SplitError};
pub use hand::Hand;
pub use options::{RoundingMode, SimOptions};
pub use play::{draw_out, play_hand};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::play_round;
pub use simulation::{Simulator, Summary};
pub use strategy::{Decision, Rule, Strategy};
