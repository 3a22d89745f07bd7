//! Command-line blackjack simulator.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{SimOptions, Simulator};
use clap::Parser;

/// Simulate blackjack rounds and report the average result per hand.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The number of complete decks to play
    #[arg(long, default_value_t = 1)]
    rounds: usize,

    /// The level of turbo boost applied to every win
    #[arg(long, default_value_t = 3)]
    turbo: usize,

    /// Print out the hands as they're being played
    #[arg(long)]
    verbose: bool,

    /// The wager placed on every hand
    #[arg(long, default_value_t = 100)]
    bet: usize,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Start no new hand once this many cards or fewer remain
    #[arg(long, default_value_t = 20)]
    threshold: usize,

    /// Pay blackjacks without the turbo boost
    #[arg(long)]
    no_turbo_blackjack: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    log::debug!("seed {seed}");

    let options = SimOptions::default()
        .with_rounds(args.rounds)
        .with_turbo(args.turbo)
        .with_bet(args.bet)
        .with_reshuffle_threshold(args.threshold)
        .with_turbo_blackjack(!args.no_turbo_blackjack);

    let mut simulator = Simulator::new(options, seed);
    let summary = match simulator.run() {
        Ok(summary) => summary,
        Err(err) => {
            log::error!("simulation failed: {err}");
            process::exit(1);
        }
    };

    if summary.abandoned > 0 {
        log::warn!("{} rounds abandoned on an empty deck", summary.abandoned);
    }

    println!(
        "Win/Loss per Hand: {:.1}\n",
        summary.win_loss_per_hand().unwrap_or_default()
    );
}
