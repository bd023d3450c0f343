use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use ridebus_bot::Driver;
use ridebus_core::game::Session;
use ridebus_core::model::bankroll::Stakes;
use ridebus_sim::logging::init_logging;
use ridebus_sim::report::SummaryReport;
use ridebus_sim::table::{NoopActuator, SimTable};

/// Simulated Ride the Bus session: plays the optimal-bet strategy against
/// a shuffled deck and reports how the bankroll fares.
#[derive(Debug, Parser)]
#[command(name = "ridebus-sim", author, version, about = "Ride the Bus strategy simulator")]
struct Cli {
    /// Number of attempts to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    attempts: u64,

    /// RNG seed for the deal and for tie-breaks (random when omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Amount forfeited on a lost attempt.
    #[arg(long, value_name = "AMOUNT", default_value_t = 500)]
    stake: i64,

    /// Amount won for completing all four rounds.
    #[arg(long, value_name = "AMOUNT", default_value_t = 10_000)]
    payout: i64,

    /// Starting balance.
    #[arg(long, value_name = "AMOUNT", default_value_t = 0)]
    opening_balance: i64,

    /// Probability that a dealt card goes unrecognized (0.0-1.0).
    #[arg(long, value_name = "RATE", default_value_t = 0.0)]
    miss_rate: f64,

    /// Write the run summary as JSON to this path.
    #[arg(long, value_name = "FILE")]
    summary_json: Option<PathBuf>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.miss_rate) {
        bail!("miss rate must be between 0.0 and 1.0");
    }
    if cli.attempts == 0 {
        bail!("attempts must be greater than zero");
    }

    init_logging(&cli.log_level);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let stakes = Stakes {
        stake: cli.stake,
        payout: cli.payout,
        opening_balance: cli.opening_balance,
    };

    let session = Session::with_seed(stakes, seed);
    let table = SimTable::new(seed, cli.miss_rate);
    let mut driver = Driver::new(session, table, NoopActuator);

    for _ in 0..cli.attempts {
        driver.recognizer_mut().next_attempt();
        driver
            .play_attempt()
            .map_err(|err| anyhow::anyhow!("driver broke the session protocol: {err:?}"))?;
    }

    let report = SummaryReport::from_session(driver.session());
    println!(
        "seed {}: {} attempts, {} won / {} lost ({:.2}% win rate)",
        report.seed,
        report.attempts,
        report.wins,
        report.losses,
        report.win_rate * 100.0
    );
    println!("Final balance: ${}", report.final_balance);

    if let Some(path) = cli.summary_json {
        report
            .write_json(&path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
