//! exchange-demo - Contrast copy-based and move-based exchange of two vectors
//!
//! Reproduces `std::vector<int> a, b; swap(a, b);` once per strategy.

mod logging;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use exchange_core::{exchange_by_copy, exchange_by_move, ExchangeCost, ExchangeStrategy};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use logging::LogFormat;
use render::{ComparisonEntry, ExchangeOutcome};

/// Default element count for `compare`
const DEFAULT_COMPARE_SIZE: usize = 100_000;

#[derive(Parser)]
#[command(name = "exchange-demo")]
#[command(about = "Contrast copy-based and move-based exchange of two vectors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log line format
    #[arg(
        long,
        global = true,
        env = "EXCHANGE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    log_format: LogFormat,

    /// Result format on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange two vectors with one strategy
    Run {
        /// Strategy (copy or move)
        #[arg(short, long, default_value = "move")]
        strategy: ExchangeStrategy,

        /// Left vector, comma separated (empty when omitted)
        #[arg(long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
        left: Vec<i64>,

        /// Right vector, comma separated (empty when omitted)
        #[arg(long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
        right: Vec<i64>,
    },

    /// Exchange the same pair of vectors with both strategies and time them
    Compare {
        /// Elements in the left vector (the right one gets half as many)
        #[arg(short = 'n', long, default_value_t = DEFAULT_COMPARE_SIZE)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_format);
    debug!(version = exchange_core::VERSION, "exchange-demo starting");

    match cli.command {
        Commands::Run {
            strategy,
            left,
            right,
        } => {
            let outcome = run(strategy, left, right)?;
            match cli.output {
                OutputFormat::Table => render::print_outcome_table(&outcome),
                OutputFormat::Json => render::print_json(&outcome)?,
            }
        }

        Commands::Compare { size } => {
            let entries = compare(size)?;
            match cli.output {
                OutputFormat::Table => render::print_comparison_table(size, &entries),
                OutputFormat::Json => render::print_json(&entries)?,
            }
        }
    }

    Ok(())
}

/// Exchange `left` and `right` with `strategy` and check the result
fn run(strategy: ExchangeStrategy, left: Vec<i64>, right: Vec<i64>) -> Result<ExchangeOutcome> {
    let cost = ExchangeCost::estimate(strategy, left.len(), right.len());
    let (mut a, mut b) = (left.clone(), right.clone());

    exchange(strategy, &mut a, &mut b);
    verify(strategy, &left, &right, &a, &b)?;

    info!(
        strategy = %strategy,
        left_len = left.len(),
        right_len = right.len(),
        elements_duplicated = cost.elements_duplicated,
        "Exchange completed"
    );

    Ok(ExchangeOutcome {
        strategy,
        before: (left, right),
        after: (a, b),
        cost,
    })
}

/// Exchange one generated pair with every strategy, timing each run
fn compare(size: usize) -> Result<Vec<ComparisonEntry>> {
    let left: Vec<i64> = (0..size as i64).collect();
    let right: Vec<i64> = (0..(size / 2) as i64).map(|v| -v).collect();

    info!(left_len = left.len(), right_len = right.len(), "Comparing strategies");

    let mut entries = Vec::with_capacity(ExchangeStrategy::ALL.len());
    for strategy in ExchangeStrategy::ALL {
        let (mut a, mut b) = (left.clone(), right.clone());

        let started = Instant::now();
        exchange(strategy, &mut a, &mut b);
        let elapsed = started.elapsed();

        verify(strategy, &left, &right, &a, &b)?;

        info!(
            strategy = %strategy,
            elapsed_us = elapsed.as_micros() as u64,
            "Strategy measured"
        );

        entries.push(ComparisonEntry {
            cost: ExchangeCost::estimate(strategy, left.len(), right.len()),
            elapsed_ns: duration_nanos(elapsed)?,
        });
    }

    Ok(entries)
}

fn exchange(strategy: ExchangeStrategy, a: &mut Vec<i64>, b: &mut Vec<i64>) {
    match strategy {
        ExchangeStrategy::Duplicating => exchange_by_copy(a, b),
        ExchangeStrategy::Transferring => exchange_by_move(a, b),
    }
}

/// Check `a := old(b)` and `b := old(a)`
fn verify(
    strategy: ExchangeStrategy,
    old_a: &[i64],
    old_b: &[i64],
    new_a: &[i64],
    new_b: &[i64],
) -> Result<()> {
    if new_a != old_b || new_b != old_a {
        bail!("Postcondition violated: {} exchange did not swap the values", strategy);
    }
    Ok(())
}

fn duration_nanos(elapsed: Duration) -> Result<u64> {
    u64::try_from(elapsed.as_nanos()).context("Elapsed time does not fit in u64 nanoseconds")
}
