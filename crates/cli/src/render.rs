//! Result rendering (tables and JSON)

use anyhow::{Context, Result};
use colored::Colorize;
use exchange_core::{ExchangeCost, ExchangeStrategy};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Values shown before eliding the rest of a vector
const PREVIEW_LEN: usize = 8;

/// Result of `run`
#[derive(Debug, Serialize)]
pub struct ExchangeOutcome {
    pub strategy: ExchangeStrategy,
    pub before: (Vec<i64>, Vec<i64>),
    pub after: (Vec<i64>, Vec<i64>),
    pub cost: ExchangeCost,
}

/// One strategy's line in `compare`
#[derive(Debug, Serialize)]
pub struct ComparisonEntry {
    #[serde(flatten)]
    pub cost: ExchangeCost,
    pub elapsed_ns: u64,
}

#[derive(Tabled)]
struct BindingRow {
    binding: &'static str,
    before: String,
    after: String,
}

#[derive(Tabled)]
struct CostRow {
    strategy: String,
    duplications: u32,
    transfers: u32,
    elements_duplicated: usize,
}

#[derive(Tabled)]
struct ComparisonRow {
    strategy: String,
    duplications: u32,
    transfers: u32,
    elements_duplicated: usize,
    elapsed: String,
}

impl From<&ExchangeCost> for CostRow {
    fn from(cost: &ExchangeCost) -> Self {
        Self {
            strategy: cost.strategy.to_string(),
            duplications: cost.duplications,
            transfers: cost.transfers,
            elements_duplicated: cost.elements_duplicated,
        }
    }
}

impl From<&ComparisonEntry> for ComparisonRow {
    fn from(entry: &ComparisonEntry) -> Self {
        Self {
            strategy: entry.cost.strategy.to_string(),
            duplications: entry.cost.duplications,
            transfers: entry.cost.transfers,
            elements_duplicated: entry.cost.elements_duplicated,
            elapsed: format_elapsed(entry.elapsed_ns),
        }
    }
}

pub fn print_outcome_table(outcome: &ExchangeOutcome) {
    println!(
        "{}",
        format!("✓ Exchanged with {} strategy", outcome.strategy)
            .green()
            .bold()
    );
    println!();

    let rows = vec![
        BindingRow {
            binding: "a",
            before: preview(&outcome.before.0),
            after: preview(&outcome.after.0),
        },
        BindingRow {
            binding: "b",
            before: preview(&outcome.before.1),
            after: preview(&outcome.after.1),
        },
    ];
    println!("{}", Table::new(rows));
    println!();

    println!("{}", "Cost".cyan().bold());
    println!("{}", Table::new(vec![CostRow::from(&outcome.cost)]));
}

pub fn print_comparison_table(size: usize, entries: &[ComparisonEntry]) {
    println!(
        "{}",
        format!("Strategy comparison ({} + {} elements)", size, size / 2)
            .cyan()
            .bold()
    );
    println!();

    let rows: Vec<ComparisonRow> = entries.iter().map(ComparisonRow::from).collect();
    println!("{}", Table::new(rows));
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}

/// Comma-joined values, eliding after `PREVIEW_LEN`
fn preview(values: &[i64]) -> String {
    if values.is_empty() {
        return "[]".to_string();
    }

    let shown: Vec<String> = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| v.to_string())
        .collect();

    if values.len() > PREVIEW_LEN {
        format!("[{}, … ({} total)]", shown.join(", "), values.len())
    } else {
        format!("[{}]", shown.join(", "))
    }
}

fn format_elapsed(nanos: u64) -> String {
    match nanos {
        n if n < 1_000 => format!("{} ns", n),
        n if n < 1_000_000 => format!("{:.2} µs", n as f64 / 1_000.0),
        n => format!("{:.2} ms", n as f64 / 1_000_000.0),
    }
}
