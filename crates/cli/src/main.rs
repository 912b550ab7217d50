//! figura - enumeration driver for discrete figures.
//!
//! # Usage
//!
//! ```bash
//! # 4-connected figures up to size 10, no complement check
//! figura
//!
//! # several connectivity pairs in one invocation
//! figura 44 84 88 -n12
//!
//! # parallel run, machine-readable output
//! figura 40 -n14 --mt --csv
//! ```

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;

use figura_core::Rules;
use figura_engine::{run_census, CensusOptions, CensusReport, FIXED_FIGURES_4, FIXED_FIGURES_8};

#[derive(Parser, Debug)]
#[command(name = "figura")]
#[command(about = "Exhaustive enumeration of discrete figures under configurable connectivity")]
struct Args {
    /// Connectivity selectors: chosen adjacency then complement connectivity
    /// (40, 44, 48, 80, 84 or 88); multiples allowed.
    #[arg(value_name = "RULES")]
    rules: Vec<String>,

    /// Maximum figure size.
    #[arg(short = 'n', long = "size", default_value_t = 10)]
    size: u32,

    /// Collect and print generator statistics.
    #[arg(long, conflicts_with_all = ["mt", "alt"])]
    stat: bool,

    /// Enumerate split segments on a thread pool.
    #[arg(long)]
    mt: bool,

    /// Split depth for --mt.
    #[arg(long, default_value_t = 8)]
    depth: u32,

    /// Drive the step-once interface instead of the internal loop.
    #[arg(long, conflicts_with = "mt")]
    alt: bool,

    /// One machine-readable line per run: tag, time_ms, total.
    #[arg(long)]
    csv: bool,

    /// One JSON report per run.
    #[arg(long, conflicts_with = "csv")]
    json: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(1);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let selectors: Vec<&str> = if args.rules.is_empty() {
        vec!["40"]
    } else {
        args.rules.iter().map(String::as_str).collect()
    };
    let rules: Vec<Rules> = selectors
        .iter()
        .map(|s| s.parse::<Rules>().map_err(|e| anyhow!("{s}: {e}")))
        .collect::<Result<_>>()?;

    let options = CensusOptions {
        nmax: args.size,
        stats: args.stat,
        stepwise: args.alt,
        split_depth: args.mt.then_some(args.depth),
    };

    for rules in rules {
        let start = Instant::now();
        let report = run_census(rules, &options).with_context(|| format!("rules {rules}"))?;
        let elapsed = start.elapsed();
        if args.csv {
            print_csv(&report, elapsed);
        } else if args.json {
            print_json(&report, elapsed)?;
        } else {
            print_table(&report, elapsed);
        }
    }
    Ok(())
}

fn print_csv(report: &CensusReport, elapsed: Duration) {
    println!(
        "a={}_b={}_n={}, {}, {}",
        report.rules.chosen,
        report.rules.complement,
        report.nmax,
        elapsed.as_millis(),
        report.total
    );
}

fn print_json(report: &CensusReport, elapsed: Duration) -> Result<()> {
    #[derive(Serialize)]
    struct RunOutput<'a> {
        rules: Rules,
        nmax: u32,
        counts: &'a [u64],
        total: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        stats: Option<figura_core::GeneratorStats>,
        time_ms: u128,
    }
    println!(
        "{}",
        serde_json::to_string(&RunOutput {
            rules: report.rules,
            nmax: report.nmax,
            counts: &report.counts,
            total: report.total,
            stats: report.stats,
            time_ms: elapsed.as_millis(),
        })?
    );
    Ok(())
}

fn print_table(report: &CensusReport, elapsed: Duration) {
    println!(
        "Generation of {}-connected figures up to size {}: {} in {:.3} s ({:.2} Mfig/s)",
        report.rules,
        report.nmax,
        report.total,
        elapsed.as_secs_f64(),
        report.total as f64 / elapsed.as_secs_f64() / 1e6
    );
    println!("{:>4}  {:>16}  {:>16}", "n", "count", "reference");
    for (k, &count) in report.counts.iter().enumerate() {
        let size = k + 1;
        match reference_count(report.rules, size) {
            Some(reference) => println!("{size:>4}  {count:>16}  {reference:>16}"),
            None => println!("{size:>4}  {count:>16}  {:>16}", "-"),
        }
    }
    if let Some(stats) = report.stats {
        println!(
            "stats: non-leaf {} / leaf {} / rejected {}",
            stats.non_leaf, stats.leaf, stats.rejected
        );
    }
}

/// Published counts exist for the unconstrained complements only.
fn reference_count(rules: Rules, size: usize) -> Option<u64> {
    if rules.complement != 0 {
        return None;
    }
    let table: &[u64] = if rules.chosen == 4 {
        &FIXED_FIGURES_4
    } else {
        &FIXED_FIGURES_8
    };
    table.get(size - 1).copied()
}
