//! dcsort: sort a list of integers from the command line.
//!
//! With no values, sorts the demo array for the chosen algorithm and prints it.

use anyhow::Context;
use clap::Parser;
use dcsort::Algorithm;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dcsort",
    about = "Sort integers with a recursive merge sort or quicksort",
    version
)]
struct Args {
    /// Algorithm to use: merge or quick
    #[arg(short, long, default_value_t = Algorithm::Merge)]
    algorithm: Algorithm,

    /// First index of the inclusive range to sort
    #[arg(long, requires = "end")]
    start: Option<usize>,

    /// Last index of the inclusive range to sort
    #[arg(long, requires = "start")]
    end: Option<usize>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Values to sort
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn demo_values(algorithm: Algorithm) -> Vec<i64> {
    match algorithm {
        Algorithm::Merge => vec![5, 4, 3, 2, 1],
        Algorithm::Quick => (1..=10).rev().collect(),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dcsort=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Sorts the given values, or the demo array when none are given.
fn run(args: Args) -> anyhow::Result<Vec<i64>> {
    let mut values = if args.values.is_empty() {
        info!(algorithm = %args.algorithm, "no values given, using demo input");
        demo_values(args.algorithm)
    } else {
        args.values
    };
    debug!(algorithm = %args.algorithm, len = values.len(), "sorting");

    match (args.start, args.end) {
        (Some(start), Some(end)) => args
            .algorithm
            .sort_range(&mut values, start, end)
            .with_context(|| format!("cannot sort range [{start}, {end}]"))?,
        _ => args.algorithm.sort(&mut values),
    }

    Ok(values)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let values = run(args)?;
    println!("{values:?}");
    Ok(())
}
