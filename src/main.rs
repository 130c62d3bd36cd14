use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use percolation::{PercolationStats, StatsConfig};

/// Percolation - Monte Carlo estimate of the site percolation threshold
///
/// Opens random sites of GRID_SIZE x GRID_SIZE grids until each percolates,
/// then reports the mean open fraction with a 95% confidence interval
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Side length of the square grid
    #[clap(value_name = "GRID_SIZE")]
    grid_size: usize,

    /// Number of independent trials
    #[clap(value_name = "TRIALS")]
    trials: usize,

    /// Seed for reproducible runs (trial i uses seed + i)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Number of threads for parallel trials
    #[clap(short = 't', long = "threads", default_value = "8")]
    threads: usize,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let config = StatsConfig {
        grid_size: args.grid_size,
        trials: args.trials,
        seed: args.seed,
    };
    let stats = PercolationStats::run(&config)?;

    println!("mean                    = {:.6}", stats.mean());
    println!("stddev                  = {:.6}", stats.stddev());
    println!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_low(),
        stats.confidence_high()
    );

    Ok(())
}
