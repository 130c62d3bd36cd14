/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens sites of a fresh grid in uniformly random order until the
/// grid percolates and records the fraction of open sites at that moment.
/// Trials are independent, so they run in parallel, one grid per trial.
use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

/// z-score of a two-sided 95% confidence interval
const CONFIDENCE_95: f64 = 1.96;

/// Parameters of a threshold estimation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    pub grid_size: usize,
    pub trials: usize,
    /// Base seed; trial i uses `seed + i`. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl StatsConfig {
    pub fn new(grid_size: usize, trials: usize) -> Self {
        StatsConfig {
            grid_size,
            trials,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "number of trials must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `config.trials` independent experiments on `config.grid_size` grids
    pub fn run(config: &StatsConfig) -> Result<Self> {
        config.validate()?;

        let thresholds = (0..config.trials)
            .into_par_iter()
            .map(|trial| -> Result<f64> {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
                    None => StdRng::from_entropy(),
                };
                let threshold = run_trial(config.grid_size, &mut rng)?;
                debug!("trial {trial}: threshold {threshold:.6}");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;

        let stats = PercolationStats { thresholds };
        info!(
            "{} trials on {}x{} grid: mean {:.6}, stddev {:.6}",
            config.trials,
            config.grid_size,
            config.grid_size,
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    /// Per-trial thresholds in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation; NaN for a single trial
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len();
        if t < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.thresholds.iter().map(|x| (x - mean).powi(2)).sum();
        (sum_sq / (t - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    /// Lower endpoint of the 95% confidence interval
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// Upper endpoint of the 95% confidence interval
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }
}

/// Open sites of an n-by-n grid in random order until it percolates.
/// Returns the open fraction at that point.
pub fn run_trial<R: rand::Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    let mut order: Vec<usize> = (0..n * n).collect();
    order.shuffle(rng);

    for idx in order {
        grid.open(idx / n, idx % n)?;
        if grid.percolates() {
            break;
        }
    }
    Ok(grid.open_fraction())
}
