// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod stats;
pub mod union_find;

pub use crate::error::PercolationError;
pub use crate::percolation::Percolation;
pub use crate::stats::{PercolationStats, StatsConfig};
pub use crate::union_find::UnionFind;
