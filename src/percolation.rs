/// N-by-N percolation grid with virtual top and bottom sentinels
///
/// Connectivity is tracked in two union-find instances:
/// - `full_uf` links the top row to a virtual top and the bottom row to a
///   virtual bottom, so `percolates()` is a single connectivity query.
/// - `top_uf` only has the virtual top. `is_full()` asks this one, which keeps
///   bottom-row sites from looking full just because they share the virtual
///   bottom with a percolating path (backwash).
use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    full_uf: UnionFind,
    top_uf: UnionFind,
    open_count: usize,
}

impl Percolation {
    /// Create an n-by-n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive".to_string(),
            ));
        }
        let sites = n.checked_mul(n).ok_or_else(|| {
            PercolationError::InvalidArgument(format!("grid size {n} overflows site count"))
        })?;

        let mut full_uf = UnionFind::new(sites + 2);
        let mut top_uf = UnionFind::new(sites + 1);
        let top = sites;
        let bottom = sites + 1;

        for col in 0..n {
            full_uf.union(col, top)?;
            top_uf.union(col, top)?;
        }
        for idx in n * (n - 1)..sites {
            full_uf.union(idx, bottom)?;
        }

        Ok(Percolation {
            n,
            open: vec![false; sites],
            full_uf,
            top_uf,
            open_count: 0,
        })
    }

    /// Side length of the grid
    pub fn grid_size(&self) -> usize {
        self.n
    }

    fn top(&self) -> usize {
        self.n * self.n
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        for coord in [row, col] {
            if coord >= self.n {
                return Err(PercolationError::IndexOutOfRange {
                    index: coord,
                    bound: self.n,
                });
            }
        }
        Ok(row * self.n + col)
    }

    /// Open the site at (row, col) and connect it to its open neighbours.
    /// Opening an already open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.index(row, col)?;
        if self.open[idx] {
            return Ok(());
        }
        self.open[idx] = true;
        self.open_count += 1;

        let n = self.n;
        let neighbors = [
            (row > 0).then(|| idx - n),
            (row + 1 < n).then(|| idx + n),
            (col > 0).then(|| idx - 1),
            (col + 1 < n).then(|| idx + 1),
        ];
        for neighbor in neighbors.into_iter().flatten() {
            if self.open[neighbor] {
                self.full_uf.union(idx, neighbor)?;
                self.top_uf.union(idx, neighbor)?;
            }
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.open[idx])
    }

    /// A site is full when it is open and water can reach it from the top row
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        if !self.open[idx] {
            return Ok(false);
        }
        let top = self.top();
        self.top_uf.connected(idx, top)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of the n*n sites that are open
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.open.len() as f64
    }

    /// True when some open path joins the top row to the bottom row
    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.bottom());
        // Both sentinels exist for every n >= 1
        self.full_uf.connected(top, bottom).unwrap_or(false)
    }
}
