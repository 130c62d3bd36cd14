/// Union-Find (Disjoint Sets) over a fixed universe, weighted by tree size
use crate::error::{PercolationError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    // Only meaningful at roots
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            count: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p < self.parent.len() {
            Ok(())
        } else {
            Err(PercolationError::IndexOutOfRange {
                index: p,
                bound: self.parent.len(),
            })
        }
    }

    // Path halving: every visited node is re-pointed to its grandparent.
    fn root(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Find the root of element p, halving the path on the way up
    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        Ok(self.root(p))
    }

    /// Union the sets containing p and q, attaching the smaller tree under the larger
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        self.validate(p)?;
        self.validate(q)?;

        let root_p = self.root(p);
        let root_q = self.root(q);
        if root_p == root_q {
            return Ok(());
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Number of elements in the component containing p
    pub fn component_size(&mut self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    /// Get all sets as groups of indices, each ascending, ordered by smallest member
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut root_to_group: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count);

        for i in 0..self.parent.len() {
            let root = self.root(i);
            let slot = *root_to_group.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(i);
        }

        groups
    }
}
