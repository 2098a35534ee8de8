//! Spin result generation

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use sr_core::GridConfig;

/// A committed spin outcome: `size` columns of `size` symbol indices.
///
/// Generated once per spin before any reel motion starts and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultGrid {
    columns: Vec<Vec<u8>>,
}

impl ResultGrid {
    /// Wrap explicit columns (used by tests and forced outcomes)
    pub fn new(columns: Vec<Vec<u8>>) -> Self {
        Self { columns }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (0 for an empty grid)
    pub fn rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Symbol at (column, row); 0 for out-of-range positions
    pub fn symbol(&self, col: usize, row: usize) -> u8 {
        self.columns
            .get(col)
            .and_then(|c| c.get(row))
            .copied()
            .unwrap_or(0)
    }

    /// One column's symbols, top to bottom
    pub fn column(&self, col: usize) -> &[u8] {
        self.columns.get(col).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Generates spin outcomes and filler symbols.
///
/// Demo-grade randomness: uniform over the symbol alphabet, seedable for
/// reproducible sessions, no fairness guarantees of any kind.
#[derive(Debug)]
pub struct ResultGenerator {
    grid_size: u8,
    alphabet: u8,
    rng: StdRng,
}

impl ResultGenerator {
    /// Generator with an OS-entropy seed
    pub fn new(grid: &GridConfig) -> Self {
        Self {
            grid_size: grid.size,
            alphabet: grid.symbol_alphabet,
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed
    pub fn from_seed(grid: &GridConfig, seed: u64) -> Self {
        Self {
            grid_size: grid.size,
            alphabet: grid.symbol_alphabet,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Re-seed for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// One uniform symbol index in `1..=alphabet`
    pub fn random_symbol(&mut self) -> u8 {
        self.rng.gen_range(1..=self.alphabet)
    }

    /// A full result grid. Total function: always `size` columns of
    /// `size` in-alphabet symbols.
    pub fn generate(&mut self) -> ResultGrid {
        let size = self.grid_size as usize;
        let columns = (0..size)
            .map(|_| (0..size).map(|_| self.random_symbol()).collect())
            .collect();
        ResultGrid::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_grid_shape_and_bounds() {
        let grid_cfg = GridConfig::default();
        let mut gen = ResultGenerator::from_seed(&grid_cfg, 7);

        for _ in 0..1000 {
            let grid = gen.generate();
            assert_eq!(grid.columns(), 3);
            assert_eq!(grid.rows(), 3);
            for col in 0..3 {
                for row in 0..3 {
                    let s = grid.symbol(col, row);
                    assert!((1..=4).contains(&s), "symbol {s} out of alphabet");
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let grid_cfg = GridConfig::default();
        let mut a = ResultGenerator::from_seed(&grid_cfg, 42);
        let mut b = ResultGenerator::from_seed(&grid_cfg, 42);

        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }

        a.seed(42);
        b.seed(42);
        assert_eq!(a.random_symbol(), b.random_symbol());
    }

    #[test]
    fn test_out_of_range_lookup_is_zero() {
        let grid = ResultGrid::new(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(grid.symbol(0, 1), 2);
        assert_eq!(grid.symbol(5, 0), 0);
        assert_eq!(grid.symbol(0, 9), 0);
        assert!(grid.column(7).is_empty());
    }
}
