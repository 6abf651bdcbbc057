//! Sieve-then-fold pipeline for a `width x height` prime grid.
//!
//! Cell `(x, y)` describes the integer `y * width + x + 1`.

use crate::error::GridError;
use crate::fold::{fold, GridMatrix};
use crate::raster::RasterView;
use crate::sieve::{sieve, SieveBound};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// A computed prime grid plus the parameters that produced it.
#[derive(Clone, Debug)]
pub struct PrimeGrid {
    pub matrix: GridMatrix,
    pub bound: SieveBound,
    pub latency_ms: f64,
}

impl PrimeGrid {
    /// Sieves `[1, width * height]` and folds it into `height` rows.
    ///
    /// Both dimensions must be positive and their product must fit in `usize`.
    pub fn generate(width: usize, height: usize, bound: SieveBound) -> Result<Self, GridError> {
        let n = sieve_bound(width, height)?;
        let t0 = Instant::now();
        let table = sieve(n, bound);
        let matrix = fold(table.values(), width)?;
        let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PrimeGrid::generate {width}x{height} n={n} primes={} latency_ms={latency_ms:.3}",
            matrix.count_set()
        );
        Ok(Self {
            matrix,
            bound,
            latency_ms,
        })
    }

    pub fn summary(&self) -> GridSummary {
        let width = self.matrix.width();
        let height = self.matrix.height();
        let cells = width * height;
        let prime_count = self.matrix.count_set();
        GridSummary {
            width,
            height,
            sieve_bound: cells,
            bound_rule: self.bound,
            prime_count,
            density: if cells == 0 {
                0.0
            } else {
                prime_count as f64 / cells as f64
            },
            latency_ms: self.latency_ms,
        }
    }
}

/// Statistics about a generated grid, written as JSON by the CLI.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub width: usize,
    pub height: usize,
    pub sieve_bound: usize,
    pub bound_rule: SieveBound,
    pub prime_count: usize,
    pub density: f64,
    pub latency_ms: f64,
}

/// Computes `N = width * height`, rejecting empty or overflowing grids.
pub fn sieve_bound(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidArgument(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        GridError::InvalidArgument(format!("grid {width}x{height} overflows usize"))
    })
}
