// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Measurement driver: times each sort over a grid of
//! `(size, mixing_factor)` cells.
//!
//! For every cell a fresh sequence is generated, sorted once under
//! [`Instant`], and dropped. One run per cell; wall-clock noise on small
//! inputs is expected and shows up as speckle in the heatmap.
//!
//! Cells the generator rejects (`mixing_factor > size`) are left empty
//! rather than failing the sweep, so the default axes, whose first size is 1,
//! still produce a full report.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::algorithm::SortAlgorithm;
use crate::error::{Result, SortednessError};
use crate::generator::{generate_with_layout, ChunkLayout};

/// A half-open stepped axis `start, start + step, ... < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    start: usize,
    end: usize,
    step: usize,
}

impl StepRange {
    /// Creates a range, rejecting a zero step or an empty span.
    pub fn new(start: usize, end: usize, step: usize) -> Result<Self> {
        if step == 0 || start >= end {
            return Err(SortednessError::InvalidRange { start, end, step });
        }
        Ok(Self { start, end, step })
    }

    /// First value.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Distance between consecutive values.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Number of values in the range. Always at least 1.
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.end - self.start).div_ceil(self.step)
    }

    /// Always false; construction rejects empty ranges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = usize> {
        (self.start..self.end).step_by(self.step)
    }
}

/// Axes and options for a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Sequence lengths (grid rows).
    pub sizes: StepRange,
    /// Mixing factors (grid columns).
    pub mixing_factors: StepRange,
    /// Chunking used by the generator.
    pub layout: ChunkLayout,
    /// Check that every timed sort returned ascending output.
    pub verify: bool,
}

impl Default for SweepConfig {
    /// Sizes `1..10_001` step `1_000`, mixing factors `1..101` step `10`.
    fn default() -> Self {
        Self {
            sizes: StepRange {
                start: 1,
                end: 10_001,
                step: 1_000,
            },
            mixing_factors: StepRange {
                start: 1,
                end: 101,
                step: 10,
            },
            layout: ChunkLayout::SlidingWindow,
            verify: true,
        }
    }
}

/// Execution times for one algorithm, row-major by (size, mixing factor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTimeGrid {
    algorithm: SortAlgorithm,
    sizes: Vec<usize>,
    mixing_factors: Vec<usize>,
    cells: Vec<Option<Duration>>,
}

impl ExecutionTimeGrid {
    /// Creates an empty grid with one row per size and one column per
    /// mixing factor.
    #[must_use]
    pub fn new(algorithm: SortAlgorithm, sizes: Vec<usize>, mixing_factors: Vec<usize>) -> Self {
        let cells = vec![None; sizes.len() * mixing_factors.len()];
        Self {
            algorithm,
            sizes,
            mixing_factors,
            cells,
        }
    }

    /// Algorithm these times belong to.
    #[must_use]
    pub const fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Row labels.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Column labels.
    #[must_use]
    pub fn mixing_factors(&self) -> &[usize] {
        &self.mixing_factors
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.sizes.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.mixing_factors.len()
    }

    /// Time of cell `(row, col)`, or `None` if it was not measured or is out
    /// of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Duration> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.cells[row * self.cols() + col]
    }

    /// Records the time of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, elapsed: Duration) {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows(),
            self.cols()
        );
        let cols = self.cols();
        self.cells[row * cols + col] = Some(elapsed);
    }

    /// Cells of one row, or an empty slice if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<Duration>] {
        if row >= self.rows() {
            return &[];
        }
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    /// Largest measured time.
    #[must_use]
    pub fn max(&self) -> Option<Duration> {
        self.cells.iter().flatten().copied().max()
    }

    /// Number of measured cells.
    #[must_use]
    pub fn measured_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Times a single run of `algorithm` on `sequence`.
///
/// Returns the elapsed wall-clock time and the sorted output.
pub fn measure_execution_time(
    algorithm: SortAlgorithm,
    sequence: Vec<usize>,
) -> (Duration, Vec<usize>) {
    let start = Instant::now();
    let sorted = algorithm.sort(black_box(sequence));
    let elapsed = start.elapsed();
    (elapsed, black_box(sorted))
}

/// Sweeps every `(size, mixing_factor)` cell of `config` for one algorithm.
///
/// # Errors
///
/// Returns [`SortednessError::UnsortedOutput`] if `config.verify` is set and
/// a sort returns out-of-order output. Generator rejections leave the cell
/// empty and are not errors.
pub fn run_sweep<R: Rng + ?Sized>(
    algorithm: SortAlgorithm,
    config: &SweepConfig,
    rng: &mut R,
) -> Result<ExecutionTimeGrid> {
    let mut grid = ExecutionTimeGrid::new(
        algorithm,
        config.sizes.values().collect(),
        config.mixing_factors.values().collect(),
    );
    info!(
        algorithm = algorithm.name(),
        rows = grid.rows(),
        cols = grid.cols(),
        layout = config.layout.name(),
        "starting sweep"
    );
    let sweep_start = Instant::now();

    for row in 0..grid.rows() {
        let size = grid.sizes[row];
        for col in 0..grid.cols() {
            let mixing_factor = grid.mixing_factors[col];
            let sequence = match generate_with_layout(size, mixing_factor, config.layout, rng) {
                Ok(sequence) => sequence,
                Err(SortednessError::InvalidArgument { reason, .. }) => {
                    debug!(size, mixing_factor, reason, "skipping cell");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let (elapsed, sorted) = measure_execution_time(algorithm, sequence);
            if config.verify && !sorted.is_sorted() {
                return Err(SortednessError::UnsortedOutput {
                    algorithm: algorithm.name(),
                    size,
                    mixing_factor,
                });
            }
            debug!(
                size,
                mixing_factor,
                elapsed_us = elapsed.as_micros() as u64,
                "measured cell"
            );
            grid.set(row, col, elapsed);
        }
    }

    info!(
        algorithm = algorithm.name(),
        measured = grid.measured_cells(),
        elapsed_ms = sweep_start.elapsed().as_millis() as u64,
        "sweep finished"
    );
    Ok(grid)
}

/// Runs [`run_sweep`] for each algorithm in order, sharing one random source.
///
/// # Errors
///
/// Propagates the first error from [`run_sweep`].
pub fn run_all<R: Rng + ?Sized>(
    algorithms: &[SortAlgorithm],
    config: &SweepConfig,
    rng: &mut R,
) -> Result<Vec<ExecutionTimeGrid>> {
    algorithms
        .iter()
        .map(|&algorithm| run_sweep(algorithm, config, &mut *rng))
        .collect()
}
