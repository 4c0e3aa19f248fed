// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! # `sortedness` — Sort timing over partially shuffled inputs
//!
//! Measures how long insertion sort, merge sort and the standard library's
//! stable sort take on integer sequences of varying size and "sortedness",
//! and renders the results as heatmaps.
//!
//! ## Components
//!
//! | Item | Module | Description |
//! |------|--------|-------------|
//! | `generate(size, mixing_factor, rng)` | [`generator`] | Ascending sequence with `mixing_factor` chunks, all but one shuffled |
//! | `insertion_sort(&mut seq)` | [`sort`] | In-place stable insertion sort |
//! | `merge_sort(&seq)` | [`sort`] | Stable top-down merge sort, returns a new vector |
//! | `SortAlgorithm` | [`algorithm`] | `Builtin` / `Insertion` / `Merge` dispatch |
//! | `run_sweep(algorithm, config, rng)` | [`measure`] | Times one algorithm over a `(size, mixing_factor)` grid |
//! | `render_heatmap(grid)` | [`heatmap`] | Text heatmap and JSON report |
//!
//! ## Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sortedness::algorithm::SortAlgorithm;
//! use sortedness::measure::{run_sweep, StepRange, SweepConfig};
//!
//! let config = SweepConfig {
//!     sizes: StepRange::new(100, 301, 100).unwrap(),
//!     mixing_factors: StepRange::new(1, 21, 10).unwrap(),
//!     ..SweepConfig::default()
//! };
//! let mut rng = StdRng::seed_from_u64(42);
//! let grid = run_sweep(SortAlgorithm::Merge, &config, &mut rng).unwrap();
//! assert_eq!(grid.measured_cells(), 6);
//! ```

pub mod algorithm;
pub mod common;
pub mod error;
pub mod generator;
pub mod heatmap;
pub mod measure;
pub mod sort;

pub use error::{Result, SortednessError};
