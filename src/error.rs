// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Error type shared by the generator, the measurement driver and the report
//! writers.
//!
//! The sorts themselves never fail: empty and single-element inputs are
//! already sorted.

use thiserror::Error;

/// Errors produced by the `sortedness` crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SortednessError {
    /// Generator parameters that would produce zero-length chunks.
    #[error("invalid argument: size = {size}, mixing_factor = {mixing_factor}: {reason}")]
    InvalidArgument {
        /// Requested sequence length.
        size: usize,
        /// Requested number of chunks.
        mixing_factor: usize,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// A sweep axis that yields no points.
    #[error("invalid range: {start}..{end} step {step} is empty")]
    InvalidRange {
        /// First value (inclusive).
        start: usize,
        /// Upper bound (exclusive).
        end: usize,
        /// Distance between consecutive values.
        step: usize,
    },

    /// An algorithm name that does not match any [`SortAlgorithm`](crate::algorithm::SortAlgorithm).
    #[error("unknown sort algorithm '{0}' (expected builtin, timsort, insertion_sort or merge_sort)")]
    UnknownAlgorithm(String),

    /// A timed sort returned output that is not in ascending order.
    #[error("{algorithm} produced unsorted output for size = {size}, mixing_factor = {mixing_factor}")]
    UnsortedOutput {
        /// Name of the algorithm that was timed.
        algorithm: &'static str,
        /// Sequence length of the failing cell.
        size: usize,
        /// Mixing factor of the failing cell.
        mixing_factor: usize,
    },

    /// Failure writing a report.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure serializing a report.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortednessError>;
