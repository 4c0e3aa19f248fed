// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Closed set of sort algorithms the measurement driver can time.
//!
//! Each variant exposes the same `Vec<T> -> Vec<T>` capability through
//! [`SortAlgorithm::sort`], so the driver never cares whether a sort works in
//! place or allocates.
//!
//! | Variant | Name | Implementation |
//! |---------|------|----------------|
//! | `Builtin` | `builtin` (alias `timsort`) | `slice::sort` (stable, adaptive) |
//! | `Insertion` | `insertion_sort` | [`crate::sort::insertion_sort`] |
//! | `Merge` | `merge_sort` | [`crate::sort::merge_sort`] |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SortednessError;
use crate::sort::{insertion_sort, merge_sort};

/// A sort algorithm selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortAlgorithm {
    /// The standard library's stable sort, used as the baseline.
    #[serde(rename = "builtin")]
    Builtin,
    /// Hand-written insertion sort.
    #[serde(rename = "insertion_sort")]
    Insertion,
    /// Hand-written top-down merge sort.
    #[serde(rename = "merge_sort")]
    Merge,
}

impl SortAlgorithm {
    /// All algorithms, in the order their heatmaps are laid out.
    pub const ALL: [Self; 3] = [Self::Builtin, Self::Insertion, Self::Merge];

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Insertion => "insertion_sort",
            Self::Merge => "merge_sort",
        }
    }

    /// Sorts `seq` ascending and returns the result.
    ///
    /// `Builtin` and `Insertion` sort the vector in place and hand it back;
    /// `Merge` returns a freshly allocated vector and drops the input.
    #[must_use]
    pub fn sort<T: Ord + Clone>(self, mut seq: Vec<T>) -> Vec<T> {
        match self {
            Self::Builtin => {
                seq.sort();
                seq
            }
            Self::Insertion => {
                insertion_sort(&mut seq);
                seq
            }
            Self::Merge => merge_sort(&seq),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortednessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" | "timsort" => Ok(Self::Builtin),
            "insertion_sort" | "insertion" => Ok(Self::Insertion),
            "merge_sort" | "merge" => Ok(Self::Merge),
            _ => Err(SortednessError::UnknownAlgorithm(s.to_string())),
        }
    }
}
