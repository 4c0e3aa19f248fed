// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! The two hand-written comparison sorts under measurement.
//!
//! | Sort | In place | Stable | Time | Extra space |
//! |------|----------|--------|------|-------------|
//! | [`insertion_sort`] | yes | yes | O(n²), O(n) on sorted input | O(1) |
//! | [`merge_sort`] | no | yes | O(n log n) | O(n) per level |
//!
//! Both accept any total order via their `_by` variants, which is how the
//! stability tests compare `(key, index)` pairs by key only.

pub mod insertion;
pub mod merge;

pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
