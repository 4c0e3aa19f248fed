// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! `merge_sort` — top-down stable merge sort returning a new vector.
//!
//! Sequences of length 0 or 1 are copied as-is. Longer sequences are split at
//! `len / 2` (the right half takes the extra element for odd lengths), each
//! half is sorted recursively and the two results are merged.
//!
//! The merge takes from the left run unless the right head is strictly
//! smaller, so equal elements keep their input order.

use std::cmp::Ordering;

/// Returns a sorted copy of `seq` in ascending order. `seq` is not modified.
///
/// # Examples
///
/// ```
/// use sortedness::sort::merge_sort;
///
/// let seq = [5, 3, 4, 1, 2];
/// assert_eq!(merge_sort(&seq), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, T::cmp)
}

/// Returns a sorted copy of `seq` using a caller-supplied total order.
#[must_use]
pub fn merge_sort_by<T, F>(seq: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(seq, &mut compare)
}

fn sort_recursive<T, F>(seq: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    let left = sort_recursive(left, compare);
    let right = sort_recursive(right, compare);
    merge_runs(left, right, compare)
}

/// Merges two sorted runs, consuming both.
///
/// Elements are moved, not cloned; only the leaf copies in `sort_recursive`
/// clone from the input slice.
fn merge_runs<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) != Ordering::Less,
            _ => break,
        };
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
