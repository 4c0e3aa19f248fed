//! `insertion_sort` — in-place stable insertion sort.
//!
//! Maintains a sorted prefix `seq[..i]`. Each new element `seq[i]` is swapped
//! leftward past every strictly greater predecessor and comes to rest directly
//! after the first predecessor that is not greater. Stopping at "not greater"
//! (rather than "less") is what keeps equal elements in input order.
//!
//! Cost is one comparison per element on already-sorted input, so the sort is
//! O(n) on the mixing factor 1 inputs the generator produces and O(n²) once the
//! chunks are shuffled.

use std::cmp::Ordering;

/// Sorts `seq` in place in ascending order.
///
/// # Examples
///
/// ```
/// use sortedness::sort::insertion_sort;
///
/// let mut seq = [5, 3, 4, 1, 2];
/// insertion_sort(&mut seq);
/// assert_eq!(seq, [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    insertion_sort_by(seq, T::cmp);
}

/// Sorts `seq` in place with a caller-supplied total order.
///
/// Elements for which `compare` returns [`Ordering::Equal`] keep their
/// relative input order.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && compare(&seq[j - 1], &seq[j]) == Ordering::Greater {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut seq = vec![5, 3, 4, 1, 2];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty() {
        let mut seq: Vec<i32> = vec![];
        insertion_sort(&mut seq);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_single_element() {
        let mut seq = vec![42];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![42]);
    }

    #[test]
    fn test_two_elements_swapped() {
        let mut seq = vec![2, 1];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn test_already_sorted_unchanged() {
        let mut seq: Vec<usize> = (0..100).collect();
        insertion_sort(&mut seq);
        assert_eq!(seq, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_reverse_sorted() {
        let mut seq: Vec<usize> = (0..50).rev().collect();
        insertion_sort(&mut seq);
        assert_eq!(seq, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates() {
        let mut seq = vec![3, 1, 3, 2, 1, 3];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_negative_and_extreme_values() {
        let mut seq = vec![i64::MAX, 0, -5, i64::MIN, 7];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![i64::MIN, -5, 0, 7, i64::MAX]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        // (key, original_index), compared by key only
        let mut seq = vec![(2, 0), (1, 1), (2, 2), (1, 3), (0, 4), (2, 5)];
        insertion_sort_by(&mut seq, |a, b| a.0.cmp(&b.0));
        assert_eq!(seq, vec![(0, 4), (1, 1), (1, 3), (2, 0), (2, 2), (2, 5)]);
    }

    #[test]
    fn test_all_equal_keys_keep_input_order() {
        // Kills mutant: replacing `== Greater` with `!= Less` in the shift loop.
        let mut seq = vec![(7, 0), (7, 1), (7, 2), (7, 3)];
        insertion_sort_by(&mut seq, |a, b| a.0.cmp(&b.0));
        assert_eq!(seq, vec![(7, 0), (7, 1), (7, 2), (7, 3)]);
    }

    #[test]
    fn test_sorted_input_uses_linear_comparisons() {
        let mut seq: Vec<usize> = (0..1_000).collect();
        let mut comparisons = 0usize;
        insertion_sort_by(&mut seq, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 999);
    }

    #[test]
    fn test_reverse_input_uses_quadratic_comparisons() {
        let n = 100usize;
        let mut seq: Vec<usize> = (0..n).rev().collect();
        let mut comparisons = 0usize;
        insertion_sort_by(&mut seq, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        // Every pair is an inversion: each shift compares once and swaps.
        assert_eq!(comparisons, n * (n - 1) / 2);
    }

    #[test]
    fn test_descending_order_via_comparator() {
        let mut seq = vec![1, 4, 2, 3];
        insertion_sort_by(&mut seq, |a, b| b.cmp(a));
        assert_eq!(seq, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_min_element_at_end_moves_to_front() {
        // Kills mutant: `j > 0` replaced with `j > 1` in the shift loop.
        let mut seq = vec![2, 3, 4, 5, 1];
        insertion_sort(&mut seq);
        assert_eq!(seq, vec![1, 2, 3, 4, 5]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_std_sort(seq in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = seq.clone();
            expected.sort();
            let mut actual = seq;
            insertion_sort(&mut actual);
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn is_stable(keys in prop::collection::vec(0u8..8, 0..200)) {
            let mut tagged: Vec<(u8, usize)> =
                keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
            let mut expected = tagged.clone();
            expected.sort_by_key(|&(k, _)| k);
            insertion_sort_by(&mut tagged, |a, b| a.0.cmp(&b.0));
            prop_assert_eq!(tagged, expected);
        }

        #[test]
        fn is_idempotent(seq in prop::collection::vec(any::<i16>(), 0..200)) {
            let mut once = seq;
            insertion_sort(&mut once);
            let mut twice = once.clone();
            insertion_sort(&mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
