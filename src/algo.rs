//! Recursive divide-and-conquer sorts.
//!
//! - **Merge sort**: stable, splits at the middle index and merges the sorted halves
//!   through an auxiliary buffer owned by each merge step.
//! - **Quicksort**: in place, unstable, partitions around the value of the middle
//!   element with two converging cursors (Hoare scheme).
//!
//! Each algorithm comes in whole-slice, comparator, key and inclusive-range flavors.
//! The range functions mirror the classic `sort(arr, start, end)` signature; the
//! `try_` variants validate the range instead of panicking.

use crate::core::{SortError, SortRange};
use std::cmp::Ordering;

/// Sorts a slice with a stable merge sort.
///
/// # Examples
///
/// ```
/// use dcsort::merge_sort;
///
/// let mut data = [5, 4, 3, 2, 1];
/// merge_sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, T::cmp);
}

/// Sorts a slice with a stable merge sort using `compare` to order elements.
///
/// Elements that compare [`Ordering::Equal`] keep their original relative order.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(len = v.len(), "merge sort");
    merge_sort_recursive(v, &mut compare);
}

/// Sorts a slice with a stable merge sort, ordering elements by the extracted key.
pub fn merge_sort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// Merge sorts the inclusive range `v[start..=end]`, leaving the rest of `v` untouched.
///
/// A range with `start >= end` is already sorted and returns immediately.
///
/// # Panics
///
/// Panics if the range is non-trivial and `end` is out of bounds for `v`.
///
/// # Examples
///
/// ```
/// use dcsort::merge_sort_range;
///
/// let mut data = [9, 3, 2, 1, 0];
/// merge_sort_range(&mut data, 1, 3);
///
/// assert_eq!(data, [9, 1, 2, 3, 0]);
/// ```
pub fn merge_sort_range<T: Ord + Clone>(v: &mut [T], start: usize, end: usize) {
    if start >= end {
        return;
    }
    tracing::trace!(start, end, "merge sort range");
    merge_sort_recursive(&mut v[start..=end], &mut T::cmp);
}

/// Validating counterpart of [`merge_sort_range`].
pub fn try_merge_sort_range<T: Ord + Clone>(
    v: &mut [T],
    start: usize,
    end: usize,
) -> Result<(), SortError> {
    let range = SortRange::new(start, end, v.len())?;
    if !range.is_trivial() {
        merge_sort(&mut v[range.indices()]);
    }
    Ok(())
}

fn merge_sort_recursive<T, F>(v: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Left half is [0, mid], right half is [mid + 1, len - 1].
    let mid = (len - 1) / 2;
    let (left, right) = v.split_at_mut(mid + 1);
    merge_sort_recursive(left, compare);
    merge_sort_recursive(right, compare);

    merge(v, mid + 1, compare);
}

/// Merges the sorted runs `v[..split]` and `v[split..]`.
///
/// On ties the left element wins, which is what makes the sort stable.
fn merge<T, F>(v: &mut [T], split: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left, right) = v.split_at(split);
    let mut merged = Vec::with_capacity(v.len());

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    v.iter_mut()
        .zip(merged)
        .for_each(|(slot, item)| *slot = item);
}

/// Sorts a slice in place with quicksort.
///
/// The sort is not stable. Average time is O(n log n); adversarial inputs can degrade it
/// to O(n^2) with O(n) recursion depth.
///
/// # Examples
///
/// ```
/// use dcsort::quick_sort;
///
/// let mut data = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
/// quick_sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn quick_sort<T: Ord + Clone>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sorts a slice in place with quicksort using `compare` to order elements.
///
/// `compare` must be a total order. An inconsistent comparator may make the partition
/// cursors run off the slice, which panics.
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(len = v.len(), "quick sort");
    quick_sort_recursive(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts a slice in place with quicksort, ordering elements by the extracted key.
pub fn quick_sort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    quick_sort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// Quick sorts the inclusive range `v[start..=high]`, leaving the rest of `v` untouched.
///
/// A range with `start >= high` is already sorted and returns immediately.
///
/// # Panics
///
/// Panics if the range is non-trivial and `high` is out of bounds for `v`.
pub fn quick_sort_range<T: Ord + Clone>(v: &mut [T], start: usize, high: usize) {
    if start >= high {
        return;
    }
    tracing::trace!(start, high, "quick sort range");
    quick_sort_recursive(&mut v[start..=high], &mut |a: &T, b: &T| a < b);
}

/// Validating counterpart of [`quick_sort_range`].
pub fn try_quick_sort_range<T: Ord + Clone>(
    v: &mut [T],
    start: usize,
    high: usize,
) -> Result<(), SortError> {
    let range = SortRange::new(start, high, v.len())?;
    if !range.is_trivial() {
        quick_sort(&mut v[range.indices()]);
    }
    Ok(())
}

fn quick_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let (left_end, right_start) = partition(v, is_less);
    quick_sort_recursive(&mut v[..left_end], is_less);
    quick_sort_recursive(&mut v[right_start..], is_less);
}

/// Hoare partition around the value of the middle element.
///
/// Returns `(left_end, right_start)` such that every element of `v[..left_end]` is
/// `<=` the pivot and every element of `v[right_start..]` is `>=` it, with
/// `left_end <= right_start`. For `len >= 2`, `left_end < len` and `right_start > 0`,
/// so each side is smaller than `v`.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // The pivot is held by value. Its slot takes part in the swaps below.
    let pivot = v[(v.len() - 1) / 2].clone();

    // `left` is the forward cursor; `right` is one past the backward cursor so it can
    // reach the front of the slice without underflowing.
    let mut left = 0;
    let mut right = v.len();

    while left < right {
        while is_less(&v[left], &pivot) {
            left += 1;
        }
        while is_less(&pivot, &v[right - 1]) {
            right -= 1;
        }

        if left < right {
            v.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }

    (right, left)
}
