//! Core types for dcsort.
//!
//! This module defines:
//! - [`SortRange`]: A validated inclusive index range into a slice.
//! - [`SortError`]: Errors reported by the checked range API and by [`Algorithm`] parsing.
//! - [`Sort`]: The trait both algorithms implement, so callers can be generic over them.
//! - [`Algorithm`]: A runtime selector for one of the two algorithms.

use crate::algo;
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Errors reported by dcsort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A non-empty range reaches past the end of the slice.
    #[error("range [{start}, {end}] is out of bounds for a slice of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// `start` lies more than one position past `end`.
    #[error("range [{start}, {end}] is inverted")]
    InvertedRange { start: usize, end: usize },

    /// A name that does not match any [`Algorithm`].
    #[error("unknown sorting algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

/// An inclusive index range `[start, end]` that has been checked against a slice length.
///
/// A range is trivial when `start >= end`: it covers at most one element and sorting
/// it is a no-op. `start == end + 1` is accepted as the empty range.
///
/// # Examples
///
/// ```
/// use dcsort::core::{SortError, SortRange};
///
/// let range = SortRange::new(1, 3, 5).unwrap();
/// assert_eq!(range.len(), 3);
///
/// assert!(matches!(
///     SortRange::new(2, 5, 5),
///     Err(SortError::OutOfBounds { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortRange {
    start: usize,
    end: usize,
}

impl SortRange {
    /// Validates `[start, end]` against a slice of length `len`.
    ///
    /// Empty ranges touch no elements and are accepted for any `len`.
    pub fn new(start: usize, end: usize, len: usize) -> Result<Self, SortError> {
        if start > end && start - end > 1 {
            return Err(SortError::InvertedRange { start, end });
        }
        if start <= end && end >= len {
            return Err(SortError::OutOfBounds { start, end, len });
        }
        Ok(Self { start, end })
    }

    /// The range covering a whole slice of length `len`.
    pub fn full(len: usize) -> Self {
        match len {
            0 => Self { start: 1, end: 0 },
            _ => Self {
                start: 0,
                end: len - 1,
            },
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when the range holds fewer than two elements.
    pub fn is_trivial(&self) -> bool {
        self.start >= self.end
    }

    /// Index range suitable for slicing. Only meaningful for non-empty ranges.
    pub(crate) fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for SortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// A sorting algorithm that can be plugged into generic code.
///
/// # Examples
///
/// ```
/// use dcsort::core::Sort;
/// use dcsort::{MergeSort, QuickSort};
///
/// fn sorted<S: Sort>(mut v: Vec<i32>) -> Vec<i32> {
///     S::sort(&mut v);
///     v
/// }
///
/// assert_eq!(sorted::<MergeSort>(vec![3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(sorted::<QuickSort>(vec![3, 1, 2]), vec![1, 2, 3]);
/// ```
pub trait Sort {
    fn name() -> &'static str;

    /// Whether equal elements keep their relative order.
    fn is_stable() -> bool;

    fn sort<T: Ord + Clone>(v: &mut [T]);

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// Stable recursive merge sort. See [`algo::merge_sort`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

/// In-place Hoare-partition quicksort. See [`algo::quick_sort`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl Sort for MergeSort {
    fn name() -> &'static str {
        "merge"
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T: Ord + Clone>(v: &mut [T]) {
        algo::merge_sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::merge_sort_by(v, compare);
    }
}

impl Sort for QuickSort {
    fn name() -> &'static str {
        "quick"
    }

    fn is_stable() -> bool {
        false
    }

    fn sort<T: Ord + Clone>(v: &mut [T]) {
        algo::quick_sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::quick_sort_by(v, compare);
    }
}

/// Runtime choice between the two algorithms.
///
/// Parses from the names accepted on the command line:
///
/// ```
/// use dcsort::Algorithm;
///
/// let algorithm: Algorithm = "QuickSort".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Quick);
///
/// let mut v = vec![3, 1, 2, 3, 1];
/// algorithm.sort(&mut v);
/// assert_eq!(v, vec![1, 1, 2, 3, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Merge, Algorithm::Quick];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => MergeSort::name(),
            Algorithm::Quick => QuickSort::name(),
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Merge => MergeSort::is_stable(),
            Algorithm::Quick => QuickSort::is_stable(),
        }
    }

    pub fn sort<T: Ord + Clone>(self, v: &mut [T]) {
        match self {
            Algorithm::Merge => MergeSort::sort(v),
            Algorithm::Quick => QuickSort::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Merge => MergeSort::sort_by(v, compare),
            Algorithm::Quick => QuickSort::sort_by(v, compare),
        }
    }

    /// Sorts the inclusive range `[start, end]`, validating it first.
    pub fn sort_range<T: Ord + Clone>(
        self,
        v: &mut [T],
        start: usize,
        end: usize,
    ) -> Result<(), SortError> {
        match self {
            Algorithm::Merge => algo::try_merge_sort_range(v, start, end),
            Algorithm::Quick => algo::try_quick_sort_range(v, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "merge" | "merge-sort" | "mergesort" => Ok(Algorithm::Merge),
            "quick" | "quick-sort" | "quicksort" => Ok(Algorithm::Quick),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}
