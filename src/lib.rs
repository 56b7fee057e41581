//! # dcsort
//!
//! `dcsort` provides the two textbook recursive divide-and-conquer sorts over mutable
//! slices of any ordered element type:
//!
//! - **Merge sort** ([`merge_sort`]): stable. Each merge step fills a temporary buffer
//!   from the two sorted halves, preferring the left element on ties, and copies it back.
//! - **Quicksort** ([`quick_sort`]): in place, not stable. Partitions around the value of
//!   the middle element with two converging cursors (Hoare scheme), so duplicates of the
//!   pivot may end up on either side.
//!
//! ## Usage
//!
//! ### Whole slices
//!
//! ```rust
//! use dcsort::{merge_sort, quick_sort};
//!
//! let mut a = vec![3, 1, 2, 3, 1];
//! merge_sort(&mut a);
//! assert_eq!(a, vec![1, 1, 2, 3, 3]);
//!
//! let mut b = vec!["pear", "apple", "fig"];
//! quick_sort(&mut b);
//! assert_eq!(b, vec!["apple", "fig", "pear"]);
//! ```
//!
//! ### Inclusive ranges
//!
//! The range functions take `start` and `end` as inclusive indices. A range with
//! `start >= end` is a no-op; an `end` past the slice panics. The `try_` variants
//! report a [`SortError`] instead.
//!
//! ```rust
//! use dcsort::{quick_sort_range, try_merge_sort_range, SortError};
//!
//! let mut data = [4, 3, 2, 1];
//! quick_sort_range(&mut data, 0, 2);
//! assert_eq!(data, [2, 3, 4, 1]);
//!
//! assert!(matches!(
//!     try_merge_sort_range(&mut data, 0, 4),
//!     Err(SortError::OutOfBounds { .. })
//! ));
//! ```
//!
//! ### Choosing at runtime
//!
//! [`Algorithm`] selects an implementation by name, and the [`Sort`](crate::core::Sort) trait lets
//! generic code take either as a type parameter.
//!
//! ## Element requirements
//!
//! Both sorts require `T: Clone`: merge sort fills its merge buffer with clones, and
//! quicksort keeps a clone of the pivot value so that swaps during partitioning can not
//! change what it compares against.

pub mod algo;
pub mod core;
pub use crate::algo::{
    merge_sort, merge_sort_by, merge_sort_by_key, merge_sort_range, quick_sort, quick_sort_by,
    quick_sort_by_key, quick_sort_range, try_merge_sort_range, try_quick_sort_range,
};
pub use crate::core::{Algorithm, MergeSort, QuickSort, SortError, SortRange};

pub mod prelude {
    pub use crate::algo::{
        merge_sort, merge_sort_by, merge_sort_by_key, merge_sort_range, quick_sort,
        quick_sort_by, quick_sort_by_key, quick_sort_range, try_merge_sort_range,
        try_quick_sort_range,
    };
    pub use crate::core::{Algorithm, MergeSort, QuickSort, Sort, SortError, SortRange};
}
