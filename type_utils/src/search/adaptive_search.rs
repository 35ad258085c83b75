// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{SearchElement, sort_and_binary_search};

/// Arrays with at most this many elements are scanned linearly by [`find`] and
/// [`find_sorted`]. Longer ones are binary searched. Shared by every element type.
pub const SEARCH_THRESHOLD: usize = 8;

/// Index of the first element equal to `value`, in the order of `arr`.
#[must_use]
pub fn linear_find<T: SearchElement>(value: &T, arr: &[T]) -> Option<usize> {
    arr.iter()
        .position(|it| it.compare(value) == Ordering::Equal)
}

/// Classic closed interval binary search.
///
/// `arr` must already be sorted ascending (when `ascending` is `true`) or descending
/// (when `false`). This is not checked. On an unsorted slice the result is meaningless,
/// though it is always either `None` or an in-bounds index.
#[must_use]
pub fn binary_search<T: SearchElement>(
    value: &T,
    arr: &[T],
    ascending: bool,
) -> Option<usize> {
    // `lo..hi` is the closed interval `[lo, hi - 1]`, kept half open so it can't
    // underflow.
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        let ordering = arr[mid].compare(value);
        let ordering = if ascending { ordering } else { ordering.reverse() };
        match ordering {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

/// Adaptive search over an unsorted slice.
///
/// - `arr.len() <= SEARCH_THRESHOLD`: [`linear_find`], the index is a position in `arr`.
/// - Otherwise: a copy of `arr` is sorted ascending and binary searched with
///   [`sort_and_binary_search`]. The index is a position in that **sorted** copy, not in
///   `arr`. Don't rely on indices being comparable across the threshold.
///
/// `arr` itself is never modified.
///
/// ```
/// use r3bl_type_utils::find;
///
/// let arr = [1, -3, -2, 2, 3, 4, -1, -5, 0, 5, -4];
/// // Index of -2 in [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5].
/// assert_eq!(find(&-2, &arr), Some(3));
/// assert_eq!(find(&-2, &arr[..4]), Some(2));
/// ```
#[must_use]
pub fn find<T: SearchElement>(value: &T, arr: &[T]) -> Option<usize> {
    if arr.len() <= SEARCH_THRESHOLD {
        tracing::trace!(len = arr.len(), strategy = "linear", "find");
        linear_find(value, arr)
    } else {
        tracing::trace!(len = arr.len(), strategy = "sort_and_binary", "find");
        sort_and_binary_search(value, arr)
    }
}

/// Adaptive search over a slice the caller says is already sorted in the given
/// direction. Above the threshold it binary searches `arr` directly, with no copy.
#[must_use]
pub fn find_sorted<T: SearchElement>(
    value: &T,
    arr: &[T],
    ascending: bool,
) -> Option<usize> {
    if arr.len() <= SEARCH_THRESHOLD {
        tracing::trace!(len = arr.len(), strategy = "linear", "find_sorted");
        linear_find(value, arr)
    } else {
        tracing::trace!(len = arr.len(), strategy = "binary", ascending, "find_sorted");
        binary_search(value, arr, ascending)
    }
}

#[must_use]
pub fn in_array<T: SearchElement>(value: &T, arr: &[T]) -> bool {
    find(value, arr).is_some()
}

#[must_use]
pub fn in_sorted_array<T: SearchElement>(value: &T, arr: &[T], ascending: bool) -> bool {
    find_sorted(value, arr, ascending).is_some()
}
