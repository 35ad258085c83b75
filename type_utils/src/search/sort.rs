// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SearchElement, binary_search};

/// Sort in place, smallest first. Not stable.
pub fn sort_ascending<T: SearchElement>(arr: &mut [T]) {
    arr.sort_unstable_by(T::compare);
}

/// Sort in place, largest first. Not stable.
pub fn sort_descending<T: SearchElement>(arr: &mut [T]) {
    arr.sort_unstable_by(|a, b| b.compare(a));
}

/// Sort a copy of `arr` ascending and binary search it. The returned index is a
/// position in the sorted copy. `arr` is left as is.
#[must_use]
pub fn sort_and_binary_search<T: SearchElement>(value: &T, arr: &[T]) -> Option<usize> {
    let mut copy = arr.to_vec();
    sort_ascending(&mut copy);
    binary_search(value, &copy, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_sort_round_trip() {
        let mut arr: Vec<u64> = vec![1, 3, 4, 2, 5];
        sort_ascending(&mut arr);
        assert_eq2!(arr, vec![1, 2, 3, 4, 5]);
        sort_descending(&mut arr);
        assert_eq2!(arr, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_descending_is_exact_reverse_of_ascending() {
        let original = vec![0.5, -1.0, f64::NAN, 3.25, -7.5, 0.0, 2.0];
        let mut asc = original.clone();
        sort_ascending(&mut asc);
        let mut desc = asc.clone();
        sort_descending(&mut desc);
        let reversed: Vec<f64> = asc.iter().rev().copied().collect();
        assert_eq2!(format!("{desc:?}"), format!("{reversed:?}"));
        assert!(asc[0].is_nan());
    }

    #[test]
    fn test_sort_strings() {
        let mut arr = vec!["pear", "apple", "fig"];
        sort_ascending(&mut arr);
        assert_eq2!(arr, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_sort_and_binary_search_leaves_input_alone() {
        let arr = [1, -3, -2, 2, 3, 4, -1, -5, 0, 5, -4];
        assert_eq2!(sort_and_binary_search(&-2, &arr), Some(3));
        assert_eq2!(sort_and_binary_search(&9, &arr), None);
        assert_eq2!(arr, [1, -3, -2, 2, 3, 4, -1, -5, 0, 5, -4]);
    }
}
