// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

/// An element type that [`find`](crate::find), [`find_sorted`](crate::find_sorted) and
/// the sort utilities can work with. It has to be cheap enough to [`Clone`], since
/// [`find`](crate::find) sorts a copy of the caller's slice above the threshold.
///
/// The comparison is a total order. Integers and strings use [`Ord`]. Floats use
/// [`PartialOrd`] with `NaN` placed before every number (and equal to other `NaN`s), so
/// that sorting and binary search agree with each other.
pub trait SearchElement: Clone {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_search_element_for_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SearchElement for $ty {
                fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
            }
        )*
    };
}

impl_search_element_for_ord! {
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    String, &str,
}

macro_rules! impl_search_element_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SearchElement for $ty {
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

impl_search_element_for_float!(f32, f64);
