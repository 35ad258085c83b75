// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Adds the aggregate, search and sort entry points shared by [`IntType`],
/// [`UintType`] and [`FloatType`] for one element type. They forward to the generic
/// functions at the crate root.
///
/// [`IntType`]: crate::IntType
/// [`UintType`]: crate::UintType
/// [`FloatType`]: crate::FloatType
macro_rules! impl_numeric_surface {
    ($surface:ty, $elem:ty) => {
        #[allow(clippy::unused_self)]
        impl $surface {
            #[must_use]
            pub fn min(self, values: &[$elem]) -> $elem { $crate::min(values) }

            #[must_use]
            pub fn max(self, values: &[$elem]) -> $elem { $crate::max(values) }

            #[must_use]
            pub fn sum(self, values: &[$elem]) -> $elem { $crate::sum(values) }

            #[must_use]
            pub fn avg(self, values: &[$elem]) -> f64 { $crate::average(values) }

            #[must_use]
            pub fn linear_find(self, value: $elem, arr: &[$elem]) -> Option<usize> {
                $crate::linear_find(&value, arr)
            }

            #[must_use]
            pub fn binary_search(
                self,
                value: $elem,
                arr: &[$elem],
                ascending: bool,
            ) -> Option<usize> {
                $crate::binary_search(&value, arr, ascending)
            }

            #[must_use]
            pub fn find(self, value: $elem, arr: &[$elem]) -> Option<usize> {
                $crate::find(&value, arr)
            }

            #[must_use]
            pub fn find_sorted(
                self,
                value: $elem,
                arr: &[$elem],
                ascending: bool,
            ) -> Option<usize> {
                $crate::find_sorted(&value, arr, ascending)
            }

            #[must_use]
            pub fn sort_and_binary_search(self, value: $elem, arr: &[$elem]) -> Option<usize> {
                $crate::sort_and_binary_search(&value, arr)
            }

            #[must_use]
            pub fn in_array(self, value: $elem, arr: &[$elem]) -> bool {
                $crate::in_array(&value, arr)
            }

            #[must_use]
            pub fn in_sorted_array(self, value: $elem, arr: &[$elem], ascending: bool) -> bool {
                $crate::in_sorted_array(&value, arr, ascending)
            }

            pub fn sort_ascending(self, arr: &mut [$elem]) { $crate::sort_ascending(arr) }

            pub fn sort_descending(self, arr: &mut [$elem]) { $crate::sort_descending(arr) }
        }
    };
}

pub(crate) use impl_numeric_surface;
