// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A numeric primitive that [`min`], [`max`], [`sum`] and [`average`] work over.
/// [`Default`] is the zero returned for empty input.
pub trait Aggregate: Copy + PartialOrd + Default {
    /// Addition used by [`sum`]. Integers wrap on overflow.
    #[must_use]
    fn accumulate(self, other: Self) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_aggregate_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Aggregate for $ty {
                fn accumulate(self, other: Self) -> Self { self.wrapping_add(other) }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_aggregate_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Aggregate for f32 {
    fn accumulate(self, other: Self) -> Self { self + other }

    fn to_f64(self) -> f64 { f64::from(self) }
}

impl Aggregate for f64 {
    fn accumulate(self, other: Self) -> Self { self + other }

    fn to_f64(self) -> f64 { self }
}

/// Smallest element, or zero for an empty slice.
#[must_use]
pub fn min<T: Aggregate>(values: &[T]) -> T {
    pick(values, |candidate, current| candidate < current)
}

/// Largest element, or zero for an empty slice.
#[must_use]
pub fn max<T: Aggregate>(values: &[T]) -> T {
    pick(values, |candidate, current| candidate > current)
}

/// Sum of the elements, or zero for an empty slice. Integer sums wrap on overflow.
#[must_use]
pub fn sum<T: Aggregate>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::default(), |acc, it| acc.accumulate(*it))
}

/// [`sum`] converted to [`f64`] and divided by the count. `0.0` for an empty slice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn average<T: Aggregate>(values: &[T]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values).to_f64() / values.len() as f64
}

fn pick<T: Aggregate>(values: &[T], replaces: impl Fn(T, T) -> bool) -> T {
    let Some((first, rest)) = values.split_first() else {
        return T::default();
    };
    rest.iter().fold(*first, |current, it| {
        if replaces(*it, current) { *it } else { current }
    })
}
