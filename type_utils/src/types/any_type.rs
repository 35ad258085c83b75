// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Serialize, de::DeserializeOwned};

use crate::{DynValue, TypeUtilsResult, copy_matching_fields, if_else, to_f64, to_i64,
            to_i64_array, to_isize, to_u64, to_u64_array, to_usize};

/// Helpers for dynamically typed values. Use the [`AT`] instance.
///
/// The scalar conversions accept anything that converts into a [`DynValue`], so a
/// primitive can be passed directly.
///
/// ```
/// use r3bl_type_utils::{AT, DynValue};
///
/// assert_eq!(AT.int64(123_u8), Ok(123));
/// assert_eq!(AT.int64("123"), Ok(123));
/// assert!(AT.uint64(-1).is_err());
/// assert!(AT.in_array(1, &[DynValue::from(1), DynValue::from("a")]));
/// assert!(!AT.in_array(1.0, &[DynValue::from(1), DynValue::from("a")]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyType;

pub const AT: AnyType = AnyType;

#[allow(clippy::unused_self)]
impl AnyType {
    #[must_use]
    pub fn if_else<T>(self, condition: bool, true_value: T, false_value: T) -> T {
        if_else(condition, true_value, false_value)
    }

    /// See [`to_i64`].
    ///
    /// # Errors
    ///
    /// Same as [`to_i64`].
    pub fn int64(self, value: impl Into<DynValue>) -> TypeUtilsResult<i64> {
        to_i64(&value.into())
    }

    /// See [`to_u64`].
    ///
    /// # Errors
    ///
    /// Same as [`to_u64`].
    pub fn uint64(self, value: impl Into<DynValue>) -> TypeUtilsResult<u64> {
        to_u64(&value.into())
    }

    /// See [`to_f64`].
    ///
    /// # Errors
    ///
    /// Same as [`to_f64`].
    pub fn float64(self, value: impl Into<DynValue>) -> TypeUtilsResult<f64> {
        to_f64(&value.into())
    }

    /// See [`to_isize`].
    ///
    /// # Errors
    ///
    /// Same as [`to_isize`].
    pub fn int(self, value: impl Into<DynValue>) -> TypeUtilsResult<isize> {
        to_isize(&value.into())
    }

    /// See [`to_usize`].
    ///
    /// # Errors
    ///
    /// Same as [`to_usize`].
    pub fn uint(self, value: impl Into<DynValue>) -> TypeUtilsResult<usize> {
        to_usize(&value.into())
    }

    /// # Errors
    ///
    /// The first element's error, see [`to_i64_array`].
    pub fn int64_array(self, values: &[DynValue]) -> TypeUtilsResult<Vec<i64>> {
        to_i64_array(values)
    }

    /// # Errors
    ///
    /// The first element's error, see [`to_u64_array`].
    pub fn uint64_array(self, values: &[DynValue]) -> TypeUtilsResult<Vec<u64>> {
        to_u64_array(values)
    }

    /// Linear scan of `stack` for `item`. Equality is kind-strict: `1_i32` is not found
    /// among `f64` values, and `"1"` is not found among integers.
    #[must_use]
    pub fn in_array(self, item: impl Into<DynValue>, stack: &[DynValue]) -> bool {
        let item = item.into();
        stack.iter().any(|it| *it == item)
    }

    /// See [`copy_matching_fields`].
    ///
    /// # Errors
    ///
    /// Same as [`copy_matching_fields`].
    pub fn struct_to<S, D>(self, src: &S, dst: &mut D) -> TypeUtilsResult<()>
    where
        S: Serialize,
        D: Serialize + DeserializeOwned,
    {
        copy_matching_fields(src, dst)
    }
}
