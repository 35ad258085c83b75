// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::numeric_surface::impl_numeric_surface;
use crate::{IntValue, TypeUtilsResult, ValueKind, convert_i64_to, if_else, in_range,
            in_range_of};

/// Helpers for signed integers, all working on [`i64`]. Use the [`IT`] instance.
///
/// ```
/// use r3bl_type_utils::{IT, IntValue, ValueKind};
///
/// assert_eq!(IT.if_else(true, 1, 0), 1);
/// assert_eq!(IT.convert_to(1234, ValueKind::I16), Ok(IntValue::I16(1234)));
/// assert!(IT.in_i8_range(-128));
/// assert_eq!(IT.abs(i64::MIN), i64::MAX);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntType;

pub const IT: IntType = IntType;

#[allow(clippy::unused_self)]
impl IntType {
    #[must_use]
    pub fn if_else(self, condition: bool, true_value: i64, false_value: i64) -> i64 {
        if_else(condition, true_value, false_value)
    }

    /// See [`convert_i64_to`].
    ///
    /// # Errors
    ///
    /// Same as [`convert_i64_to`].
    pub fn convert_to(self, from: i64, kind: ValueKind) -> TypeUtilsResult<IntValue> {
        convert_i64_to(from, kind)
    }

    #[must_use]
    pub fn in_i8_range(self, value: i64) -> bool { in_range_of(value, ValueKind::I8) }

    #[must_use]
    pub fn in_i16_range(self, value: i64) -> bool { in_range_of(value, ValueKind::I16) }

    #[must_use]
    pub fn in_i32_range(self, value: i64) -> bool { in_range_of(value, ValueKind::I32) }

    #[must_use]
    pub fn in_isize_range(self, value: i64) -> bool {
        in_range_of(value, ValueKind::Isize)
    }

    #[must_use]
    pub fn in_u8_range(self, value: i64) -> bool { in_range_of(value, ValueKind::U8) }

    #[must_use]
    pub fn in_u16_range(self, value: i64) -> bool { in_range_of(value, ValueKind::U16) }

    #[must_use]
    pub fn in_u32_range(self, value: i64) -> bool { in_range_of(value, ValueKind::U32) }

    #[must_use]
    pub fn in_usize_range(self, value: i64) -> bool {
        in_range_of(value, ValueKind::Usize)
    }

    #[must_use]
    pub fn in_u64_range(self, value: i64) -> bool { in_range_of(value, ValueKind::U64) }

    /// Inclusive `min <= value <= max`.
    #[must_use]
    pub fn in_range(self, value: i64, min: i64, max: i64) -> bool {
        in_range(value, min, max)
    }

    #[must_use]
    pub fn is_odd(self, value: i64) -> bool { value % 2 != 0 }

    #[must_use]
    pub fn is_even(self, value: i64) -> bool { value % 2 == 0 }

    #[must_use]
    pub fn str(self, value: i64) -> String { value.to_string() }

    /// Absolute value. [`i64::MIN`] saturates to [`i64::MAX`].
    #[must_use]
    pub fn abs(self, value: i64) -> i64 { value.saturating_abs() }
}

impl_numeric_surface!(IntType, i64);
