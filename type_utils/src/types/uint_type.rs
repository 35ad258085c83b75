// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::numeric_surface::impl_numeric_surface;
use crate::{IntValue, TypeUtilsResult, ValueKind, convert_u64_to, if_else, in_range,
            in_range_of_unsigned};

/// Helpers for unsigned integers, all working on [`u64`]. Use the [`UT`] instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UintType;

pub const UT: UintType = UintType;

#[allow(clippy::unused_self)]
impl UintType {
    #[must_use]
    pub fn if_else(self, condition: bool, true_value: u64, false_value: u64) -> u64 {
        if_else(condition, true_value, false_value)
    }

    /// See [`convert_u64_to`].
    ///
    /// # Errors
    ///
    /// Same as [`convert_u64_to`].
    pub fn convert_to(self, from: u64, kind: ValueKind) -> TypeUtilsResult<IntValue> {
        convert_u64_to(from, kind)
    }

    #[must_use]
    pub fn in_i8_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::I8)
    }

    #[must_use]
    pub fn in_i16_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::I16)
    }

    #[must_use]
    pub fn in_i32_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::I32)
    }

    #[must_use]
    pub fn in_i64_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::I64)
    }

    #[must_use]
    pub fn in_isize_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::Isize)
    }

    #[must_use]
    pub fn in_u8_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::U8)
    }

    #[must_use]
    pub fn in_u16_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::U16)
    }

    #[must_use]
    pub fn in_u32_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::U32)
    }

    #[must_use]
    pub fn in_usize_range(self, value: u64) -> bool {
        in_range_of_unsigned(value, ValueKind::Usize)
    }

    #[must_use]
    pub fn in_range(self, value: u64, min: u64, max: u64) -> bool {
        in_range(value, min, max)
    }

    #[must_use]
    pub fn is_odd(self, value: u64) -> bool { value % 2 == 1 }

    #[must_use]
    pub fn is_even(self, value: u64) -> bool { value % 2 == 0 }

    #[must_use]
    pub fn str(self, value: u64) -> String { value.to_string() }
}

impl_numeric_surface!(UintType, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeUtilsError, assert_eq2};

    #[test]
    fn test_if_else() {
        assert_eq2!(UT.if_else(true, 1, 0), 1);
        assert_eq2!(UT.if_else(false, 1, 0), 0);
    }

    #[test]
    fn test_sort() {
        let mut arr = [1_u64, 3, 4, 2, 5];
        UT.sort_ascending(&mut arr);
        assert_eq2!(arr, [1, 2, 3, 4, 5]);
        UT.sort_descending(&mut arr);
        assert_eq2!(arr, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_find() {
        let arr = [1_u64, 3, 4, 2, 5, 8, 7, 6, 0, 9];
        let arr_asc = [0_u64, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let arr_desc = [9_u64, 8, 7, 6, 5, 4, 3, 2, 1, 0];

        assert_eq2!(UT.find(3, &arr), Some(3));
        assert_eq2!(UT.find_sorted(3, &arr_asc, true), Some(3));
        assert_eq2!(UT.find_sorted(3, &arr_desc, false), Some(6));
        assert_eq2!(UT.linear_find(3, &arr), Some(1));
        assert_eq2!(UT.binary_search(3, &arr_asc, true), Some(3));
        assert_eq2!(UT.binary_search(3, &arr_desc, false), Some(6));
        assert_eq2!(UT.sort_and_binary_search(3, &arr), Some(3));
        assert!(UT.in_array(9, &arr));
        assert!(UT.in_sorted_array(0, &arr_desc, false));
        assert!(!UT.in_array(10, &arr));
    }

    #[test]
    fn test_convert_to() {
        assert_eq2!(
            UT.convert_to(1234, ValueKind::I8),
            Err(TypeUtilsError::OutOfRange { type_name: "i8" })
        );
        assert_eq2!(UT.convert_to(1234, ValueKind::I16), Ok(IntValue::I16(1234)));
        assert!(UT.convert_to(u64::MAX, ValueKind::I64).is_err());
        assert_eq2!(UT.convert_to(u64::MAX, ValueKind::U64), Ok(IntValue::U64(u64::MAX)));
    }

    #[test]
    fn test_utils() {
        assert!(UT.is_odd(3));
        assert!(UT.is_even(0));
        assert_eq2!(UT.str(u64::MAX), "18446744073709551615");
        assert!(UT.in_u8_range(255));
        assert!(!UT.in_u8_range(256));
        assert!(!UT.in_i64_range(u64::MAX));
        assert!(UT.in_i8_range(127));
        assert!(UT.in_range(2, 1, 3));
        assert_eq2!(UT.min(&[4, 2, 9]), 2);
        assert_eq2!(UT.max(&[4, 2, 9]), 9);
        assert_eq2!(UT.sum(&[4, 2, 9]), 15);
        assert_eq2!(UT.avg(&[1, 2]), 1.5);
    }
}
