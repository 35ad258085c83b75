// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert a [`DynValue`] into one of the three canonical forms: [`i64`], [`u64`] or
//! [`f64`]. The platform-width forms ([`to_isize`], [`to_usize`]) are layered on top of
//! the 64-bit ones and chain the inner error with [`TypeUtilsError::Context`].
//!
//! | input            | [`to_i64`]                    | [`to_u64`]                     | [`to_f64`]                          |
//! |------------------|-------------------------------|--------------------------------|-------------------------------------|
//! | signed integer   | widened                       | negative fails                 | converted                           |
//! | unsigned integer | above [`i64::MAX`] fails      | widened                        | above `f64::MAX.to_bits()` fails    |
//! | float            | truncated toward zero         | negative fails, then truncated | converted                           |
//! | string           | base-10 parse                 | base-10 parse                  | decimal / scientific parse          |
//! | bool, list, nil  | unsupported                   | unsupported                    | unsupported                         |
//!
//! ```
//! use r3bl_type_utils::{DynValue, TypeUtilsError, to_i64};
//!
//! assert_eq!(to_i64(&DynValue::from("123")), Ok(123));
//! assert_eq!(
//!     to_i64(&DynValue::from(i64::MAX as u64 + 1)),
//!     Err(TypeUtilsError::OutOfRange { type_name: "i64" })
//! );
//! ```

use std::{num::ParseIntError, str::FromStr};

use crate::{DynValue, TypeUtilsError, TypeUtilsResult, ValueKind,
            convert::safe_convert::rejected, convert_i64, convert_u64};

const OP_TO_I64: &str = "to_i64";
const OP_TO_U64: &str = "to_u64";
const OP_TO_F64: &str = "to_f64";
const OP_TO_ISIZE: &str = "to_isize";
const OP_TO_USIZE: &str = "to_usize";

/// `2^63`. Truncated floats in `[-2^63, 2^63)` fit an [`i64`].
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// `2^64`. Truncated non-negative floats below this fit a [`u64`].
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Convert to [`i64`].
///
/// Floats are truncated toward zero, so pass values that don't need their fractional
/// part (eg: `1111.0`).
///
/// # Errors
///
/// - [`TypeUtilsError::OutOfRange`] for unsigned values above [`i64::MAX`], and for
///   floats that are not finite or don't fit after truncation.
/// - [`TypeUtilsError::ParseInt`] for strings that aren't base-10 integers.
/// - [`TypeUtilsError::UnsupportedType`] for bool, list and nil.
pub fn to_i64(value: &DynValue) -> TypeUtilsResult<i64> {
    let out_of_range = |_| TypeUtilsError::out_of_range(ValueKind::I64);

    let result = match value {
        DynValue::I8(it) => Ok(i64::from(*it)),
        DynValue::I16(it) => Ok(i64::from(*it)),
        DynValue::I32(it) => Ok(i64::from(*it)),
        DynValue::I64(it) => Ok(*it),
        DynValue::Isize(it) => i64::try_from(*it).map_err(out_of_range),
        DynValue::U8(it) => Ok(i64::from(*it)),
        DynValue::U16(it) => Ok(i64::from(*it)),
        DynValue::U32(it) => Ok(i64::from(*it)),
        DynValue::U64(it) => i64::try_from(*it).map_err(out_of_range),
        DynValue::Usize(it) => i64::try_from(*it).map_err(out_of_range),
        DynValue::F32(it) => truncate_to_i64(f64::from(*it)),
        DynValue::F64(it) => truncate_to_i64(*it),
        DynValue::Str(it) => it.parse::<i64>().map_err(TypeUtilsError::from),
        DynValue::Bool(_) | DynValue::List(_) | DynValue::Nil => {
            Err(TypeUtilsError::UnsupportedType {
                operation: OP_TO_I64,
                kind: value.kind(),
            })
        }
    };

    result.map_err(|err| rejected(OP_TO_I64, err))
}

/// Convert to [`u64`].
///
/// # Errors
///
/// - [`TypeUtilsError::OutOfRange`] for negative signed values, negative floats (checked
///   before truncation, so `-0.5` fails), and floats that are not finite or are `>=
///   2^64`.
/// - [`TypeUtilsError::ParseInt`] for strings that aren't base-10 unsigned integers,
///   including ones with a sign (`+5`, `-5`).
/// - [`TypeUtilsError::UnsupportedType`] for bool, list and nil.
pub fn to_u64(value: &DynValue) -> TypeUtilsResult<u64> {
    let out_of_range = |_| TypeUtilsError::out_of_range(ValueKind::U64);

    let result = match value {
        DynValue::I8(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::I16(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::I32(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::I64(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::Isize(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::U8(it) => Ok(u64::from(*it)),
        DynValue::U16(it) => Ok(u64::from(*it)),
        DynValue::U32(it) => Ok(u64::from(*it)),
        DynValue::U64(it) => Ok(*it),
        DynValue::Usize(it) => u64::try_from(*it).map_err(out_of_range),
        DynValue::F32(it) => truncate_to_u64(f64::from(*it)),
        DynValue::F64(it) => truncate_to_u64(*it),
        DynValue::Str(it) => parse_unsigned::<u64>(it).map_err(TypeUtilsError::from),
        DynValue::Bool(_) | DynValue::List(_) | DynValue::Nil => {
            Err(TypeUtilsError::UnsupportedType {
                operation: OP_TO_U64,
                kind: value.kind(),
            })
        }
    };

    result.map_err(|err| rejected(OP_TO_U64, err))
}

/// Convert to [`f64`].
///
/// Unsigned 64-bit values larger than the bit pattern of [`f64::MAX`] are rejected, even
/// though [`f64`] could approximate them. This guard is kept on purpose.
///
/// # Errors
///
/// - [`TypeUtilsError::OutOfRange`] for unsigned values above `f64::MAX.to_bits()`.
/// - [`TypeUtilsError::ParseFloat`] for strings that aren't floats.
/// - [`TypeUtilsError::UnsupportedType`] for bool, list and nil.
#[allow(clippy::cast_precision_loss)]
pub fn to_f64(value: &DynValue) -> TypeUtilsResult<f64> {
    let result = match value {
        DynValue::I8(it) => Ok(f64::from(*it)),
        DynValue::I16(it) => Ok(f64::from(*it)),
        DynValue::I32(it) => Ok(f64::from(*it)),
        DynValue::I64(it) => Ok(*it as f64),
        DynValue::Isize(it) => Ok(*it as f64),
        DynValue::U8(it) => Ok(f64::from(*it)),
        DynValue::U16(it) => Ok(f64::from(*it)),
        DynValue::U32(it) => Ok(f64::from(*it)),
        DynValue::U64(it) => guarded_u64_to_f64(*it),
        DynValue::Usize(it) => u64::try_from(*it)
            .map_err(|_| TypeUtilsError::out_of_range(ValueKind::F64))
            .and_then(guarded_u64_to_f64),
        DynValue::F32(it) => Ok(f64::from(*it)),
        DynValue::F64(it) => Ok(*it),
        DynValue::Str(it) => it.parse::<f64>().map_err(TypeUtilsError::from),
        DynValue::Bool(_) | DynValue::List(_) | DynValue::Nil => {
            Err(TypeUtilsError::UnsupportedType {
                operation: OP_TO_F64,
                kind: value.kind(),
            })
        }
    };

    result.map_err(|err| rejected(OP_TO_F64, err))
}

/// [`to_i64`] followed by a platform-width range check.
///
/// # Errors
///
/// Any error of [`to_i64`], or [`TypeUtilsError::OutOfRange`] for [`isize`], wrapped in
/// [`TypeUtilsError::Context`] with the prefix `to_isize`.
pub fn to_isize(value: &DynValue) -> TypeUtilsResult<isize> {
    to_i64(value)
        .and_then(convert_i64::<isize>)
        .map_err(|err| err.with_context(OP_TO_ISIZE))
}

/// [`to_u64`] followed by a platform-width range check.
///
/// # Errors
///
/// Any error of [`to_u64`], or [`TypeUtilsError::OutOfRange`] for [`usize`], wrapped in
/// [`TypeUtilsError::Context`] with the prefix `to_usize`.
pub fn to_usize(value: &DynValue) -> TypeUtilsResult<usize> {
    to_u64(value)
        .and_then(convert_u64::<usize>)
        .map_err(|err| err.with_context(OP_TO_USIZE))
}

/// Convert every element with [`to_i64`].
///
/// # Errors
///
/// The error of the first element that fails. Nothing is returned for the elements
/// before it.
pub fn to_i64_array(values: &[DynValue]) -> TypeUtilsResult<Vec<i64>> {
    values.iter().map(to_i64).collect()
}

/// Convert every element with [`to_u64`].
///
/// # Errors
///
/// The error of the first element that fails.
pub fn to_u64_array(values: &[DynValue]) -> TypeUtilsResult<Vec<u64>> {
    values.iter().map(to_u64).collect()
}

/// Base-10 unsigned parse that takes digits only. [`FromStr`] for the unsigned types
/// lets a leading `+` through; here it is an invalid digit, like `-`.
pub(crate) fn parse_unsigned<T>(s: &str) -> Result<T, ParseIntError>
where
    T: FromStr<Err = ParseIntError>,
{
    if s.starts_with('+') {
        // A lone sign fails with the same invalid digit error as any other stray char.
        "+".parse::<T>()
    } else {
        s.parse::<T>()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_to_i64(value: f64) -> TypeUtilsResult<i64> {
    let it = value.trunc();
    if it.is_finite() && (-TWO_POW_63..TWO_POW_63).contains(&it) {
        Ok(it as i64)
    } else {
        Err(TypeUtilsError::out_of_range(ValueKind::I64))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u64(value: f64) -> TypeUtilsResult<u64> {
    // NaN fails the first comparison, +inf the second.
    if value >= 0.0 && value.trunc() < TWO_POW_64 {
        Ok(value.trunc() as u64)
    } else {
        Err(TypeUtilsError::out_of_range(ValueKind::U64))
    }
}

#[allow(clippy::cast_precision_loss)]
fn guarded_u64_to_f64(value: u64) -> TypeUtilsResult<f64> {
    if value > f64::MAX.to_bits() {
        Err(TypeUtilsError::out_of_range(ValueKind::F64))
    } else {
        Ok(value as f64)
    }
}
