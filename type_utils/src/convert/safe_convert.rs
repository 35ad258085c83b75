// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range checked narrowing (and widening) of a 64-bit integer into any other integer
//! width.
//!
//! The destination is described by a [`ValueKind`]. The value is checked with
//! [`in_range_of`] / [`in_range_of_unsigned`] first, and only then cast, so the `as`
//! casts below never truncate or wrap.
//!
//! ```
//! use r3bl_type_utils::{IntValue, ValueKind, convert_i64, convert_u64_to};
//!
//! assert!(convert_u64_to(1234, ValueKind::I8).is_err());
//! assert_eq!(convert_u64_to(1234, ValueKind::I16).unwrap(), IntValue::I16(1234));
//!
//! let it: u8 = convert_i64(123).unwrap();
//! assert_eq!(it, 123);
//! assert!(convert_i64::<u64>(-1).is_err());
//! ```

use crate::{TypeUtilsError, TypeUtilsResult, ValueKind, in_range_of,
            in_range_of_unsigned};

/// The result of a successful [`convert_i64_to`] or [`convert_u64_to`]. There is one
/// variant per integer [`ValueKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl IntValue {
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::Isize(_) => ValueKind::Isize,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::Usize(_) => ValueKind::Usize,
        }
    }

    /// Widen to [`i128`], which holds every value of every variant exactly. Handy for
    /// comparing results across widths.
    #[must_use]
    #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
    pub fn as_i128(self) -> i128 {
        match self {
            Self::I8(it) => i128::from(it),
            Self::I16(it) => i128::from(it),
            Self::I32(it) => i128::from(it),
            Self::I64(it) => i128::from(it),
            Self::Isize(it) => it as i128,
            Self::U8(it) => i128::from(it),
            Self::U16(it) => i128::from(it),
            Self::U32(it) => i128::from(it),
            Self::U64(it) => i128::from(it),
            Self::Usize(it) => it as i128,
        }
    }
}

/// Convert a signed 64-bit value into the integer type described by `kind`.
///
/// # Errors
///
/// - [`TypeUtilsError::UnsupportedConversion`] if `kind` is not an integer kind.
/// - [`TypeUtilsError::OutOfRange`] (naming the destination type) if `from` does not fit.
///   A negative `from` never fits an unsigned destination.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn convert_i64_to(from: i64, kind: ValueKind) -> TypeUtilsResult<IntValue> {
    if kind.is_integer() && !in_range_of(from, kind) {
        return Err(rejected("convert_i64_to", TypeUtilsError::out_of_range(kind)));
    }

    let it = match kind {
        ValueKind::I8 => IntValue::I8(from as i8),
        ValueKind::I16 => IntValue::I16(from as i16),
        ValueKind::I32 => IntValue::I32(from as i32),
        ValueKind::I64 => IntValue::I64(from),
        ValueKind::Isize => IntValue::Isize(from as isize),
        ValueKind::U8 => IntValue::U8(from as u8),
        ValueKind::U16 => IntValue::U16(from as u16),
        ValueKind::U32 => IntValue::U32(from as u32),
        ValueKind::U64 => IntValue::U64(from as u64),
        ValueKind::Usize => IntValue::Usize(from as usize),
        ValueKind::F32
        | ValueKind::F64
        | ValueKind::Str
        | ValueKind::Bool
        | ValueKind::List
        | ValueKind::Nil => {
            return Err(rejected(
                "convert_i64_to",
                TypeUtilsError::UnsupportedConversion { kind },
            ));
        }
    };

    Ok(it)
}

/// Convert an unsigned 64-bit value into the integer type described by `kind`. Mirrors
/// [`convert_i64_to`].
///
/// # Errors
///
/// - [`TypeUtilsError::UnsupportedConversion`] if `kind` is not an integer kind.
/// - [`TypeUtilsError::OutOfRange`] (naming the destination type) if `from` does not fit.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn convert_u64_to(from: u64, kind: ValueKind) -> TypeUtilsResult<IntValue> {
    if kind.is_integer() && !in_range_of_unsigned(from, kind) {
        return Err(rejected("convert_u64_to", TypeUtilsError::out_of_range(kind)));
    }

    let it = match kind {
        ValueKind::I8 => IntValue::I8(from as i8),
        ValueKind::I16 => IntValue::I16(from as i16),
        ValueKind::I32 => IntValue::I32(from as i32),
        ValueKind::I64 => IntValue::I64(from as i64),
        ValueKind::Isize => IntValue::Isize(from as isize),
        ValueKind::U8 => IntValue::U8(from as u8),
        ValueKind::U16 => IntValue::U16(from as u16),
        ValueKind::U32 => IntValue::U32(from as u32),
        ValueKind::U64 => IntValue::U64(from),
        ValueKind::Usize => IntValue::Usize(from as usize),
        ValueKind::F32
        | ValueKind::F64
        | ValueKind::Str
        | ValueKind::Bool
        | ValueKind::List
        | ValueKind::Nil => {
            return Err(rejected(
                "convert_u64_to",
                TypeUtilsError::UnsupportedConversion { kind },
            ));
        }
    };

    Ok(it)
}

/// An integer primitive that can be the destination of [`convert_i64`] and
/// [`convert_u64`].
pub trait TargetInt: Copy {
    const KIND: ValueKind;

    /// Unwrap the matching [`IntValue`] variant.
    fn from_int_value(value: IntValue) -> Option<Self>;
}

macro_rules! impl_target_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TargetInt for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_int_value(value: IntValue) -> Option<Self> {
                    if let IntValue::$variant(it) = value { Some(it) } else { None }
                }
            }
        )*
    };
}

impl_target_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

/// Typed form of [`convert_i64_to`]: the destination is picked by the type parameter.
///
/// # Errors
///
/// [`TypeUtilsError::OutOfRange`] if `from` does not fit in `T`.
pub fn convert_i64<T: TargetInt>(from: i64) -> TypeUtilsResult<T> {
    convert_i64_to(from, T::KIND).and_then(unwrap_target::<T>)
}

/// Typed form of [`convert_u64_to`].
///
/// # Errors
///
/// [`TypeUtilsError::OutOfRange`] if `from` does not fit in `T`.
pub fn convert_u64<T: TargetInt>(from: u64) -> TypeUtilsResult<T> {
    convert_u64_to(from, T::KIND).and_then(unwrap_target::<T>)
}

fn unwrap_target<T: TargetInt>(value: IntValue) -> TypeUtilsResult<T> {
    T::from_int_value(value).ok_or_else(|| {
        TypeUtilsError::invalid_argument(format!(
            "destination is {} but the converted value is {}",
            T::KIND,
            value.kind()
        ))
    })
}

/// Log a rejected conversion and hand the error back.
pub(crate) fn rejected(operation: &'static str, err: TypeUtilsError) -> TypeUtilsError {
    tracing::debug!(operation, %err, "conversion rejected");
    err
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    /// Bounds computed independently of [`in_range_of`], using [`i128`].
    #[allow(clippy::cast_lossless)]
    fn bounds(kind: ValueKind) -> (i128, i128) {
        match kind {
            ValueKind::I8 => (i8::MIN.into(), i8::MAX.into()),
            ValueKind::I16 => (i16::MIN.into(), i16::MAX.into()),
            ValueKind::I32 => (i32::MIN.into(), i32::MAX.into()),
            ValueKind::I64 => (i64::MIN.into(), i64::MAX.into()),
            ValueKind::Isize => (isize::MIN as i128, isize::MAX as i128),
            ValueKind::U8 => (0, u8::MAX.into()),
            ValueKind::U16 => (0, u16::MAX.into()),
            ValueKind::U32 => (0, u32::MAX.into()),
            ValueKind::U64 => (0, u64::MAX.into()),
            ValueKind::Usize => (0, usize::MAX as i128),
            _ => panic!("not an integer kind: {kind}"),
        }
    }

    const SIGNED_SAMPLES: [i64; 18] = [
        i64::MIN,
        -2_147_483_649,
        -2_147_483_648,
        -32_769,
        -32_768,
        -129,
        -128,
        -1,
        0,
        1,
        127,
        128,
        255,
        256,
        1234,
        65_536,
        4_294_967_296,
        i64::MAX,
    ];

    const UNSIGNED_SAMPLES: [u64; 12] = [
        0,
        1,
        127,
        128,
        255,
        256,
        1234,
        32_768,
        65_536,
        4_294_967_296,
        9_223_372_036_854_775_808,
        u64::MAX,
    ];

    #[test]
    fn test_convert_i64_to_succeeds_iff_in_range() {
        for kind in ValueKind::integer_kinds() {
            let (min, max) = bounds(kind);
            for from in SIGNED_SAMPLES {
                let expected_ok = (min..=max).contains(&i128::from(from));
                match convert_i64_to(from, kind) {
                    Ok(it) => {
                        assert!(expected_ok, "{from} should not fit {kind}");
                        assert_eq2!(it.kind(), kind);
                        assert_eq2!(it.as_i128(), i128::from(from));
                    }
                    Err(err) => {
                        assert!(!expected_ok, "{from} should fit {kind}");
                        assert_eq2!(err, TypeUtilsError::out_of_range(kind));
                    }
                }
            }
        }
    }

    #[test]
    fn test_convert_u64_to_succeeds_iff_in_range() {
        for kind in ValueKind::integer_kinds() {
            let (min, max) = bounds(kind);
            for from in UNSIGNED_SAMPLES {
                let expected_ok = (min..=max).contains(&i128::from(from));
                match convert_u64_to(from, kind) {
                    Ok(it) => {
                        assert!(expected_ok, "{from} should not fit {kind}");
                        assert_eq2!(it.as_i128(), i128::from(from));
                    }
                    Err(err) => {
                        assert!(!expected_ok, "{from} should fit {kind}");
                        assert_eq2!(err, TypeUtilsError::out_of_range(kind));
                    }
                }
            }
        }
    }

    #[test]
    fn test_convert_u64_1234() {
        assert_eq2!(
            convert_u64_to(1234, ValueKind::I8),
            Err(TypeUtilsError::OutOfRange { type_name: "i8" })
        );
        assert_eq2!(convert_u64_to(1234, ValueKind::I16), Ok(IntValue::I16(1234)));
    }

    #[test_case(ValueKind::U8)]
    #[test_case(ValueKind::U16)]
    #[test_case(ValueKind::U32)]
    #[test_case(ValueKind::U64)]
    #[test_case(ValueKind::Usize)]
    fn test_negative_never_wraps_to_unsigned(kind: ValueKind) {
        let err = convert_i64_to(-1, kind).unwrap_err();
        assert_eq2!(err.to_string(), format!("out of range for {kind}"));
    }

    #[test_case(ValueKind::F32)]
    #[test_case(ValueKind::F64)]
    #[test_case(ValueKind::Str)]
    #[test_case(ValueKind::Bool)]
    #[test_case(ValueKind::List)]
    #[test_case(ValueKind::Nil)]
    fn test_non_integer_destination_is_unsupported(kind: ValueKind) {
        assert_eq2!(
            convert_i64_to(1, kind),
            Err(TypeUtilsError::UnsupportedConversion { kind })
        );
        assert_eq2!(
            convert_u64_to(1, kind),
            Err(TypeUtilsError::UnsupportedConversion { kind })
        );
    }

    #[test]
    fn test_typed_conversion() {
        assert_eq2!(convert_i64::<i16>(1234), Ok(1234_i16));
        assert_eq2!(convert_i64::<i64>(i64::from(i32::MAX) + 1), Ok(2_147_483_648));
        assert!(convert_i64::<i32>(i64::from(i32::MAX) + 1).is_err());
        assert_eq2!(convert_i64::<u8>(123), Ok(123_u8));
        assert!(convert_i64::<u8>(65_536).is_err());
        assert!(convert_i64::<u16>(65_536).is_err());
        assert_eq2!(convert_i64::<u32>(65_536), Ok(65_536_u32));
        assert!(convert_i64::<usize>(-1).is_err());
        assert_eq2!(convert_u64::<i64>(42), Ok(42_i64));
        assert!(convert_u64::<i64>(u64::MAX).is_err());
        assert_eq2!(convert_u64::<usize>(7), Ok(7_usize));
    }
}
