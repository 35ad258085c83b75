// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ValueKind;

/// Inclusive range check: `min <= value <= max`.
///
/// ```
/// use r3bl_type_utils::in_range;
///
/// assert!(in_range(2, 1, 3));
/// assert!(in_range(3, 1, 3));
/// assert!(!in_range(4, 1, 3));
/// ```
#[must_use]
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Whether the signed `value` is representable in the integer type described by `kind`.
/// Non-integer kinds are never satisfied.
///
/// The platform-width kinds use [`isize`] and [`usize`] directly, so the answer follows
/// the width the crate was compiled for. A negative `value` never fits an unsigned kind.
#[must_use]
pub fn in_range_of(value: i64, kind: ValueKind) -> bool {
    match kind {
        ValueKind::I8 => i8::try_from(value).is_ok(),
        ValueKind::I16 => i16::try_from(value).is_ok(),
        ValueKind::I32 => i32::try_from(value).is_ok(),
        ValueKind::I64 => true,
        ValueKind::Isize => isize::try_from(value).is_ok(),
        ValueKind::U8 => u8::try_from(value).is_ok(),
        ValueKind::U16 => u16::try_from(value).is_ok(),
        ValueKind::U32 => u32::try_from(value).is_ok(),
        ValueKind::U64 => value >= 0,
        ValueKind::Usize => usize::try_from(value).is_ok(),
        ValueKind::F32
        | ValueKind::F64
        | ValueKind::Str
        | ValueKind::Bool
        | ValueKind::List
        | ValueKind::Nil => false,
    }
}

/// Whether the unsigned `value` is representable in the integer type described by
/// `kind`. The comparison is done on the unsigned value, so a large `u64` is never
/// mistaken for a negative number.
#[must_use]
pub fn in_range_of_unsigned(value: u64, kind: ValueKind) -> bool {
    match kind {
        ValueKind::I8 => i8::try_from(value).is_ok(),
        ValueKind::I16 => i16::try_from(value).is_ok(),
        ValueKind::I32 => i32::try_from(value).is_ok(),
        ValueKind::I64 => i64::try_from(value).is_ok(),
        ValueKind::Isize => isize::try_from(value).is_ok(),
        ValueKind::U8 => u8::try_from(value).is_ok(),
        ValueKind::U16 => u16::try_from(value).is_ok(),
        ValueKind::U32 => u32::try_from(value).is_ok(),
        ValueKind::U64 => true,
        ValueKind::Usize => usize::try_from(value).is_ok(),
        ValueKind::F32
        | ValueKind::F64
        | ValueKind::Str
        | ValueKind::Bool
        | ValueKind::List
        | ValueKind::Nil => false,
    }
}
