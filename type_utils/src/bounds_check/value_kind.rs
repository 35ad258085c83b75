// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Every kind of value this crate knows about. It is used in two roles:
/// 1. Destination descriptor for [`crate::convert_i64_to`] and [`crate::convert_u64_to`],
///    where only the integer kinds are accepted.
/// 2. The tag of a [`crate::DynValue`], reported in
///    [`crate::TypeUtilsError::UnsupportedType`].
///
/// [`ValueKind::Usize`] is also the pointer-sized unsigned kind. The [`Display`] output
/// is the Rust type name, eg: `i8`, `usize`, `f64`.
///
/// [`Display`]: std::fmt::Display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Str,
    Bool,
    List,
    Nil,
}

impl ValueKind {
    #[must_use]
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    #[must_use]
    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    #[must_use]
    pub fn is_integer(self) -> bool { self.is_signed_integer() || self.is_unsigned_integer() }

    #[must_use]
    pub fn is_float(self) -> bool { matches!(self, Self::F32 | Self::F64) }

    /// The ten integer kinds, signed first.
    pub fn integer_kinds() -> impl Iterator<Item = ValueKind> {
        Self::iter().filter(|it| it.is_integer())
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_display_is_rust_type_name() {
        assert_eq2!(ValueKind::I8.to_string(), "i8");
        assert_eq2!(ValueKind::Isize.to_string(), "isize");
        assert_eq2!(ValueKind::Usize.to_string(), "usize");
        assert_eq2!(ValueKind::F64.to_string(), "f64");
        assert_eq2!(ValueKind::Str.to_string(), "str");
        let it: &'static str = ValueKind::Nil.into();
        assert_eq2!(it, "nil");
    }

    #[test]
    fn test_classification() {
        assert_eq2!(ValueKind::COUNT, 16);
        assert_eq2!(ValueKind::integer_kinds().count(), 10);
        assert!(ValueKind::Isize.is_signed_integer());
        assert!(ValueKind::Usize.is_unsigned_integer());
        assert!(!ValueKind::F32.is_integer());
        assert!(ValueKind::F32.is_float());
        assert!(!ValueKind::Str.is_integer());
    }
}
