// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ValueKind;

/// A dynamically typed value. The canonical converters in [`crate::convert::canonical`]
/// pattern-match on this instead of inspecting types at runtime.
///
/// Every primitive converts into a [`DynValue`] with [`From`], so call sites rarely name
/// a variant:
///
/// ```
/// use r3bl_type_utils::{DynValue, ValueKind};
///
/// assert_eq!(DynValue::from(12_u16).kind(), ValueKind::U16);
/// assert_eq!(DynValue::from("12").kind(), ValueKind::Str);
/// assert_eq!(DynValue::default().kind(), ValueKind::Nil);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynValue {
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
    F32(f32),
    F64(f64),
    Str(String),
    Bool(bool),
    List(Vec<DynValue>),
    #[default]
    Nil,
}

impl DynValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
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
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Str(_) => ValueKind::Str,
            Self::Bool(_) => ValueKind::Bool,
            Self::List(_) => ValueKind::List,
            Self::Nil => ValueKind::Nil,
        }
    }
}

macro_rules! impl_from_for_dyn_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynValue {
                fn from(it: $ty) -> Self { Self::$variant(it) }
            }
        )*
    };
}

impl_from_for_dyn_value! {
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
    f32 => F32,
    f64 => F64,
    String => Str,
    bool => Bool,
    Vec<DynValue> => List,
}

impl From<&str> for DynValue {
    fn from(it: &str) -> Self { Self::Str(it.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_from_primitives_sets_kind() {
        assert_eq2!(DynValue::from(1_i8).kind(), ValueKind::I8);
        assert_eq2!(DynValue::from(1_isize).kind(), ValueKind::Isize);
        assert_eq2!(DynValue::from(1_u64).kind(), ValueKind::U64);
        assert_eq2!(DynValue::from(1_usize).kind(), ValueKind::Usize);
        assert_eq2!(DynValue::from(1.5_f32).kind(), ValueKind::F32);
        assert_eq2!(DynValue::from(true).kind(), ValueKind::Bool);
        assert_eq2!(DynValue::from("hello".to_string()).kind(), ValueKind::Str);
        assert_eq2!(DynValue::from(Vec::<DynValue>::new()).kind(), ValueKind::List);
    }

    #[test]
    fn test_list_holds_nested_values() {
        let it = DynValue::from(vec![DynValue::from(1_i32), DynValue::from("a")]);
        match it {
            DynValue::List(items) => {
                assert_eq2!(items.len(), 2);
                assert_eq2!(items[1], DynValue::Str("a".into()));
            }
            other => panic!("expected a list, got {other:?}"),
        }
    }
}
