// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::if_else;

/// Helpers for [`bool`]. Use the [`BT`] instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolType;

pub const BT: BoolType = BoolType;

#[allow(clippy::unused_self)]
impl BoolType {
    #[must_use]
    pub fn if_else(self, condition: bool, true_value: bool, false_value: bool) -> bool {
        if_else(condition, true_value, false_value)
    }

    /// `true` when every value is `true`, including when there are none.
    #[must_use]
    pub fn and(self, values: &[bool]) -> bool { values.iter().all(|it| *it) }

    /// `true` when any value is `true`. `false` when there are none.
    #[must_use]
    pub fn or(self, values: &[bool]) -> bool { values.iter().any(|it| *it) }

    #[must_use]
    pub fn not(self, value: bool) -> bool { !value }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_if_else() {
        assert!(BT.if_else(true, true, false));
        assert!(!BT.if_else(false, true, false));
    }

    #[test_case(&[], true, false)]
    #[test_case(&[true], true, true)]
    #[test_case(&[false], false, false)]
    #[test_case(&[true, false, true], false, true)]
    #[test_case(&[true, true], true, true)]
    fn test_and_or(values: &[bool], and: bool, or: bool) {
        assert_eq!(BT.and(values), and);
        assert_eq!(BT.or(values), or);
    }

    #[test]
    fn test_not() {
        assert!(BT.not(false));
        assert!(!BT.not(true));
    }
}
