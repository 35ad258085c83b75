// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, rngs::ThreadRng};

use crate::{convert::canonical::parse_unsigned, if_else};

/// Letters and digits, without the easily confused `i`, `l`, `o` and `0`.
pub const LETTERS_AND_DIGITS: &str = "abcdefghjkmnpqrstuvwxyz123456789";

/// Lowercase letters, without `i` and `l`.
pub const LETTERS: &str = "abcdefghjkmnopqrstuvwxyz";

pub const DIGITS: &str = "0123456789";

/// Helpers for strings. Use the [`ST`] instance.
///
/// The parsing helpers (eg: [`StrType::int`]) never fail. They return the given default
/// when the string doesn't parse.
///
/// ```
/// use r3bl_type_utils::ST;
///
/// assert_eq!(ST.int("42", -1), 42);
/// assert_eq!(ST.int("4x2", -1), -1);
/// assert_eq!(ST.sub("测试中", 0, 2), "测试");
/// assert_eq!(ST.upper_first("hello"), "Hello");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrType;

pub const ST: StrType = StrType;

#[allow(clippy::unused_self)]
impl StrType {
    #[must_use]
    pub fn if_else<'a>(
        self,
        condition: bool,
        true_value: &'a str,
        false_value: &'a str,
    ) -> &'a str {
        if_else(condition, true_value, false_value)
    }

    /// Base-10 signed integer, or `default`.
    #[must_use]
    pub fn int(self, s: &str, default: isize) -> isize { s.parse().unwrap_or(default) }

    /// Base-10 unsigned integer, or `default`. Any sign (`+` or `-`) is a parse failure.
    #[must_use]
    pub fn uint(self, s: &str, default: usize) -> usize {
        parse_unsigned(s).unwrap_or(default)
    }

    /// Like [`StrType::uint`], but `0` also yields `default`.
    #[must_use]
    pub fn pint(self, s: &str, default: usize) -> usize {
        match self.uint(s, default) {
            0 => default,
            it => it,
        }
    }

    /// Decimal or scientific float, or `default`.
    #[must_use]
    pub fn float(self, s: &str, default: f64) -> f64 { s.parse().unwrap_or(default) }

    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`. Anything else yields
    /// `default`.
    #[must_use]
    pub fn bool(self, s: &str, default: bool) -> bool {
        match s {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
            "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
            _ => default,
        }
    }

    #[must_use]
    pub fn is_int(self, s: &str) -> bool { s.parse::<isize>().is_ok() }

    #[must_use]
    pub fn is_num(self, s: &str) -> bool { s.parse::<f64>().is_ok() }

    #[must_use]
    pub fn is_empty(self, s: &str) -> bool { s.is_empty() }

    /// Substring counted in [`char`]s, not bytes. Both ends are clamped to the string,
    /// so this never panics.
    #[must_use]
    pub fn sub(self, s: &str, begin: usize, length: usize) -> String {
        s.chars().skip(begin).take(length).collect()
    }

    #[must_use]
    pub fn upper_first(self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[must_use]
    pub fn lower_first(self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Random string of `len` chars picked from [`LETTERS_AND_DIGITS`].
    #[must_use]
    pub fn rand(self, len: usize) -> String { self.rand_chars(LETTERS_AND_DIGITS, len) }

    /// Random string of `len` chars picked from [`LETTERS`].
    #[must_use]
    pub fn rand_letters(self, len: usize) -> String { self.rand_chars(LETTERS, len) }

    /// Random string of `len` chars picked from [`DIGITS`].
    #[must_use]
    pub fn rand_numbers(self, len: usize) -> String { self.rand_chars(DIGITS, len) }

    /// Random string of `len` chars picked from `chars`. Empty when `chars` is empty.
    #[must_use]
    pub fn rand_chars(self, chars: &str, len: usize) -> String {
        let pool: Vec<char> = chars.chars().collect();
        if pool.is_empty() {
            return String::new();
        }

        let mut rng: ThreadRng = rand::rng();
        (0..len)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect()
    }

    #[must_use]
    pub fn linear_find(self, value: &str, arr: &[&str]) -> Option<usize> {
        crate::linear_find(&value, arr)
    }

    #[must_use]
    pub fn binary_search(self, value: &str, arr: &[&str], ascending: bool) -> Option<usize> {
        crate::binary_search(&value, arr, ascending)
    }

    #[must_use]
    pub fn sort_and_binary_search(self, value: &str, arr: &[&str]) -> Option<usize> {
        crate::sort_and_binary_search(&value, arr)
    }

    #[must_use]
    pub fn find(self, value: &str, arr: &[&str]) -> Option<usize> {
        crate::find(&value, arr)
    }

    #[must_use]
    pub fn find_sorted(self, value: &str, arr: &[&str], ascending: bool) -> Option<usize> {
        crate::find_sorted(&value, arr, ascending)
    }

    #[must_use]
    pub fn in_array(self, value: &str, arr: &[&str]) -> bool {
        crate::in_array(&value, arr)
    }

    #[must_use]
    pub fn in_sorted_array(self, value: &str, arr: &[&str], ascending: bool) -> bool {
        crate::in_sorted_array(&value, arr, ascending)
    }

    pub fn sort_ascending(self, arr: &mut [&str]) { crate::sort_ascending(arr); }

    pub fn sort_descending(self, arr: &mut [&str]) { crate::sort_descending(arr); }
}
