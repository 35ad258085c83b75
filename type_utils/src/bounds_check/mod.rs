// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range predicates used before any narrowing conversion.
//!
//! - [`ValueKind`] describes the destination (or the dynamic kind of a value).
//! - [`in_range_of`] and [`in_range_of_unsigned`] answer "does this 64-bit value fit the
//!   integer type described by this kind?" for signed and unsigned sources.
//! - [`in_range`] is the plain inclusive `min <= value <= max` check.
//!
//! ```
//! use r3bl_type_utils::{ValueKind, in_range_of, in_range_of_unsigned};
//!
//! assert!(in_range_of(127, ValueKind::I8));
//! assert!(!in_range_of(128, ValueKind::I8));
//! assert!(!in_range_of(-1, ValueKind::U64));
//! assert!(!in_range_of_unsigned(u64::MAX, ValueKind::I64));
//! ```

// Attach.
pub mod range_predicates;
pub mod value_kind;

// Re-export.
pub use range_predicates::*;
pub use value_kind::*;
