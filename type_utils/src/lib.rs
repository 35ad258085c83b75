// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_type_utils
//!
//! Small, stateless helpers for the primitive types, grouped by type:
//!
//! | instance | helpers for                | eg                                   |
//! |----------|----------------------------|--------------------------------------|
//! | [`ST`]   | strings                    | `ST.int("42", 0)`, `ST.sub(s, 0, 2)` |
//! | [`IT`]   | signed integers (`i64`)    | `IT.convert_to(1234, ValueKind::I16)` |
//! | [`UT`]   | unsigned integers (`u64`)  | `UT.find(3, &arr)`                   |
//! | [`FT`]   | floats (`f64`)             | `FT.round(1.234, 2)`                 |
//! | [`BT`]   | booleans                   | `BT.and(&[true, false])`             |
//! | [`AT`]   | dynamic values             | `AT.int64("123")`                    |
//!
//! The generic functions they delegate to are also exported at the crate root.
//!
//! ## Conversions never truncate
//!
//! Every narrowing conversion checks the destination range first, and returns a
//! [`TypeUtilsError`] when the value doesn't fit. See [`convert_i64_to`], [`to_i64`] and
//! friends.
//!
//! ```
//! use r3bl_type_utils::{DynValue, IntValue, TypeUtilsError, ValueKind, convert_u64_to,
//!                       to_i64};
//!
//! assert_eq!(
//!     convert_u64_to(1234, ValueKind::I8),
//!     Err(TypeUtilsError::OutOfRange { type_name: "i8" })
//! );
//! assert_eq!(convert_u64_to(1234, ValueKind::I16), Ok(IntValue::I16(1234)));
//! assert_eq!(to_i64(&DynValue::from("123")), Ok(123));
//! ```
//!
//! ## Adaptive search
//!
//! [`find`] scans slices of at most [`SEARCH_THRESHOLD`] elements linearly, and binary
//! searches a sorted copy of longer ones. In the second case the index is a position in
//! the **sorted** copy.
//!
//! ```
//! use r3bl_type_utils::{IT, find};
//!
//! let arr = [1, -3, -2, 2, 3, 4, -1, -5, 0, 5, -4];
//! assert_eq!(find(&-2, &arr), Some(3));
//! assert_eq!(IT.linear_find(-2, &arr), Some(2));
//! ```
//!
//! ## Logging
//!
//! Events are emitted with [`tracing`]. Install a subscriber with [`TracingConfig`] to
//! see them, eg: `TracingConfig::from_env().install_global()`.

// Enforce strict error handling in library code only. Tests are allowed to use
// .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod aggregate;
pub mod bounds_check;
pub mod common;
pub mod convert;
pub mod copy_fields;
pub mod decl_macros;
pub mod env;
pub mod log;
pub mod search;
pub mod types;

// Re-export.
pub use aggregate::*;
pub use bounds_check::*;
pub use common::*;
pub use convert::*;
pub use copy_fields::*;
pub use env::*;
pub use log::*;
pub use search::*;
pub use types::*;
