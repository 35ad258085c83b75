// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric conversions that never silently truncate or wrap.
//!
//! - [`safe_convert`] narrows a 64-bit integer into any integer width, with a range
//!   check.
//! - [`dyn_value`] is the dynamically typed input model.
//! - [`canonical`] turns a [`DynValue`] into an [`i64`], [`u64`] or [`f64`].

// Attach sources.
pub mod canonical;
pub mod dyn_value;
pub mod safe_convert;

// Re-export.
pub use canonical::*;
pub use dyn_value::*;
pub use safe_convert::*;
