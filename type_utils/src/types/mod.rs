// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One unit struct per primitive family, each with a constant instance, so helpers read
//! as `ST.sub(..)`, `IT.find(..)`, `FT.round(..)` and so on.
//!
//! | instance | type          | works on            |
//! |----------|---------------|---------------------|
//! | [`ST`]   | [`StrType`]   | `&str`              |
//! | [`IT`]   | [`IntType`]   | [`i64`]             |
//! | [`UT`]   | [`UintType`]  | [`u64`]             |
//! | [`FT`]   | [`FloatType`] | [`f64`]             |
//! | [`BT`]   | [`BoolType`]  | [`bool`]            |
//! | [`AT`]   | [`AnyType`]   | [`crate::DynValue`] |

// Attach sources.
mod numeric_surface;

pub mod any_type;
pub mod bool_type;
pub mod float_type;
pub mod int_type;
pub mod str_type;
pub mod uint_type;

// Re-export.
pub use any_type::*;
pub use bool_type::*;
pub use float_type::*;
pub use int_type::*;
pub use str_type::*;
pub use uint_type::*;
