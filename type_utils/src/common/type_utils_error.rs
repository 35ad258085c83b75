// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type shared by every fallible operation in this crate.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Each variant is a [`miette::Diagnostic`], so it can be returned from a
//! `main() -> miette::Result<()>` and rendered with its code and help text.

use std::num::{ParseFloatError, ParseIntError};

use crate::ValueKind;

/// Type alias to make it easy to work with [`TypeUtilsError`].
pub type TypeUtilsResult<T> = Result<T, TypeUtilsError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum TypeUtilsError {
    /// The dynamic kind of the input is not one the operation accepts.
    #[error("{operation}: unsupported type {kind}")]
    #[diagnostic(
        code(r3bl_type_utils::unsupported_type),
        help("Pass an integer, a float, or a decimal string")
    )]
    UnsupportedType {
        operation: &'static str,
        kind: ValueKind,
    },

    /// The destination kind is not an integer kind.
    #[error("unsupported conversion to {kind}")]
    #[diagnostic(
        code(r3bl_type_utils::unsupported_conversion),
        help("Only integer destinations (i8 .. isize, u8 .. usize) are supported")
    )]
    UnsupportedConversion { kind: ValueKind },

    /// The value can't be represented in the destination type.
    #[error("out of range for {type_name}")]
    #[diagnostic(code(r3bl_type_utils::out_of_range))]
    OutOfRange { type_name: &'static str },

    /// The string is not a base-10 integer. The message is the one produced by
    /// [`str::parse`], unchanged.
    #[error(transparent)]
    #[diagnostic(code(r3bl_type_utils::parse_int))]
    ParseInt(#[from] ParseIntError),

    /// The string is not a decimal or scientific float.
    #[error(transparent)]
    #[diagnostic(code(r3bl_type_utils::parse_float))]
    ParseFloat(#[from] ParseFloatError),

    /// An argument is structurally invalid for the requested operation.
    #[error("invalid argument: {message}")]
    #[diagnostic(code(r3bl_type_utils::invalid_argument))]
    InvalidArgument { message: String },

    /// A composed operation failed. The inner error is kept as the [`source`] and its
    /// message is repeated after the prefix.
    ///
    /// [`source`]: std::error::Error::source
    #[error("{context}: {source}")]
    #[diagnostic(code(r3bl_type_utils::context))]
    Context {
        context: &'static str,
        source: Box<TypeUtilsError>,
    },
}

impl TypeUtilsError {
    pub fn out_of_range(kind: ValueKind) -> Self {
        Self::OutOfRange {
            type_name: kind.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wrap `self` with the name of the composed operation that observed it.
    #[must_use]
    pub fn with_context(self, context: &'static str) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Walk [`TypeUtilsError::Context`] wrappers down to the error that started the
    /// chain.
    #[must_use]
    pub fn root_cause(&self) -> &TypeUtilsError {
        let mut it = self;
        while let Self::Context { source, .. } = it {
            it = source;
        }
        it
    }
}
