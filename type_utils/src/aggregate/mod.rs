// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod aggregate_impl;

// Re-export.
pub use aggregate_impl::*;
