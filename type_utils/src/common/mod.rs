// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod choose;
pub mod type_utils_error;

// Re-export.
pub use choose::*;
pub use type_utils_error::*;
