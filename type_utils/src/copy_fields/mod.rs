// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod struct_copy;

// Re-export.
pub use struct_copy::*;
