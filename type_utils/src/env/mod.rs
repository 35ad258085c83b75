// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod env_reader;

// Re-export.
pub use env_reader::*;
