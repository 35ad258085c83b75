// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup. The library itself only emits events: `trace!` for the
//! strategy picked by [`crate::find`] and [`crate::find_sorted`], and `debug!` when a
//! conversion is rejected. Nothing is printed unless a subscriber is installed, eg:
//!
//! ```no_run
//! use r3bl_type_utils::TracingConfig;
//!
//! fn main() -> miette::Result<()> {
//!     TracingConfig::from_env().install_global()?;
//!     Ok(())
//! }
//! ```

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
