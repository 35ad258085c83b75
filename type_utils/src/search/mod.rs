// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Adaptive array search and the sort helpers it is built on.
//!
//! Small slices (at most [`SEARCH_THRESHOLD`] elements) are scanned linearly. Larger
//! ones are binary searched, either directly when the caller promises they are sorted
//! ([`find_sorted`]), or after sorting a private copy ([`find`]).

// Attach sources.
pub mod adaptive_search;
pub mod search_element;
pub mod sort;

// Re-export.
pub use adaptive_search::*;
pub use search_element::*;
pub use sort::*;
