//! Skimdex — umbrella crate.
//!
//! Re-exports the Skimdex components for convenience.

#![doc = include_str!("../README.md")]

pub use skimdex_content as content;
pub use skimdex_core as core;
pub use skimdex_index as index;
pub use skimdex_sanitize as sanitize;
