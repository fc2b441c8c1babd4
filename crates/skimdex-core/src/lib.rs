//! Skimdex Core — shared errors and slug utilities.
//!
//! This crate provides the foundational types used across all Skimdex crates.
//! It has no internal Skimdex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`slug`]: Anchor slugs and fallback titles

#![doc = include_str!("../README.md")]

pub mod error;
pub mod slug;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use slug::{slugify, title_from_path};
