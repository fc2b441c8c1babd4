//! # skimdex-cli
//!
//! Command-line interface for the Skimdex docset toolkit:
//! - Index management (`rebuild`, `list`, `search`)
//! - Per-file metadata skimming (`skim`)
//! - Export sanitizing (`sanitize`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
