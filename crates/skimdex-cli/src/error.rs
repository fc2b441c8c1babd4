//! Error types for skimdex-cli

use thiserror::Error;

/// Result type alias for skimdex-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skimdex-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from skimdex-core
    #[error("Core error: {0}")]
    Core(#[from] skimdex_core::Error),

    /// A skim run resolved zero existing target files
    #[error("No markdown files found under {0}")]
    NoTargets(String),
}
