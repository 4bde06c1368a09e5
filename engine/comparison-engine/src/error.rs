//! Error types for comparison generation

use player_registry::RegistryError;
use thiserror::Error;

/// Errors that can abort a comparison.
///
/// Unknown identifiers and analysis failures are not errors here; they
/// degrade to placeholders and fallback text.
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Invalid comparison request: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RegistryError),
}

/// Result type for comparison operations
pub type EngineResult<T> = Result<T, ComparisonError>;
