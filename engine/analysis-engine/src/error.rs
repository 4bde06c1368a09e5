//! Error types for the analysis engine

use thiserror::Error;

/// Failures talking to the language-model service.
///
/// These never reach HTTP callers: [`crate::AnalysisGenerator`] converts them
/// into safe default values.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Language model integration is not configured")]
    NotConfigured,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Language model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed language model response: {0}")]
    MalformedResponse(String),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
