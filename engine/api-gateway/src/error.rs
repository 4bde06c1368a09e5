//! Error types for the ApiGateway

use comparison_engine::ComparisonError;
use player_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur starting or running the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Server error: {0}")]
    Server(#[from] warp::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Request-level failures, carried through warp as custom rejections
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request fields (400)
    InvalidInput(String),

    /// Unknown identifier on a direct lookup (404)
    NotFound(String),

    /// Anything unexpected (500)
    Internal(String),
}

impl warp::reject::Reject for ApiError {}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidInput(message) => ApiError::InvalidInput(message),
            RegistryError::PlayerNotFound(_) => ApiError::NotFound("Player not found".to_string()),
            RegistryError::StatsNotFound(_) => {
                ApiError::NotFound("Player stats not found".to_string())
            }
            RegistryError::AchievementsNotFound(_) => {
                ApiError::NotFound("Player achievements not found".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        match err {
            ComparisonError::InvalidInput(message) => ApiError::InvalidInput(message),
            ComparisonError::Repository(inner) => ApiError::from(inner),
        }
    }
}

/// Result type for ApiGateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_mapping() {
        assert!(matches!(ApiError::from(RegistryError::PlayerNotFound(9)), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from(RegistryError::StatsNotFound(9)), ApiError::NotFound(_)));
        assert!(matches!(
            ApiError::from(RegistryError::InvalidInput("q".to_string())),
            ApiError::InvalidInput(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(matches!(ApiError::from(RegistryError::Io(io)), ApiError::Internal(_)));
    }

    #[test]
    fn test_comparison_error_mapping() {
        let err = ComparisonError::InvalidInput("At least two player IDs are required".to_string());
        assert!(matches!(ApiError::from(err), ApiError::InvalidInput(_)));

        let err = ComparisonError::Repository(RegistryError::AchievementsNotFound(1));
        assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));
    }
}
