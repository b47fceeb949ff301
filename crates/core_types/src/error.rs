//! Errors raised while talking to the profile and news endpoints.

use thiserror::Error;

/// Errors from a dashboard fetch.
///
/// Kept `Clone + PartialEq` so a failed fetch can sit inside reducer state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type for dashboard fetches.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(401).to_string(), "Unexpected HTTP status 401");
        assert_eq!(
            FetchError::Timeout(10_000).to_string(),
            "Request timed out after 10000 ms"
        );
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
