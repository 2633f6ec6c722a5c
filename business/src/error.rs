use thiserror::Error;

/// Failure of a single call against the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode {context}: {message}")]
    Decode { context: String, message: String },
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn decode(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

/// Configuration could not be assembled from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("TABLE_MAX_ROWS must be at least 1")]
    ZeroMaxRows,
    #[error("API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "API returned status: 503");
    }

    #[test]
    fn test_decode_error_carries_context() {
        let err = ApiError::decode("RevenueStats", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "failed to decode RevenueStats: expected value at line 1"
        );
    }
}
