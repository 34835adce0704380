//! Error types for the inference adapter.

use ashley_core::AshleyError;
use thiserror::Error;

/// Errors from the inference endpoint adapter.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("rate limited by the inference endpoint")]
    RateLimited,
    #[error("inference endpoint error ({status}): {message}")]
    Endpoint { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Request(err.to_string())
    }
}

impl From<LlmError> for AshleyError {
    fn from(err: LlmError) -> Self {
        AshleyError::Llm(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::MissingApiKey("IONOS_API_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "missing API key: environment variable IONOS_API_TOKEN is not set"
        );

        let err = LlmError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");

        let err = LlmError::Auth("invalid token".to_string());
        assert_eq!(err.to_string(), "authentication rejected: invalid token");

        let err = LlmError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by the inference endpoint");

        let err = LlmError::Endpoint {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "inference endpoint error (503): overloaded"
        );

        let err = LlmError::MalformedResponse("missing choices".to_string());
        assert_eq!(err.to_string(), "malformed response: missing choices");
    }

    #[test]
    fn test_llm_error_into_ashley_error() {
        let err: AshleyError = LlmError::RateLimited.into();
        assert!(matches!(err, AshleyError::Llm(_)));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", LlmError::RateLimited);
        assert!(dbg.contains("RateLimited"));
    }
}
