use thiserror::Error;

/// Top-level error type for the Ashley system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for AshleyError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AshleyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inference error: {0}")]
    Llm(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for AshleyError {
    fn from(err: toml::de::Error) -> Self {
        AshleyError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AshleyError {
    fn from(err: toml::ser::Error) -> Self {
        AshleyError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AshleyError {
    fn from(err: serde_json::Error) -> Self {
        AshleyError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Ashley operations.
pub type Result<T> = std::result::Result<T, AshleyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AshleyError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = AshleyError::Llm("endpoint unreachable".to_string());
        assert_eq!(err.to_string(), "Inference error: endpoint unreachable");

        let err = AshleyError::Chat("session gone".to_string());
        assert_eq!(err.to_string(), "Chat error: session gone");

        let err = AshleyError::Serialization("bad json".to_string());
        assert_eq!(err.to_string(), "Serialization error: bad json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AshleyError = io_err.into();
        assert!(matches!(err, AshleyError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: AshleyError = parsed.unwrap_err().into();
        assert!(matches!(err, AshleyError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(parsed.is_err());
        let err: AshleyError = parsed.unwrap_err().into();
        assert!(matches!(err, AshleyError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = AshleyError::Config("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("test debug"));
    }
}
