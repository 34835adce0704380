//! Error types for the chat core.

use ashley_core::AshleyError;

/// Errors from the chat core.
///
/// Only input admission failures surface here; outbound query failures are
/// absorbed by the dispatcher into a [`crate::QueryResult::Failure`] and
/// never escape as errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message contains only whitespace")]
    WhitespaceOnly,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}

impl From<ChatError> for AshleyError {
    fn from(err: ChatError) -> Self {
        AshleyError::Chat(err.to_string())
    }
}
