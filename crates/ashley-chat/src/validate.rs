//! Input admission checks.

use crate::error::ChatError;

/// Validates candidate queries before they are admitted to a turn cycle.
///
/// Pure and stateless: the same input always yields the same verdict, and
/// validation never touches the session.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
}

impl InputValidator {
    /// Create a validator with the given length cap.
    pub fn new(max_message_length: usize) -> Self {
        Self { max_message_length }
    }

    /// Check a candidate query.
    ///
    /// Rejects empty, whitespace-only, and over-long input. Rejected input
    /// must not be appended to the session history.
    pub fn validate(&self, raw: &str) -> Result<(), ChatError> {
        if raw.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if raw.trim().is_empty() {
            return Err(ChatError::WhitespaceOnly);
        }
        if raw.len() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }
        Ok(())
    }
}
