//! Query dispatch and failure normalization.
//!
//! The dispatcher is the error boundary around the outbound inference
//! call: whatever happens on the wire, every dispatch produces a
//! well-formed [`QueryResult`] and never propagates a fault to its caller.

use tracing::{debug, error};

use crate::backend::QueryBackend;

/// Substituted when the backend returns no usable text. An empty response
/// is a degraded success, not an error.
pub const FALLBACK_RESPONSE: &str =
    "I couldn't generate a meaningful response. Please try again.";

/// Prefix marking synthesized failure turns so the rendering layer can
/// style them apart from normal content.
pub const ERROR_MARKER: &str = "\u{274c}";

/// Outcome of a single dispatch.
///
/// Transient: produced and consumed within one turn cycle, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// The backend produced response text (possibly the fallback).
    Success {
        /// Response text to append as the assistant turn.
        text: String,
        /// Advisory word-count estimate for the response.
        token_estimate: u64,
    },
    /// The outbound call failed; `message` carries the user-facing error
    /// text including [`ERROR_MARKER`].
    Failure { message: String },
}

impl QueryResult {
    /// Whether this result is a success (including the fallback case).
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }

    /// The text that becomes the assistant turn, success or failure.
    pub fn text(&self) -> &str {
        match self {
            QueryResult::Success { text, .. } => text,
            QueryResult::Failure { message } => message,
        }
    }
}

/// Estimate a token count as the whitespace-delimited word count.
///
/// Deliberately naive: an approximation for advisory accounting, not a
/// tokenizer.
pub fn estimate_tokens(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Dispatches validated queries to the inference backend.
pub struct QueryDispatcher<B: QueryBackend> {
    backend: B,
}

impl<B: QueryBackend> QueryDispatcher<B> {
    /// Create a dispatcher over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run one query against the backend.
    ///
    /// - A failed call becomes `Failure` with a marked user-facing message;
    ///   the reason is logged and never rethrown.
    /// - An empty response becomes `Success` carrying [`FALLBACK_RESPONSE`].
    /// - The token estimate is the word count of the returned (possibly
    ///   substituted) text.
    pub async fn dispatch(&self, query: &str) -> QueryResult {
        match self.backend.send_query(query).await {
            Ok(response) => {
                let text = if response.trim().is_empty() {
                    debug!("Backend returned no text, substituting fallback response");
                    FALLBACK_RESPONSE.to_string()
                } else {
                    response
                };
                let token_estimate = estimate_tokens(&text);
                QueryResult::Success {
                    text,
                    token_estimate,
                }
            }
            Err(e) => {
                error!(error = %e, "Query dispatch failed");
                QueryResult::Failure {
                    message: format!("{} Error processing your request: {}", ERROR_MARKER, e),
                }
            }
        }
    }
}
