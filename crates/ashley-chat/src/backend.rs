//! Outbound seam toward the inference provider.
//!
//! The chat core never talks HTTP itself; it sends queries through the
//! [`QueryBackend`] trait and receives raw response text. The production
//! implementation lives in `ashley-llm`; [`MockBackend`] provides canned
//! behavior for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ashley_core::error::{AshleyError, Result};

/// Outbound query call toward the inference provider.
///
/// Implementations may fail for any reason (network, quota, malformed
/// input); callers treat every failure uniformly. An empty response string
/// is a valid success and is handled downstream by the dispatcher.
pub trait QueryBackend: Send + Sync {
    /// Send a single query and return the raw response text.
    fn send_query(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Canned behaviors for [`MockBackend`].
#[derive(Debug, Clone)]
enum MockBehavior {
    Reply(String),
    Empty,
    Fail(String),
}

/// Mock backend for testing.
///
/// Returns a deterministic reply, an empty response, or a failure, and
/// counts how many times it was invoked. Clones share the invocation
/// counter.
#[derive(Debug, Clone)]
pub struct MockBackend {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Create a mock that replies with a fixed default answer.
    pub fn new() -> Self {
        Self::with_reply("Mock response from the inference backend.")
    }

    /// Create a mock that replies with the given text.
    pub fn with_reply(text: &str) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that returns an empty response.
    pub fn with_empty() -> Self {
        Self {
            behavior: MockBehavior::Empty,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that fails with the given reason.
    pub fn with_failure(reason: &str) -> Self {
        Self {
            behavior: MockBehavior::Fail(reason.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `send_query` invocations across all clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBackend for MockBackend {
    async fn send_query(&self, _query: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Fail(reason) => Err(AshleyError::Llm(reason.clone())),
        }
    }
}
