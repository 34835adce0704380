//! Session state for a running conversation.
//!
//! The session is the single piece of mutable state in the chat core: the
//! ordered turn history, the running token estimate, and the quick-start
//! dedup marker. [`SessionStore`] owns at most one session and gives
//! initialization its guard-by-existence idempotence.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ashley_core::{Role, Turn};

// =============================================================================
// Session
// =============================================================================

/// A single running conversation.
///
/// Invariants:
/// - `history` insertion order equals chronological turn order.
/// - `token_estimate` is monotonically non-decreasing for the lifetime of
///   the session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: Vec<Turn>,
    token_estimate: u64,
    last_quick_start: Option<String>,
}

impl Session {
    /// Create a fresh, empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: Vec::new(),
            token_estimate: 0,
            last_quick_start: None,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a turn to the history.
    ///
    /// No validation happens here; admission checks are the caller's
    /// responsibility.
    pub fn append_turn(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Turn::new(role, content));
    }

    /// Add `n` to the running token estimate.
    pub fn add_token_estimate(&mut self, n: u64) {
        self.token_estimate = self.token_estimate.saturating_add(n);
    }

    /// Current token estimate for the conversation.
    pub fn token_estimate(&self) -> u64 {
        self.token_estimate
    }

    /// Read-only view of the turn history, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The most recently selected quick-start prompt, if any.
    pub fn last_quick_start(&self) -> Option<&str> {
        self.last_quick_start.as_deref()
    }

    /// Record a quick-start prompt as the latest selection.
    pub fn set_last_quick_start(&mut self, prompt: impl Into<String>) {
        self.last_quick_start = Some(prompt.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Owner of the process's single conversation session.
///
/// Replaces the original UI framework's ambient per-session global store
/// with an explicit object: `initialize` creates the session only when none
/// exists, so repeated calls never reset an in-progress conversation, and
/// `reset` is the only way to discard one.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    /// Create an empty store with no session.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Get the session, creating it if absent.
    ///
    /// Idempotent: an existing session is returned untouched.
    pub fn initialize(&mut self) -> &mut Session {
        self.session.get_or_insert_with(Session::new)
    }

    /// Whether a session currently exists.
    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, if initialized.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Mutable access to the current session, if initialized.
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Discard the session. The next `initialize` starts a fresh one.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
