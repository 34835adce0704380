//! Session and query orchestration for Ashley.
//!
//! Provides the conversation session store, input admission checks,
//! dispatch of user queries to the inference backend, and the turn-cycle
//! controller tying them together. The inference provider and the
//! presentation layer are reached exclusively through the [`QueryBackend`]
//! and [`TurnRenderer`] seams.

pub mod backend;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod session;
pub mod validate;

pub use backend::{MockBackend, QueryBackend};
pub use controller::{InteractionController, QuickStartOutcome};
pub use dispatch::{estimate_tokens, QueryDispatcher, QueryResult, ERROR_MARKER, FALLBACK_RESPONSE};
pub use error::ChatError;
pub use render::{MockRenderer, TurnRenderer};
pub use session::{Session, SessionStore};
pub use validate::InputValidator;
