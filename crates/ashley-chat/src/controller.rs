//! Turn-cycle orchestration.
//!
//! The controller ties validator, dispatcher, and renderer together and
//! exposes the two inbound entry points: free-form chat input and
//! quick-start selections. Both converge on one shared turn cycle:
//! validate, append and render the user turn, dispatch, append and render
//! the assistant turn.
//!
//! Both entry points take `&mut Session`, so the borrow checker enforces
//! the one-turn-cycle-at-a-time rule: no second cycle can start on a
//! session while one is suspended at the outbound call.

use ashley_core::config::ChatConfig;
use ashley_core::Role;
use tracing::{debug, warn};

use crate::backend::QueryBackend;
use crate::dispatch::{QueryDispatcher, QueryResult};
use crate::error::ChatError;
use crate::render::TurnRenderer;
use crate::session::Session;
use crate::validate::InputValidator;

/// Outcome of a quick-start selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickStartOutcome {
    /// The prompt ran a full turn cycle.
    Dispatched,
    /// The prompt matched the previous selection and was ignored.
    DuplicateIgnored,
}

/// Orchestrates turn cycles for a conversation session.
pub struct InteractionController<B: QueryBackend, R: TurnRenderer> {
    validator: InputValidator,
    dispatcher: QueryDispatcher<B>,
    renderer: R,
    max_conversation_tokens: u64,
}

impl<B: QueryBackend, R: TurnRenderer> InteractionController<B, R> {
    /// Create a controller from the chat configuration and collaborators.
    pub fn new(config: &ChatConfig, backend: B, renderer: R) -> Self {
        Self {
            validator: InputValidator::new(config.max_message_length),
            dispatcher: QueryDispatcher::new(backend),
            renderer,
            max_conversation_tokens: config.max_conversation_tokens,
        }
    }

    /// Process free-form chat input.
    ///
    /// Invalid input returns the validation error without touching the
    /// session; the caller displays it, it is never appended to history.
    /// Valid input runs one full turn cycle.
    pub async fn process_input(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<(), ChatError> {
        self.run_turn(session, text).await
    }

    /// Process a quick-start selection.
    ///
    /// Re-selecting the prompt that is already recorded as the latest
    /// selection is a no-op: preset controls can re-report as pressed when
    /// the surrounding UI redraws, and the same question must not fire its
    /// query twice. Any different prompt runs a normal turn cycle.
    pub async fn process_quick_start(
        &self,
        session: &mut Session,
        prompt: &str,
    ) -> Result<QuickStartOutcome, ChatError> {
        if session.last_quick_start() == Some(prompt) {
            debug!(prompt, "Quick-start prompt unchanged, ignoring repeat selection");
            return Ok(QuickStartOutcome::DuplicateIgnored);
        }
        session.set_last_quick_start(prompt);
        self.run_turn(session, prompt).await?;
        Ok(QuickStartOutcome::Dispatched)
    }

    /// Render the full session history in chronological order.
    pub fn replay(&self, session: &Session) {
        for turn in session.history() {
            self.renderer.render(turn.role, &turn.content);
        }
    }

    /// The shared turn cycle.
    async fn run_turn(&self, session: &mut Session, text: &str) -> Result<(), ChatError> {
        self.validator.validate(text)?;

        session.append_turn(Role::User, text);
        self.renderer.render(Role::User, text);

        match self.dispatcher.dispatch(text).await {
            QueryResult::Success {
                text: reply,
                token_estimate,
            } => {
                session.append_turn(Role::Assistant, reply.as_str());
                self.renderer.render(Role::Assistant, &reply);
                session.add_token_estimate(token_estimate);
                if session.token_estimate() > self.max_conversation_tokens {
                    warn!(
                        estimate = session.token_estimate(),
                        budget = self.max_conversation_tokens,
                        "Conversation token estimate exceeds the advisory budget"
                    );
                }
            }
            QueryResult::Failure { message } => {
                session.append_turn(Role::Assistant, message.as_str());
                self.renderer.render(Role::Assistant, &message);
            }
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
