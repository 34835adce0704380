//! Rendering seam toward the presentation layer.

use std::sync::Mutex;

use ashley_core::Role;

/// Side-effecting display sink for conversation turns.
///
/// Called once per new turn as it is produced (live feedback) and once per
/// historical turn, in chronological order, on session redisplay. No return
/// value is relevant to the chat core.
pub trait TurnRenderer {
    /// Display one turn.
    fn render(&self, role: Role, content: &str);
}

impl<T: TurnRenderer + ?Sized> TurnRenderer for &T {
    fn render(&self, role: Role, content: &str) {
        (**self).render(role, content);
    }
}

impl<T: TurnRenderer + ?Sized> TurnRenderer for std::sync::Arc<T> {
    fn render(&self, role: Role, content: &str) {
        (**self).render(role, content);
    }
}

/// Mock renderer for testing: records every rendered turn in order.
#[derive(Debug, Default)]
pub struct MockRenderer {
    rendered: Mutex<Vec<(Role, String)>>,
}

impl MockRenderer {
    /// Create a new recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything rendered so far, in call order.
    pub fn rendered(&self) -> Vec<(Role, String)> {
        self.rendered.lock().expect("render log poisoned").clone()
    }
}

impl TurnRenderer for MockRenderer {
    fn render(&self, role: Role, content: &str) {
        self.rendered
            .lock()
            .expect("render log poisoned")
            .push((role, content.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_renderer_records_in_order() {
        let renderer = MockRenderer::new();
        renderer.render(Role::User, "question");
        renderer.render(Role::Assistant, "answer");

        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0], (Role::User, "question".to_string()));
        assert_eq!(rendered[1], (Role::Assistant, "answer".to_string()));
    }

    #[test]
    fn test_renderer_usable_through_reference() {
        let renderer = MockRenderer::new();
        let by_ref: &MockRenderer = &renderer;
        by_ref.render(Role::User, "via reference");
        assert_eq!(renderer.rendered().len(), 1);
    }

    #[test]
    fn test_renderer_usable_through_arc() {
        let renderer = std::sync::Arc::new(MockRenderer::new());
        let clone = std::sync::Arc::clone(&renderer);
        clone.render(Role::Assistant, "via arc");
        assert_eq!(renderer.rendered().len(), 1);
    }
}
