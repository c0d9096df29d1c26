use std::fmt;
use std::sync::Arc;

use scriptbot_core::Producer;

/// What a step does when it becomes active.
pub enum StepKind {
    /// Scripted bot text, shown as-is.
    Message { text: String },
    /// Waits for a literal user entry.
    UserInput,
    /// Delegates to an asynchronous producer for its value.
    Async { producer: Arc<dyn Producer> },
}

impl fmt::Debug for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Message { text } => f.debug_struct("Message").field("text", text).finish(),
            StepKind::UserInput => f.write_str("UserInput"),
            StepKind::Async { .. } => f.write_str("Async"),
        }
    }
}

/// Immutable step definition: an id, a kind, and an optional fixed
/// transition target. A step without a target is terminal.
#[derive(Debug)]
pub struct Step {
    id: String,
    kind: StepKind,
    next: Option<String>,
}

impl Step {
    pub fn message(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: StepKind::Message { text: text.into() },
            next: None,
        }
    }

    pub fn user_input(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: StepKind::UserInput,
            next: None,
        }
    }

    pub fn component(id: impl Into<String>, producer: Arc<dyn Producer>) -> Self {
        Self {
            id: id.into(),
            kind: StepKind::Async { producer },
            next: None,
        }
    }

    /// Sets the fixed transition target.
    pub fn then(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}
