use serde::{Deserialize, Serialize};

/// One completed step and the value it resolved to: the rendered message
/// text, the literal user entry, or the producer's reply.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Turn {
    pub step_id: String,
    pub text: String,
}

impl Turn {
    pub fn new(step_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            step_id: step_id.into(),
            text: text.into(),
        }
    }
}

/// Append-only record of completed turns, in chronological order.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Trailing `size` turns, or everything when the transcript is shorter.
    pub fn window(&self, size: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(size);
        &self.turns[start..]
    }

    /// Plain-text rendering, one turn per line.
    pub fn rendered(&self) -> String {
        self.turns
            .iter()
            .map(|turn| turn.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod transcript_tests;
