use scriptbot_core::{Transcript, Turn};
use scriptbot_script::{Step, StepKind};

/// How the active step completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A message was shown.
    Shown,
    /// The user entered a literal value.
    Input(String),
    /// An asynchronous producer yielded a value.
    Produced(String),
}

/// Determines the next step id after a step completes, recording the
/// step's resolved value into the transcript. Produced values are appended
/// by the engine before resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionResolver;

impl TransitionResolver {
    pub fn resolve(
        &self,
        step: &Step,
        outcome: &StepOutcome,
        transcript: &mut Transcript,
    ) -> Option<String> {
        match (step.kind(), outcome) {
            (StepKind::Message { text }, StepOutcome::Shown) => {
                transcript.push(Turn::new(step.id(), text.clone()));
            }
            (StepKind::UserInput, StepOutcome::Input(text)) => {
                transcript.push(Turn::new(step.id(), text.clone()));
            }
            (StepKind::Async { .. }, StepOutcome::Produced(_)) => {}
            _ => {}
        }
        // A fixed target always wins over any computed target.
        step.next().map(str::to_string)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
