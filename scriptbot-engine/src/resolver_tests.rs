use std::sync::Arc;

use scriptbot_core::{Producer, ProducerRequest, ScriptbotError, Transcript};
use scriptbot_script::Step;

use super::{StepOutcome, TransitionResolver};

struct NullProducer;

#[async_trait::async_trait]
impl Producer for NullProducer {
    async fn produce(&self, _request: ProducerRequest) -> Result<String, ScriptbotError> {
        Ok(String::new())
    }
}

#[test]
fn message_step_records_its_text_and_resolves() {
    let resolver = TransitionResolver;
    let mut transcript = Transcript::new();
    let step = Step::message("greet", "Hi!").then("ask");

    let next = resolver.resolve(&step, &StepOutcome::Shown, &mut transcript);

    assert_eq!(next.as_deref(), Some("ask"));
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.last().unwrap().text, "Hi!");
}

#[test]
fn user_input_step_records_the_literal_entry() {
    let resolver = TransitionResolver;
    let mut transcript = Transcript::new();
    let step = Step::user_input("ask").then("reply");

    let next = resolver.resolve(
        &step,
        &StepOutcome::Input("hello".to_string()),
        &mut transcript,
    );

    assert_eq!(next.as_deref(), Some("reply"));
    assert_eq!(transcript.last().unwrap().step_id, "ask");
    assert_eq!(transcript.last().unwrap().text, "hello");
}

#[test]
fn async_step_resolution_leaves_transcript_to_the_engine() {
    let resolver = TransitionResolver;
    let mut transcript = Transcript::new();
    let step = Step::component("reply", Arc::new(NullProducer));

    let next = resolver.resolve(
        &step,
        &StepOutcome::Produced("echo".to_string()),
        &mut transcript,
    );

    assert_eq!(next, None);
    assert!(transcript.is_empty());
}

#[test]
fn terminal_step_resolves_to_none() {
    let resolver = TransitionResolver;
    let mut transcript = Transcript::new();
    let step = Step::message("bye", "Goodbye");

    assert_eq!(
        resolver.resolve(&step, &StepOutcome::Shown, &mut transcript),
        None
    );
}
