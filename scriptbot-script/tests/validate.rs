use std::sync::Arc;

use scriptbot_core::{Producer, ProducerRequest, ScriptbotError};
use scriptbot_script::{Script, ScriptError, Step, StepKind};

struct EchoProducer;

#[async_trait::async_trait]
impl Producer for EchoProducer {
    async fn produce(&self, request: ProducerRequest) -> Result<String, ScriptbotError> {
        Ok(format!("echo: {}", request.last_input))
    }
}

fn chat_script() -> Result<Script, ScriptError> {
    Script::builder()
        .step(Step::message("greet", "Hi! Type something to start chatting!").then("ask"))
        .step(Step::user_input("ask").then("reply"))
        .step(Step::component("reply", Arc::new(EchoProducer)))
        .build()
}

#[test]
fn builds_and_indexes_steps() {
    let script = chat_script().unwrap();
    assert_eq!(script.len(), 3);
    assert_eq!(script.entry_step().id(), "greet");
    assert_eq!(script.get("ask").unwrap().next(), Some("reply"));
    assert!(script.get("reply").unwrap().is_terminal());
    assert_eq!(script.step_ids(), vec!["greet", "ask", "reply"]);
}

#[test]
fn empty_script_fails_construction() {
    let err = Script::builder().build().unwrap_err();
    assert_eq!(err, ScriptError::EmptyScript);
}

#[test]
fn duplicate_step_id_fails_construction() {
    let err = Script::builder()
        .step(Step::message("greet", "Hi"))
        .step(Step::user_input("greet"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ScriptError::DuplicateStep {
            id: "greet".to_string()
        }
    );
}

#[test]
fn dangling_transition_fails_construction() {
    let err = Script::builder()
        .step(Step::message("greet", "Hi").then("missing"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ScriptError::DanglingTransition {
            from: "greet".to_string(),
            to: "missing".to_string(),
        }
    );
}

#[test]
fn entry_override_is_validated() {
    let script = Script::builder()
        .step(Step::message("greet", "Hi").then("ask"))
        .step(Step::user_input("ask"))
        .entry("ask")
        .build()
        .unwrap();
    assert_eq!(script.entry_step().id(), "ask");

    let err = Script::builder()
        .step(Step::message("greet", "Hi"))
        .entry("missing")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownStep {
            id: "missing".to_string()
        }
    );
}

#[test]
fn lookup_of_unknown_step_fails() {
    let script = chat_script().unwrap();
    let err = script.get("nope").unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownStep {
            id: "nope".to_string()
        }
    );
}

#[test]
fn cyclic_transitions_are_legal() {
    let script = Script::builder()
        .step(Step::user_input("ask").then("reply"))
        .step(Step::component("reply", Arc::new(EchoProducer)).then("ask"))
        .build()
        .unwrap();
    assert_eq!(script.get("reply").unwrap().next(), Some("ask"));
}

#[test]
fn step_kind_is_inspectable() {
    let script = chat_script().unwrap();
    match script.entry_step().kind() {
        StepKind::Message { text } => assert!(text.starts_with("Hi!")),
        other => panic!("unexpected kind: {other:?}"),
    }
}
