use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown step: {id}")]
    UnknownStep { id: String },
    #[error("script has no steps")]
    EmptyScript,
    #[error("duplicate step id: {id}")]
    DuplicateStep { id: String },
    #[error("step '{from}' transitions to missing step '{to}'")]
    DanglingTransition { from: String, to: String },
}
