use thiserror::Error;

use scriptbot_script::ScriptError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine state: {0}")]
    InvalidState(String),
    #[error("step '{step}' requires user input")]
    InputRequired { step: String },
    #[error("producer failed on step '{step}': {reason}")]
    Producer { step: String, reason: String },
    #[error("max turns exceeded: reached {reached}, limit {max}")]
    MaxTurnsExceeded { max: usize, reached: usize },
    #[error(transparent)]
    Script(#[from] ScriptError),
}
