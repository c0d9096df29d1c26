mod adapter;
mod config;
mod engine;
mod error;
mod resolver;

pub use adapter::{ActivationState, StepActivation};
pub use config::EngineConfig;
pub use engine::{ConversationEngine, EngineState};
pub use error::EngineError;
pub use resolver::{StepOutcome, TransitionResolver};
