mod error;
mod producer;
mod transcript;

pub use error::ScriptbotError;
pub use producer::{Producer, ProducerRequest};
pub use transcript::{Transcript, Turn};
