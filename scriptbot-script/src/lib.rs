mod error;
mod script;
mod step;

pub use error::ScriptError;
pub use script::{Script, ScriptBuilder};
pub use step::{Step, StepKind};
