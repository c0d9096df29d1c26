use std::collections::HashMap;

use crate::{ScriptError, Step};

/// Builds a [`Script`], validating it at construction so a live
/// conversation can never reach a missing step.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    steps: Vec<Step>,
    entry: Option<String>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Overrides the entry step; the first registered step otherwise.
    pub fn entry(mut self, id: impl Into<String>) -> Self {
        self.entry = Some(id.into());
        self
    }

    pub fn build(self) -> Result<Script, ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        let mut index = HashMap::with_capacity(self.steps.len());
        for (position, step) in self.steps.iter().enumerate() {
            if index.insert(step.id().to_string(), position).is_some() {
                return Err(ScriptError::DuplicateStep {
                    id: step.id().to_string(),
                });
            }
        }

        for step in &self.steps {
            if let Some(next) = step.next() {
                if !index.contains_key(next) {
                    return Err(ScriptError::DanglingTransition {
                        from: step.id().to_string(),
                        to: next.to_string(),
                    });
                }
            }
        }

        let entry = match self.entry {
            Some(id) => {
                if !index.contains_key(&id) {
                    return Err(ScriptError::UnknownStep { id });
                }
                id
            }
            None => self.steps[0].id().to_string(),
        };

        Ok(Script {
            steps: self.steps,
            index,
            entry,
        })
    }
}

/// Validated, immutable step registry.
#[derive(Debug)]
pub struct Script {
    steps: Vec<Step>,
    index: HashMap<String, usize>,
    entry: String,
}

impl Script {
    pub fn builder() -> ScriptBuilder {
        ScriptBuilder::new()
    }

    pub fn get(&self, id: &str) -> Result<&Step, ScriptError> {
        self.index
            .get(id)
            .map(|position| &self.steps[*position])
            .ok_or_else(|| ScriptError::UnknownStep { id: id.to_string() })
    }

    /// The designated first step. Infallible: an empty script cannot be
    /// built.
    pub fn entry_step(&self) -> &Step {
        &self.steps[self.index[&self.entry]]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_ids(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.id().to_string()).collect()
    }
}
