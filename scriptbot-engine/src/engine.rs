use std::sync::Arc;

use scriptbot_core::{ProducerRequest, Transcript, Turn};
use scriptbot_script::{Script, Step, StepKind};

use crate::adapter::{ActivationState, StepActivation};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::resolver::{StepOutcome, TransitionResolver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    AwaitingAsync,
    Terminal,
}

/// Drives one scripted conversation over a validated [`Script`].
///
/// The engine is single-owner: it holds the only mutable conversation
/// state (current step, transcript, at most one pending activation).
/// Concurrent conversations each get their own engine instance.
pub struct ConversationEngine {
    script: Arc<Script>,
    resolver: TransitionResolver,
    config: EngineConfig,
    state: EngineState,
    current: Option<String>,
    transcript: Transcript,
    pending: Option<StepActivation>,
    last_input: String,
    completed: usize,
}

impl ConversationEngine {
    pub fn new(script: Arc<Script>) -> Self {
        Self::with_config(script, EngineConfig::default())
    }

    pub fn with_config(script: Arc<Script>, config: EngineConfig) -> Self {
        Self {
            script,
            resolver: TransitionResolver,
            config,
            state: EngineState::Idle,
            current: None,
            transcript: Transcript::new(),
            pending: None,
            last_input: String::new(),
            completed: 0,
        }
    }

    /// Loads the entry step. If the entry step is asynchronous the engine
    /// suspends on it immediately.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Idle {
            return Err(EngineError::InvalidState(
                "conversation already started".to_string(),
            ));
        }
        let entry = self.script.entry_step().id().to_string();
        self.state = EngineState::Running;
        self.enter(entry)
    }

    /// Completes the active step and moves to its transition target.
    ///
    /// `input` is required for user-input steps and ignored otherwise.
    /// While a pending asynchronous step is unsettled this fails with
    /// [`EngineError::InvalidState`] and leaves all state unchanged; once
    /// settled, the completion is applied instead.
    pub fn advance(&mut self, input: Option<&str>) -> Result<(), EngineError> {
        match self.state {
            EngineState::Idle => Err(EngineError::InvalidState(
                "conversation not started".to_string(),
            )),
            EngineState::Terminal => Err(EngineError::InvalidState(
                "conversation is terminal".to_string(),
            )),
            EngineState::AwaitingAsync => {
                let settled = match &self.pending {
                    Some(activation) => activation.snapshot(),
                    None => {
                        return Err(EngineError::InvalidState(
                            "no pending activation".to_string(),
                        ))
                    }
                };
                match settled {
                    ActivationState::Loading => Err(EngineError::InvalidState(
                        "asynchronous step has not settled".to_string(),
                    )),
                    settled => self.apply_settled(settled),
                }
            }
            EngineState::Running => {
                let id = self.active_step_id()?;
                let script = Arc::clone(&self.script);
                let step = script.get(&id)?;
                let outcome = match step.kind() {
                    StepKind::Message { .. } => StepOutcome::Shown,
                    StepKind::UserInput => match input {
                        Some(text) => {
                            self.last_input = text.to_string();
                            StepOutcome::Input(text.to_string())
                        }
                        None => return Err(EngineError::InputRequired { step: id }),
                    },
                    StepKind::Async { .. } => {
                        return Err(EngineError::InvalidState(
                            "asynchronous step must be resumed, not advanced".to_string(),
                        ))
                    }
                };
                self.complete(outcome)
            }
        }
    }

    /// Awaits the pending asynchronous step and applies its completion.
    pub async fn resume(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::AwaitingAsync {
            return Err(EngineError::InvalidState(
                "no asynchronous step to resume".to_string(),
            ));
        }
        let settled = match self.pending.as_mut() {
            Some(activation) => activation.wait().await,
            None => {
                return Err(EngineError::InvalidState(
                    "no pending activation".to_string(),
                ))
            }
        };
        self.apply_settled(settled)
    }

    /// The active step. After a terminal transition this stays on the
    /// last step reached, so callers can keep it visible.
    pub fn current_step(&self) -> Result<&Step, EngineError> {
        let id = self.current.as_ref().ok_or_else(|| {
            EngineError::InvalidState("conversation not started".to_string())
        })?;
        Ok(self.script.get(id)?)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state == EngineState::Terminal
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Discards all conversation state, aborting any in-flight producer,
    /// and returns to `Idle`.
    pub fn reset(&mut self) {
        self.pending = None;
        self.transcript = Transcript::new();
        self.current = None;
        self.last_input.clear();
        self.completed = 0;
        self.state = EngineState::Idle;
    }

    fn active_step_id(&self) -> Result<String, EngineError> {
        self.current
            .clone()
            .ok_or_else(|| EngineError::InvalidState("no active step".to_string()))
    }

    fn apply_settled(&mut self, settled: ActivationState) -> Result<(), EngineError> {
        self.pending = None;
        let id = self.active_step_id()?;
        match settled {
            ActivationState::Ready(text) => {
                self.transcript.push(Turn::new(id, text.clone()));
                self.state = EngineState::Running;
                self.complete(StepOutcome::Produced(text))
            }
            ActivationState::Failed(reason) => {
                self.state = EngineState::Terminal;
                tracing::warn!(step = %id, %reason, "producer failed, halting conversation");
                Err(EngineError::Producer { step: id, reason })
            }
            ActivationState::Loading => Err(EngineError::InvalidState(
                "asynchronous step has not settled".to_string(),
            )),
        }
    }

    fn complete(&mut self, outcome: StepOutcome) -> Result<(), EngineError> {
        let id = self.active_step_id()?;
        let script = Arc::clone(&self.script);
        let step = script.get(&id)?;
        let next = self.resolver.resolve(step, &outcome, &mut self.transcript);

        self.completed += 1;
        if let Some(max) = self.config.max_turns {
            if self.completed > max {
                self.state = EngineState::Terminal;
                tracing::warn!(step = %id, max, "turn ceiling reached, halting conversation");
                return Err(EngineError::MaxTurnsExceeded {
                    max,
                    reached: self.completed,
                });
            }
        }

        match next {
            Some(next_id) => {
                self.state = EngineState::Running;
                self.enter(next_id)
            }
            None => {
                tracing::debug!(step = %id, "conversation reached terminal step");
                self.state = EngineState::Terminal;
                Ok(())
            }
        }
    }

    fn enter(&mut self, id: String) -> Result<(), EngineError> {
        let script = Arc::clone(&self.script);
        let step = script.get(&id)?;
        self.current = Some(id);
        if let StepKind::Async { producer } = step.kind() {
            let request = ProducerRequest::new(self.last_input.clone(), self.transcript.clone());
            self.pending = Some(StepActivation::spawn(Arc::clone(producer), request));
            self.state = EngineState::AwaitingAsync;
            tracing::debug!(step = %step.id(), "suspended on asynchronous step");
        }
        Ok(())
    }
}
