use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use scriptbot_core::{Producer, ProducerRequest};

/// Observable state of one asynchronous step activation. Once settled, the
/// value is cached and final for that activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationState {
    Loading,
    Ready(String),
    Failed(String),
}

impl ActivationState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ActivationState::Loading)
    }
}

/// Single-shot completion cell for an asynchronous step.
///
/// The producer is invoked exactly once, on a spawned task; querying the
/// activation never re-triggers it. Dropping the activation aborts the
/// task, so a result arriving after abandonment is discarded.
pub struct StepActivation {
    rx: watch::Receiver<ActivationState>,
    handle: JoinHandle<()>,
}

impl StepActivation {
    pub fn spawn(producer: Arc<dyn Producer>, request: ProducerRequest) -> Self {
        let (tx, rx) = watch::channel(ActivationState::Loading);
        let handle = tokio::spawn(async move {
            let settled = match producer.produce(request).await {
                Ok(text) => ActivationState::Ready(text),
                Err(err) => ActivationState::Failed(err.to_string()),
            };
            // Fails only when the activation was dropped mid-flight.
            if tx.send(settled).is_err() {
                tracing::debug!("producer result arrived after abandonment, discarding");
            }
        });
        Self { rx, handle }
    }

    /// Non-blocking view of the activation.
    pub fn snapshot(&self) -> ActivationState {
        self.rx.borrow().clone()
    }

    /// Awaits the settled state. A producer task that dies without
    /// reporting settles as `Failed`.
    pub async fn wait(&mut self) -> ActivationState {
        match self.rx.wait_for(ActivationState::is_settled).await {
            Ok(settled) => settled.clone(),
            Err(_) => ActivationState::Failed("producer task stopped before reporting".to_string()),
        }
    }
}

impl Drop for StepActivation {
    fn drop(&mut self) {
        if !self.rx.borrow().is_settled() {
            tracing::debug!("aborting in-flight producer task");
        }
        self.handle.abort();
    }
}
