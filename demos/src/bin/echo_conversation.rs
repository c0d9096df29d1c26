use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use scriptbot_core::{Producer, ProducerRequest, ScriptbotError};
use scriptbot_engine::{ConversationEngine, EngineState};
use scriptbot_script::{Script, Step};

struct EchoProducer;

#[async_trait]
impl Producer for EchoProducer {
    async fn produce(&self, request: ProducerRequest) -> Result<String, ScriptbotError> {
        Ok(format!("echo: {}", request.last_input))
    }
}

/// Offline walkthrough of a three-step scripted conversation.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let script = Arc::new(
        Script::builder()
            .step(Step::message("greet", "Hi! I'm an echo bot.").then("ask"))
            .step(Step::user_input("ask").then("reply"))
            .step(Step::component("reply", Arc::new(EchoProducer)))
            .build()?,
    );

    let mut engine = ConversationEngine::new(script);
    engine.start()?;
    engine.advance(None)?;
    engine.advance(Some("hello there"))?;
    assert_eq!(engine.state(), EngineState::AwaitingAsync);
    engine.resume().await?;
    assert!(engine.is_terminal());

    println!("transcript:");
    for turn in engine.transcript().turns() {
        println!("{:>8}  {}", turn.step_id, turn.text);
    }
    Ok(())
}
