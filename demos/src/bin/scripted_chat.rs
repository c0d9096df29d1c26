use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use scriptbot_engine::{ConversationEngine, EngineConfig, EngineState};
use scriptbot_http::ChatServiceClient;
use scriptbot_script::{Script, Step, StepKind};

/// Interactive chat against a locally running chat service, following the
/// classic greet -> read -> query loop. Set CHAT_SERVICE_URL to override
/// the default http://localhost:5000.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("CHAT_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    let client = ChatServiceClient::new(base_url)?;
    if let Err(err) = client.health().await {
        tracing::warn!(%err, "chat service health probe failed, continuing anyway");
    }

    let script = Arc::new(
        Script::builder()
            .step(Step::message("greet", "Hi! Type something to start chatting!").then("ask"))
            .step(Step::user_input("ask").then("reply"))
            .step(Step::component("reply", Arc::new(client)).then("ask"))
            .build()?,
    );

    let mut engine = ConversationEngine::with_config(script, EngineConfig::unbounded());
    engine.start()?;

    let stdin = io::stdin();
    loop {
        match engine.state() {
            EngineState::Running => {
                let say = match engine.current_step()?.kind() {
                    StepKind::Message { text } => Some(text.clone()),
                    _ => None,
                };
                match say {
                    Some(text) => {
                        println!("bot> {text}");
                        engine.advance(None)?;
                    }
                    None => {
                        print!("you> ");
                        io::stdout().flush()?;
                        let mut line = String::new();
                        if stdin.lock().read_line(&mut line)? == 0 {
                            break;
                        }
                        let line = line.trim();
                        if line.is_empty() || line == "/quit" {
                            break;
                        }
                        engine.advance(Some(line))?;
                    }
                }
            }
            EngineState::AwaitingAsync => {
                engine.resume().await?;
                if let Some(turn) = engine.transcript().last() {
                    println!("bot> {}", turn.text);
                }
            }
            EngineState::Terminal | EngineState::Idle => break,
        }
    }

    Ok(())
}
