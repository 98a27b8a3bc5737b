//! assistant-cli: sends one hard-coded prompt to the chat API and prints the reply.

use anyhow::Result;
use assistant_cli::{ask, DEMO_PROMPT};
use llm_client::{LlmConfig, OpenAILlmClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = assistant_cli::logger::init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run().await {
        Ok(reply) => {
            println!("AI Response:");
            println!("{reply}");
        }
        Err(e) => {
            tracing::error!(error = %e, "chat request failed");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<String> {
    let config = LlmConfig::from_env()?;

    let estimated = token_count::estimate_tokens(DEMO_PROMPT, &config.model);
    tracing::info!(
        model = %config.model,
        estimated_tokens = estimated,
        "sending demo prompt"
    );

    let client = OpenAILlmClient::new(config);
    ask(&client, DEMO_PROMPT).await
}
