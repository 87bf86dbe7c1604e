//! lingua-bot — console chatbot entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config (language, provider, log level)
//!   3. Init logger at configured level
//!   4. Build the LLM provider (missing API key is fatal here)
//!   5. Run the console session loop until Ctrl-C or EOF

use tokio_util::sync::CancellationToken;
use tracing::info;

use lingua_bot::chat::ChatEngine;
use lingua_bot::error::AppError;
use lingua_bot::llm::providers;
use lingua_bot::session::Session;
use lingua_bot::{config, console, logger};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::parse_level(&config.log_level)?;
    logger::init(&config.log_level)?;

    info!(
        bot_name = %config.bot_name,
        language = %config.language,
        provider = %config.llm.provider,
        log_level = %config.log_level,
        "config loaded"
    );

    let provider = providers::build(&config.llm, config.api_key.clone())?;
    let engine = ChatEngine::new(provider);
    let session = Session::new(config.language);

    info!(session_id = %session.id, "session ready");

    // Ctrl-C cancels the console loop; a second Ctrl-C kills the process.
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    console::run(session, engine, &config.bot_name, shutdown).await
}
