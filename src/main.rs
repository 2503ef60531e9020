use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;

use homework_bot::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // The log file location is itself configurable, so read it before Config
    // (which logs) is loaded.
    let log_path = std::env::var("LOG_FILE")
        .unwrap_or_else(|_| homework_bot::config::environment::DEFAULT_LOG_FILE.to_string());
    let file_layer = if log_path.is_empty() {
        None
    } else {
        match OpenOptions::new().create(true).append(true).open(&log_path) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            ),
            Err(e) => {
                eprintln!("Cannot open log file {}: {}", log_path, e);
                None
            }
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No engine is built, so nothing is ever fetched.
            tracing::error!("Startup aborted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Polling {} every {}s, notifying chat {}",
        config.endpoint,
        config.retry_period_secs,
        config.telegram_chat_id
    );

    let mut engine = homework_bot::create_engine(&config);

    engine
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    ExitCode::SUCCESS
}
