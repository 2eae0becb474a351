//! # Main Entry Point
//!
//! Initializes the bot using a layered architecture:
//! - Domain: Configuration, Records, Events and Traits
//! - Infrastructure: Telegram, Random Fact client
//! - Application: Dataset, Query Engine, Formatter, Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::application::dataset::Dataset;
use crate::application::router::EventRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::facts::FactsClient;
use crate::infrastructure::telegram::TelegramService;

#[derive(Debug, Parser)]
#[command(version, about = "Telegram bot serving Google Play application data")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let log_dir = config.system.log_dir.clone();
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = log_dir.join(&config.system.log_file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, &config.system.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,teloxide=warn,hyper=warn,reqwest=warn")
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("{}", strings::logs::STARTING);
    tracing::info!("{}", strings::logs::config_loaded(&args.config));

    // 3. Telegram Setup
    let token = config.services.telegram.resolve_token()?;
    let bot = Bot::new(token);

    let me = bot.get_me().await.context("Failed to reach Telegram (getMe)")?;
    if config.services.telegram.username.is_none() {
        config.services.telegram.username = me.user.username.clone();
    }
    tracing::info!(
        "{}",
        strings::logs::bot_started(config.services.telegram.username.as_deref().unwrap_or("?"))
    );

    // 4. Initialize Application Components
    let chat = Arc::new(TelegramService::new(bot.clone()));
    let facts = Arc::new(FactsClient::new(&config.services.facts)?);
    let dataset = Arc::new(Dataset::new(config.data.clone()));
    let router = Arc::new(EventRouter::new(config, chat, facts, dataset));

    // 5. Event Loop
    infrastructure::telegram::run(bot, router).await;

    Ok(())
}
