//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Telegram service, the fact service, dataset locations and logging.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub reviews: ReviewsConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Reads and parses the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

/// Configuration for the connected services.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ServicesConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub facts: FactsConfig,
}

/// Telegram bot credentials.
/// The token is read from the environment unless given inline.
#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Bot username, used to accept `/command@username` in group chats.
    #[serde(default)]
    pub username: Option<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            token_env: default_token_env(),
            username: None,
        }
    }
}

impl TelegramConfig {
    /// Resolves the bot token: inline value first, then the configured env var.
    pub fn resolve_token(&self) -> Result<String> {
        self.resolve_token_with(|key| std::env::var(key).ok())
    }

    fn resolve_token_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(token.to_string());
        }
        match lookup(&self.token_env) {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => bail!(crate::strings::logs::missing_token(&self.token_env)),
        }
    }
}

fn default_token_env() -> String {
    "TELOXIDE_TOKEN".to_string()
}

/// Random fact endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct FactsConfig {
    #[serde(default = "default_facts_url")]
    pub url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            url: default_facts_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_facts_url() -> String {
    "https://uselessfacts.jsph.pl/api/v2/facts/random".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Locations of the two CSV tables.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_applications_path")]
    pub applications: PathBuf,
    #[serde(default = "default_reviews_path")]
    pub reviews: PathBuf,
    /// Keep loaded tables in memory instead of re-reading them on every event.
    #[serde(default)]
    pub cache: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            applications: default_applications_path(),
            reviews: default_reviews_path(),
            cache: false,
        }
    }
}

fn default_applications_path() -> PathBuf {
    PathBuf::from("data/googleplaystore.csv")
}

fn default_reviews_path() -> PathBuf {
    PathBuf::from("data/googleplaystore_user_reviews.csv")
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReviewsConfig {
    #[serde(default = "default_review_limit")]
    pub limit: usize,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            limit: default_review_limit(),
        }
    }
}

fn default_review_limit() -> usize {
    crate::application::query::DEFAULT_REVIEW_LIMIT
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_file: default_log_file(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_file() -> String {
    "session.log".to_string()
}
