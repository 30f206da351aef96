//! Configuration module for the launch bot.
//!
//! Loads configuration from environment variables.

use std::env;

use thiserror::Error;
use url::Url;

/// Default listen port for webhook mode.
const DEFAULT_WEBHOOK_PORT: u16 = 8443;

/// Bot running mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

impl BotMode {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "webhook" => Self::Webhook,
            _ => Self::Polling,
        }
    }
}

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("WEBHOOK_URL must be set when BOT_MODE is webhook")]
    WebhookUrlRequired,

    #[error("invalid WEBHOOK_URL {url:?}: {source}")]
    InvalidWebhookUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid WEBHOOK_PORT {0:?}")]
    InvalidWebhookPort(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,

    /// Public webhook URL. Always present in webhook mode.
    pub webhook_url: Option<Url>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,

    /// URL of the web app opened by the launch button.
    /// Not validated here; Telegram rejects a bad one.
    pub launch_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let bot_mode = get("BOT_MODE")
            .map(|m| BotMode::parse(&m))
            .unwrap_or_default();

        let webhook_url = get("WEBHOOK_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|source| ConfigError::InvalidWebhookUrl { url: raw, source })
            })
            .transpose()?;

        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::WebhookUrlRequired);
        }

        let webhook_port = match get("WEBHOOK_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidWebhookPort(raw))?,
            None => DEFAULT_WEBHOOK_PORT,
        };

        Ok(Self {
            bot_token,
            bot_mode,
            webhook_url,
            webhook_port,
            webhook_secret: get("WEBHOOK_SECRET"),
            launch_url: get("UNITY_BUILD_HOST"),
        })
    }
}
