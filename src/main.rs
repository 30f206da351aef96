//! Launch bot - Telegram front door for the TLS web app.
//!
//! Greets users with a button that opens the game as a Telegram web app
//! and confirms purchases paid in Telegram Stars.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `keyboards` - Inline keyboard descriptors (launch button)
//! - `messages` - User-facing message texts
//! - `bot` - Dispatcher and runtime (with Throttle for API rate limiting)
//! - `plugins` - Command and payment handlers
//! - `utils` - Utility functions

mod bot;
mod config;
mod keyboards;
mod messages;
mod plugins;
mod utils;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use keyboards::KeyboardBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("launch_bot=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting launch bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);

    match config.launch_url.as_deref() {
        Some(url) => info!("Launch URL: {}", url),
        None => warn!("UNITY_BUILD_HOST is not set, the launch button will be rejected by Telegram"),
    }

    let keyboards = KeyboardBuilder::new(config.launch_url.clone());

    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    let dispatcher = bot::build_dispatcher(bot.clone(), keyboards);

    bot::run(&config, dispatcher, bot).await?;

    Ok(())
}
