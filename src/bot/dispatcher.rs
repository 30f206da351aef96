//! Message dispatcher setup.
//!
//! Builds the dispatcher with the command and payment handlers.

use teloxide::adaptors::Throttle;
use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::prelude::*;

use crate::keyboards::KeyboardBuilder;
use crate::plugins;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type used by both runners.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, DefaultKey>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Builds the launch keyboard from the configured URL.
    pub keyboards: KeyboardBuilder,
}

impl AppState {
    pub fn new(keyboards: KeyboardBuilder) -> Self {
        Self { keyboards }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: ThrottledBot, keyboards: KeyboardBuilder) -> BotDispatcher {
    let state = AppState::new(keyboards);

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    // Payments first: a successful_payment message is never a command
    let message_handler = Update::filter_message()
        .branch(plugins::successful_payment_handler())
        .branch(plugins::command_handler());

    dptree::entry()
        .branch(message_handler)
        .branch(plugins::pre_checkout_handler())
}
