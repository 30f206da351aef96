//! /start command plugin.
//!
//! Greets the user and attaches the launch button.

use teloxide::prelude::*;
use teloxide::types::InlineKeyboardMarkup;
use tracing::{debug, error};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::messages::format_start_message;
use crate::utils::user_display_name;

/// Handle the /start command.
///
/// Deep link arguments are accepted and ignored.
pub async fn start_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    args: String,
) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;
    let name = user_display_name(msg.from.as_ref());

    debug!("/start from {} in chat {} (args: {:?})", name, chat_id, args);

    let text = format_start_message(&name);
    let keyboard = state.keyboards.build_start_keyboard();

    // Plain text: the name is shown as typed
    let request = bot.send_message(chat_id, text);

    match InlineKeyboardMarkup::try_from(&keyboard) {
        Ok(markup) => {
            request.reply_markup(markup).await?;
        }
        Err(e) => {
            // Still greet the user, just without the button
            error!("Launch keyboard rejected: {}", e);
            request.await?;
        }
    }

    Ok(())
}
