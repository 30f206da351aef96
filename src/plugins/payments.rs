//! Telegram Stars payments.
//!
//! Telegram asks the bot to confirm every checkout before charging, then
//! delivers a `successful_payment` service message once it went through.

use std::fmt::Display;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, PreCheckoutQuery, SuccessfulPayment};
use teloxide::utils::html;
use tracing::info;

use crate::bot::dispatcher::ThrottledBot;
use crate::messages::format_purchase_success_message;
use crate::utils::user_display_name;

/// Handler for `pre_checkout_query` updates.
pub fn pre_checkout_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_pre_checkout_query().endpoint(pre_checkout_query)
}

/// Handler for messages carrying a `successful_payment`.
pub fn successful_payment_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter_map(|msg: Message| msg.successful_payment().cloned())
        .endpoint(successful_payment)
}

/// Approve the checkout. Must be answered within 10 seconds.
async fn pre_checkout_query(bot: ThrottledBot, query: PreCheckoutQuery) -> anyhow::Result<()> {
    info!(
        "Pre-checkout from {}: item={} amount={} {:?}",
        query.from.id, query.invoice_payload, query.total_amount, query.currency
    );

    bot.answer_pre_checkout_query(query.id, true).await?;

    Ok(())
}

/// Confirm a completed purchase in the buyer's chat.
async fn successful_payment(
    bot: ThrottledBot,
    msg: Message,
    payment: SuccessfulPayment,
) -> anyhow::Result<()> {
    let name = user_display_name(msg.from.as_ref());

    info!(
        "Payment received in chat {}: item={} amount={} {:?}",
        msg.chat.id, payment.invoice_payload, payment.total_amount, payment.currency
    );

    let text = purchase_text(&name, &payment.invoice_payload, payment.total_amount);

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}

/// Purchase confirmation in HTML. The buyer's name is escaped, the
/// payload is passed through.
fn purchase_text(name: &str, payload: &str, amount: impl Display) -> String {
    format_purchase_success_message(html::escape(name), payload, amount)
}
