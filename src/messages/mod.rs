//! User-facing message texts.
//!
//! Plain interpolation, nothing is escaped. Texts that carry markup are
//! meant to be sent with `ParseMode::Html`.

use std::fmt::Display;

/// Greeting sent in reply to /start.
pub fn format_start_message(user_name: impl Display) -> String {
    // The blank line is a single space, keep it
    format!("Hello, {user_name}\nWish you a great Journey Ahead! \n \nTap Launch to Launch TLS")
}

/// Confirmation sent after a Stars payment went through.
///
/// `payload_id` lands inside `<b>` as-is; callers escape it if needed.
pub fn format_purchase_success_message(
    username: impl Display,
    payload_id: impl Display,
    stars_amount: impl Display,
) -> String {
    format!(
        "{username}, wow, u have successfully purchased the item <b>{payload_id}</b> for {stars_amount}🌟"
    )
}
