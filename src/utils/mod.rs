//! Utility functions.
//!
//! Collection of helper functions used across the bot.

use teloxide::types::User;

/// Fallback when an update carries no sender.
const ANONYMOUS_NAME: &str = "there";

/// Pick the name to greet a user with.
///
/// Prefers the username (without @), then the first name.
pub fn display_name(username: Option<&str>, first_name: Option<&str>) -> String {
    username
        .filter(|u| !u.is_empty())
        .or(first_name.filter(|f| !f.is_empty()))
        .unwrap_or(ANONYMOUS_NAME)
        .to_string()
}

/// [`display_name`] for an optional Telegram user.
pub fn user_display_name(user: Option<&User>) -> String {
    match user {
        Some(u) => display_name(u.username.as_deref(), Some(u.first_name.as_str())),
        None => display_name(None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        assert_eq!(display_name(Some("alice"), Some("Alice")), "alice");
        assert_eq!(display_name(None, Some("Alice")), "Alice");
        assert_eq!(display_name(Some(""), Some("Alice")), "Alice");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(None, None), "there");
        assert_eq!(display_name(None, Some("")), "there");
        assert_eq!(user_display_name(None), "there");
    }
}
