//! Inline keyboards.
//!
//! Keyboards are built as plain descriptors first and converted into
//! teloxide markup only when a handler sends them. The descriptor
//! serializes to the same JSON shape the Bot API expects for
//! `reply_markup`.

use serde::{Deserialize, Serialize};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use thiserror::Error;
use url::Url;

/// Label of the button that opens the game.
pub const LAUNCH_LABEL: &str = "Launch 🎮";

/// What happens when a button is tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Open `url` inside Telegram's embedded web app view.
    #[serde(rename = "web_app")]
    OpenWebApp {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(rename = "text")]
    pub label: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

impl Button {
    /// Create a button that opens a web app.
    pub fn web_app(label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::OpenWebApp { url },
        }
    }
}

/// Rows of inline buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardDescriptor {
    #[serde(rename = "inline_keyboard")]
    pub rows: Vec<Vec<Button>>,
}

/// Builds keyboards from the launch URL it was created with.
#[derive(Debug, Clone)]
pub struct KeyboardBuilder {
    launch_url: Option<String>,
}

impl KeyboardBuilder {
    pub fn new(launch_url: Option<String>) -> Self {
        Self { launch_url }
    }

    /// Keyboard attached to the /start reply: one launch button.
    ///
    /// The URL is not checked. A missing one is carried through as `None`
    /// and only rejected when converting to [`InlineKeyboardMarkup`].
    pub fn build_start_keyboard(&self) -> KeyboardDescriptor {
        KeyboardDescriptor {
            rows: vec![vec![Button::web_app(LAUNCH_LABEL, self.launch_url.clone())]],
        }
    }
}

/// Reasons a descriptor cannot be turned into Telegram markup.
#[derive(Debug, Error)]
pub enum KeyboardError {
    #[error("button {label:?} has no web app URL")]
    MissingUrl { label: String },

    #[error("button {label:?} has invalid web app URL {url:?}: {source}")]
    InvalidUrl {
        label: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl TryFrom<&Button> for InlineKeyboardButton {
    type Error = KeyboardError;

    fn try_from(button: &Button) -> Result<Self, Self::Error> {
        match &button.action {
            ButtonAction::OpenWebApp { url: None } => Err(KeyboardError::MissingUrl {
                label: button.label.clone(),
            }),
            ButtonAction::OpenWebApp { url: Some(raw) } => {
                let url = Url::parse(raw).map_err(|source| KeyboardError::InvalidUrl {
                    label: button.label.clone(),
                    url: raw.clone(),
                    source,
                })?;
                Ok(InlineKeyboardButton::web_app(
                    button.label.clone(),
                    WebAppInfo { url },
                ))
            }
        }
    }
}

impl TryFrom<&KeyboardDescriptor> for InlineKeyboardMarkup {
    type Error = KeyboardError;

    fn try_from(keyboard: &KeyboardDescriptor) -> Result<Self, Self::Error> {
        let rows = keyboard
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(InlineKeyboardButton::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InlineKeyboardMarkup::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use teloxide::types::InlineKeyboardButtonKind;

    fn builder(url: &str) -> KeyboardBuilder {
        KeyboardBuilder::new(Some(url.to_string()))
    }

    #[test]
    fn test_start_keyboard_shape() {
        let keyboard = builder("https://example.com/app").build_start_keyboard();

        assert_eq!(keyboard.rows.len(), 1);
        assert_eq!(keyboard.rows[0].len(), 1);
        assert_eq!(keyboard.rows[0][0].label, "Launch 🎮");
        assert_eq!(
            keyboard.rows[0][0].action,
            ButtonAction::OpenWebApp {
                url: Some("https://example.com/app".to_string())
            }
        );
    }

    #[test]
    fn test_start_keyboard_is_repeatable() {
        let builder = builder("https://example.com/app");
        assert_eq!(builder.build_start_keyboard(), builder.build_start_keyboard());
    }

    #[test]
    fn test_missing_url_is_carried_through() {
        let keyboard = KeyboardBuilder::new(None).build_start_keyboard();

        assert_eq!(keyboard.rows[0][0].action, ButtonAction::OpenWebApp { url: None });
    }

    #[test]
    fn test_serializes_to_bot_api_shape() {
        let keyboard = builder("https://example.com/app").build_start_keyboard();

        assert_eq!(
            serde_json::to_value(&keyboard).unwrap(),
            json!({
                "inline_keyboard": [[
                    { "text": "Launch 🎮", "web_app": { "url": "https://example.com/app" } }
                ]]
            })
        );

        let missing = KeyboardBuilder::new(None).build_start_keyboard();
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({ "inline_keyboard": [[{ "text": "Launch 🎮", "web_app": {} }]] })
        );
    }

    #[test]
    fn test_into_markup() {
        let keyboard = builder("https://example.com/app").build_start_keyboard();
        let markup = InlineKeyboardMarkup::try_from(&keyboard).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 1);
        let button = &markup.inline_keyboard[0][0];
        assert_eq!(button.text, "Launch 🎮");
        match &button.kind {
            InlineKeyboardButtonKind::WebApp(info) => {
                assert_eq!(info.url.as_str(), "https://example.com/app");
            }
            other => panic!("unexpected button kind: {:?}", other),
        }
    }

    #[test]
    fn test_into_markup_rejects_bad_urls() {
        let missing = KeyboardBuilder::new(None).build_start_keyboard();
        assert!(matches!(
            InlineKeyboardMarkup::try_from(&missing),
            Err(KeyboardError::MissingUrl { .. })
        ));

        let relative = builder("/app").build_start_keyboard();
        assert!(matches!(
            InlineKeyboardMarkup::try_from(&relative),
            Err(KeyboardError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_multi_row_descriptor() {
        let keyboard = KeyboardDescriptor {
            rows: vec![
                vec![
                    Button::web_app("A", Some("https://a.example".to_string())),
                    Button::web_app("B", Some("https://b.example".to_string())),
                ],
                vec![Button::web_app("C", Some("https://c.example".to_string()))],
            ],
        };
        let markup = InlineKeyboardMarkup::try_from(&keyboard).unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].text, "C");
    }
}
