use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::message::MaybeInaccessibleMessage;
use crate::primitives::True;
use crate::shape::{self, keyed_union};
use crate::user::User;

/// An inline keyboard shown right next to its message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Rows of buttons.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn buttons(&self) -> impl Iterator<Item = &InlineKeyboardButton> {
        self.inline_keyboard.iter().flatten()
    }

    /// Every `callback_data` payload on the keyboard.
    pub fn callback_data(&self) -> impl Iterator<Item = &str> {
        self.buttons().filter_map(|b| match &b.action {
            ButtonAction::CallbackData(data) => Some(data.as_str()),
            _ => None,
        })
    }
}

/// One button of an inline keyboard. Exactly one action is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), action: ButtonAction::Url(url.into()) }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { text: text.into(), action: ButtonAction::CallbackData(data.into()) }
    }
}

keyed_union! {
    pub enum ButtonAction {
        /// HTTP or tg:// URL.
        "url" => Url(String),
        /// 1-64 bytes.
        "callback_data" => CallbackData(String),
        "web_app" => WebApp(WebAppInfo),
        "login_url" => LoginUrl(LoginUrl),
        "switch_inline_query" => SwitchInlineQuery(String),
        "switch_inline_query_current_chat" => SwitchInlineQueryCurrentChat(String),
        "switch_inline_query_chosen_chat" => SwitchInlineQueryChosenChat(SwitchInlineQueryChosenChat),
        "copy_text" => CopyText(CopyTextButton),
        /// Must be the first button in the first row.
        "callback_game" => CallbackGame(CallbackGame),
        /// Must be the first button in the first row.
        "pay" => Pay(True),
    }
}

impl<'de> Deserialize<'de> for ButtonAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let key = shape::exclusive_key("inline keyboard button", &map, Self::KEYS)?;
        Self::from_entry(key, shape::take(&mut map, key))
            .map_err(|e| shape::variant_error("button action", key, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    /// HTTPS URL of the Web App.
    pub url: String,
}

/// Parameters for automatic Telegram Login authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url: String,
    pub forward_text: Option<String>,
    pub bot_username: Option<String>,
    pub request_write_access: Option<bool>,
}

/// Which chats the user may pick for an inline query.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchInlineQueryChosenChat {
    pub query: Option<String>,
    pub allow_user_chats: Option<bool>,
    pub allow_bot_chats: Option<bool>,
    pub allow_group_chats: Option<bool>,
    pub allow_channel_chats: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyTextButton {
    /// 1-256 characters.
    pub text: String,
}

/// Placeholder; holds no information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// A press on an inline keyboard button.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent for buttons on inline-mode messages.
    pub message: Option<MaybeInaccessibleMessage>,
    pub inline_message_id: Option<String>,
    /// Global identifier of the chat the message was sent to.
    pub chat_instance: String,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}
