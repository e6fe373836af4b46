use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::content::Location;
use crate::user::User;

/// Type of the chat an inline query was sent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineQueryChatType {
    /// Private chat with the inline query sender.
    Sender,
    Private,
    Group,
    Supergroup,
    Channel,
}

/// An incoming inline query.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Up to 256 characters.
    pub query: String,
    /// Controlled by the bot.
    pub offset: String,
    /// Absent for requests from secret chats.
    pub chat_type: Option<InlineQueryChatType>,
    /// Bots that request user location only.
    pub location: Option<Location>,
}

/// A result of an inline query chosen by a user.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub location: Option<Location>,
    /// Set only when an inline keyboard is attached to the message.
    pub inline_message_id: Option<String>,
    pub query: String,
}
