use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::user::User;

/// Emoji accepted as standard message reactions.
pub const TELEGRAM_EMOJI: [&str; 73] = [
    "\u{2764}", "👍", "👎", "🔥", "🥰", "👏", "😁", "🤔", "🤯", "😱", "🤬", "😢", "🎉", "🤩",
    "🤮", "💩", "🙏", "👌", "\u{1F54A}", "🤡", "🥱", "🥴", "😍", "🐳",
    "\u{2764}\u{200D}\u{1F525}", "🌚", "🌭", "💯", "🤣", "⚡", "🍌", "🏆", "💔", "🤨", "😐",
    "🍓", "🍾", "💋", "🖕", "😈", "😴", "😭", "🤓", "👻", "\u{1F468}\u{200D}\u{1F4BB}", "👀",
    "🎃", "🙈", "😇", "😨", "🤝", "\u{270D}", "🤗", "🫡", "🎅", "🎄", "\u{2603}", "💅", "🤪",
    "🗿", "🆒", "💘", "🙉", "🦄", "😘", "💊", "🙊", "😎", "👾", "\u{1F937}\u{200D}\u{2642}",
    "🤷", "\u{1F937}\u{200D}\u{2640}", "😡",
];

/// One of the [`TELEGRAM_EMOJI`]; anything else fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TelegramEmoji(String);

#[derive(Debug, thiserror::Error)]
#[error("{0:?} is not a reaction emoji")]
pub struct NotReactionEmoji(pub String);

impl TelegramEmoji {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TelegramEmoji {
    type Error = NotReactionEmoji;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if TELEGRAM_EMOJI.contains(&value.as_str()) {
            Ok(Self(value))
        } else {
            Err(NotReactionEmoji(value))
        }
    }
}

impl TryFrom<&str> for TelegramEmoji {
    type Error = NotReactionEmoji;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<TelegramEmoji> for String {
    fn from(emoji: TelegramEmoji) -> Self {
        emoji.0
    }
}

impl fmt::Display for TelegramEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type of a reaction, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji { emoji: TelegramEmoji },
    CustomEmoji { custom_emoji_id: String },
    Paid,
}

impl ReactionType {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Emoji { .. } => "emoji",
            Self::CustomEmoji { .. } => "custom_emoji",
            Self::Paid => "paid",
        }
    }
}

/// A reaction with the number of times it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub total_count: i64,
}

/// A user changed their reaction on a message.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    /// Absent when the user is anonymous.
    pub user: Option<User>,
    /// Set when the reaction was changed on behalf of a chat.
    pub actor_chat: Option<Chat>,
    pub date: i64,
    pub old_reaction: Vec<ReactionType>,
    pub new_reaction: Vec<ReactionType>,
}

impl MessageReactionUpdated {
    /// Reactions present in `new_reaction` but not in `old_reaction`.
    pub fn added(&self) -> impl Iterator<Item = &ReactionType> {
        self.new_reaction
            .iter()
            .filter(|r| !self.old_reaction.contains(r))
    }

    /// Reactions present in `old_reaction` but not in `new_reaction`.
    pub fn removed(&self) -> impl Iterator<Item = &ReactionType> {
        self.old_reaction
            .iter()
            .filter(|r| !self.new_reaction.contains(r))
    }
}

/// Reaction changes on a message with anonymous reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub date: i64,
    pub reactions: Vec<ReactionCount>,
}
