//! Messages: shared metadata plus exactly one [`MessageKind`].

mod kind;

use std::ops::Deref;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

pub use kind::*;

use crate::chat::{Chat, DirectMessagesTopic};
use crate::entity::{MessageEntity, MessageEntityKind, TextQuote};
use crate::markup::InlineKeyboardMarkup;
use crate::primitives::True;
use crate::reply::{ExternalReplyInfo, LinkPreviewOptions, MessageOrigin};
use crate::story::Story;
use crate::suggested::SuggestedPostInfo;
use crate::user::User;

/// A message. Decoding selects the kind from the content field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub meta: MessageMeta,
    #[serde(flatten)]
    pub kind: MessageKind,
}

/// Fields every message carries, service messages included.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMeta {
    pub message_id: i64,
    /// Supergroups only.
    pub message_thread_id: Option<i64>,
    pub direct_messages_topic: Option<DirectMessagesTopic>,
    /// Empty for messages sent to channels. Non-channel messages sent on
    /// behalf of a chat carry a placeholder user here.
    pub from: Option<User>,
    /// Set when the message was sent on behalf of a chat.
    pub sender_chat: Option<Chat>,
    /// Always positive.
    pub date: i64,
    pub chat: Chat,
    pub is_topic_message: Option<bool>,
}

/// Fields of messages that users send, as opposed to service messages.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonMessage {
    pub sender_boost_count: Option<i64>,
    /// The bot that sent the message on behalf of the business account.
    pub sender_business_bot: Option<User>,
    /// Non-empty when the message belongs to a business account chat.
    pub business_connection_id: Option<String>,
    pub forward_origin: Option<MessageOrigin>,
    /// A channel post forwarded to the linked discussion group.
    pub is_automatic_forward: Option<True>,
    /// Never carries its own `reply_to_message`.
    pub reply_to_message: Option<Box<Message>>,
    pub external_reply: Option<ExternalReplyInfo>,
    pub quote: Option<TextQuote>,
    pub reply_to_story: Option<Story>,
    pub reply_to_checklist_task_id: Option<i64>,
    pub via_bot: Option<User>,
    pub edit_date: Option<i64>,
    pub has_protected_content: Option<True>,
    /// Sent by an implicit action such as an away message.
    pub is_from_offline: Option<True>,
    pub is_paid_post: Option<True>,
    pub author_signature: Option<String>,
    pub paid_star_count: Option<i64>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub suggested_post_info: Option<SuggestedPostInfo>,
    pub effect_id: Option<String>,
    /// `login_url` buttons come back as plain `url` buttons.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Deref for Message {
    type Target = MessageMeta;

    fn deref(&self) -> &MessageMeta {
        &self.meta
    }
}

impl Message {
    /// The content field that selected this message's kind.
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    pub fn common(&self) -> Option<&CommonMessage> {
        self.kind.common()
    }

    pub fn is_service(&self) -> bool {
        self.common().is_none()
    }

    pub fn edit_date(&self) -> Option<i64> {
        self.common().and_then(|c| c.edit_date)
    }

    pub fn business_connection_id(&self) -> Option<&str> {
        self.common().and_then(|c| c.business_connection_id.as_deref())
    }

    pub fn reply_to_message(&self) -> Option<&Message> {
        self.common().and_then(|c| c.reply_to_message.as_deref())
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Text(m) => Some(m.text.as_str()),
            _ => None,
        }
    }

    /// Text of a text message or caption of a media message.
    pub fn text_or_caption(&self) -> Option<(&str, &[MessageEntity])> {
        if let MessageKind::Text(m) = &self.kind {
            return Some((m.text.as_str(), m.entities.as_deref().unwrap_or_default()));
        }
        let caption = self.kind.caption()?;
        let text = caption.caption.as_deref()?;
        Some((text, caption.caption_entities.as_deref().unwrap_or_default()))
    }

    /// A leading bot command and its arguments, `@botname` suffix removed.
    pub fn command(&self) -> Option<(&str, &str)> {
        let (text, entities) = self.text_or_caption()?;
        let entity = entities
            .iter()
            .find(|e| e.offset == 0 && e.kind == MessageEntityKind::BotCommand)?;
        let units = usize::try_from(entity.length).ok()?;
        let end = text
            .char_indices()
            .scan(0usize, |seen, (i, c)| {
                let at = *seen;
                *seen += c.len_utf16();
                Some((i, at))
            })
            .find(|&(_, at)| at >= units)
            .map_or(text.len(), |(i, _)| i);
        let command = text.get(1..end).filter(|c| !c.is_empty())?;
        let command = command.split_once('@').map_or(command, |(name, _)| name);
        Some((command, text[end..].trim()))
    }
}

/// A message that may have been deleted or be otherwise inaccessible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeInaccessibleMessage {
    Inaccessible(InaccessibleMessage),
    Message(Box<Message>),
}

impl MaybeInaccessibleMessage {
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Inaccessible(m) => &m.chat,
            Self::Message(m) => &m.chat,
        }
    }

    pub fn message_id(&self) -> i64 {
        match self {
            Self::Inaccessible(m) => m.message_id,
            Self::Message(m) => m.message_id,
        }
    }

    pub fn accessible(&self) -> Option<&Message> {
        match self {
            Self::Inaccessible(_) => None,
            Self::Message(m) => Some(m.as_ref()),
        }
    }
}

impl<'de> Deserialize<'de> for MaybeInaccessibleMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.get("date").and_then(Value::as_i64) == Some(0) {
            serde_json::from_value(value)
                .map(Self::Inaccessible)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(|m| Self::Message(Box::new(m)))
                .map_err(D::Error::custom)
        }
    }
}

/// A message that was deleted or is otherwise inaccessible to the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InaccessibleMessage {
    pub chat: Chat,
    pub message_id: i64,
    /// Always 0.
    #[serde(deserialize_with = "zero_date")]
    pub date: i64,
}

fn zero_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match i64::deserialize(deserializer)? {
        0 => Ok(0),
        other => Err(D::Error::custom(format!(
            "inaccessible message date must be 0, got {other}"
        ))),
    }
}

/// 0 when the server scheduled the message instead of sending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// An inline message sent by a Web App on behalf of a user.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentWebAppMessage {
    /// Only when an inline keyboard is attached.
    pub inline_message_id: Option<String>,
}

/// An inline message to be sent by a Mini App user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedInlineMessage {
    pub id: String,
    /// Expired messages can no longer be used.
    pub expiration_date: i64,
}
