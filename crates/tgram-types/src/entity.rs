use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::primitives::True;
use crate::user::User;

/// Text formatting mode for outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

/// A special entity in a text, such as a hashtag, URL or formatting span.
///
/// `offset` and `length` count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(flatten)]
    pub kind: MessageEntityKind,
    pub offset: i64,
    pub length: i64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Blockquote,
    ExpandableBlockquote,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre { language: Option<String> },
    TextLink { url: String },
    /// For users without usernames.
    TextMention { user: User },
    CustomEmoji { custom_emoji_id: String },
}

impl MessageEntityKind {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mention => "mention",
            Self::Hashtag => "hashtag",
            Self::Cashtag => "cashtag",
            Self::BotCommand => "bot_command",
            Self::Url => "url",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Bold => "bold",
            Self::Blockquote => "blockquote",
            Self::ExpandableBlockquote => "expandable_blockquote",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Spoiler => "spoiler",
            Self::Code => "code",
            Self::Pre { .. } => "pre",
            Self::TextLink { .. } => "text_link",
            Self::TextMention { .. } => "text_mention",
            Self::CustomEmoji { .. } => "custom_emoji",
        }
    }
}

impl MessageEntity {
    /// The slice of `text` this entity covers, or `None` when the range
    /// falls outside the text or splits a surrogate pair.
    pub fn extract(&self, text: &str) -> Option<String> {
        let start = usize::try_from(self.offset).ok()?;
        let len = usize::try_from(self.length).ok()?;
        let units: Vec<u16> = text.encode_utf16().collect();
        let slice = units.get(start..start.checked_add(len)?)?;
        String::from_utf16(slice).ok()
    }
}

/// The quoted part of a replied-to message.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQuote {
    pub text: String,
    /// Only bold, italic, underline, strikethrough, spoiler and custom_emoji survive in quotes.
    pub entities: Option<Vec<MessageEntity>>,
    /// In UTF-16 code units.
    pub position: i64,
    /// Set when the sender chose the quote manually.
    pub is_manual: Option<True>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_flattens_kind() {
        let raw = json!({"type": "bot_command", "offset": 0, "length": 6});
        let entity: MessageEntity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entity.kind, MessageEntityKind::BotCommand);
        assert_eq!(serde_json::to_value(&entity).unwrap(), raw);
    }

    #[test]
    fn test_entity_with_payload() {
        let samples = [
            json!({"type": "pre", "offset": 0, "length": 4, "language": "rust"}),
            json!({"type": "pre", "offset": 0, "length": 4}),
            json!({"type": "text_link", "offset": 1, "length": 2, "url": "https://t.me"}),
            json!({"type": "text_mention", "offset": 0, "length": 3, "user": {"id": 1, "is_bot": false, "first_name": "Al"}}),
            json!({"type": "custom_emoji", "offset": 5, "length": 2, "custom_emoji_id": "5368324170671202286"}),
        ];
        for raw in samples {
            let entity: MessageEntity = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(entity.kind.kind(), raw["type"]);
            assert_eq!(serde_json::to_value(&entity).unwrap(), raw);
        }
    }

    #[test]
    fn test_unknown_entity_type_fails() {
        let raw = json!({"type": "blink", "offset": 0, "length": 1});
        assert!(serde_json::from_value::<MessageEntity>(raw).is_err());
    }

    #[test]
    fn test_extract_counts_utf16() {
        let text = "🔥 /start now";
        let entity = MessageEntity { kind: MessageEntityKind::BotCommand, offset: 3, length: 6 };
        assert_eq!(entity.extract(text).as_deref(), Some("/start"));

        let split = MessageEntity { kind: MessageEntityKind::Bold, offset: 1, length: 1 };
        assert_eq!(split.extract(text), None);
        let past_end = MessageEntity { kind: MessageEntityKind::Bold, offset: 10, length: 10 };
        assert_eq!(past_end.extract(text), None);
    }

    #[test]
    fn test_parse_mode_literals() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
        assert_eq!(serde_json::from_value::<ParseMode>(json!("MarkdownV2")).unwrap(), ParseMode::MarkdownV2);
        assert!(serde_json::from_value::<ParseMode>(json!("html")).is_err());
    }
}
