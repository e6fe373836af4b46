use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::content::{Contact, Dice, Game, Location, Poll, Venue};
use crate::entity::{MessageEntity, ParseMode};
use crate::media::{
    Animation, Audio, Document, PaidMediaInfo, PhotoSize, Sticker, Video, VideoNote, Voice,
};
use crate::payment::Invoice;
use crate::primitives::{ChatId, True};
use crate::service::{Giveaway, GiveawayWinners};
use crate::shape;
use crate::story::Story;
use crate::user::User;

/// Origin of a forwarded message, discriminated by `type`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    /// Sent by a known user.
    User { date: i64, sender_user: User },
    /// Sent by a user who hides their account.
    HiddenUser { date: i64, sender_user_name: String },
    /// Sent on behalf of a chat to a group.
    Chat {
        date: i64,
        sender_chat: Chat,
        author_signature: Option<String>,
    },
    /// Posted in a channel.
    Channel {
        date: i64,
        chat: Chat,
        message_id: i64,
        author_signature: Option<String>,
    },
}

impl MessageOrigin {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User { .. } => "user",
            Self::HiddenUser { .. } => "hidden_user",
            Self::Chat { .. } => "chat",
            Self::Channel { .. } => "channel",
        }
    }

    /// Original send date.
    pub fn date(&self) -> i64 {
        match self {
            Self::User { date, .. }
            | Self::HiddenUser { date, .. }
            | Self::Chat { date, .. }
            | Self::Channel { date, .. } => *date,
        }
    }
}

/// A replied-to message that may live in another chat or topic.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReplyInfo {
    pub origin: MessageOrigin,
    /// Supergroups and channels only.
    pub chat: Option<Chat>,
    /// Supergroups and channels only.
    pub message_id: Option<i64>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    /// Animation, photo and video replies only.
    pub has_media_spoiler: Option<True>,
    #[serde(flatten)]
    pub content: ExternalReplyContent,
}

/// What the replied-to message contains, chosen by the first content field
/// present in [`ExternalReplyContent::KEYS`].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExternalReplyContent {
    /// Animations also carry `document`.
    Animation { animation: Animation, document: Option<Document> },
    Audio { audio: Audio },
    Document { document: Document },
    PaidMedia { paid_media: PaidMediaInfo },
    Photo { photo: Vec<PhotoSize> },
    Sticker { sticker: Sticker },
    Story { story: Story },
    Video { video: Video },
    VideoNote { video_note: VideoNote },
    Voice { voice: Voice },
    Contact { contact: Contact },
    Dice { dice: Dice },
    Game { game: Game },
    Giveaway { giveaway: Giveaway },
    GiveawayWinners { giveaway_winners: GiveawayWinners },
    Invoice { invoice: Invoice },
    /// Venues also carry `location`.
    Venue { venue: Venue, location: Option<Location> },
    Location { location: Location },
    Poll { poll: Poll },
}

impl ExternalReplyContent {
    pub const KEYS: &'static [&'static str] = &[
        "animation",
        "audio",
        "document",
        "paid_media",
        "photo",
        "sticker",
        "story",
        "video",
        "video_note",
        "voice",
        "contact",
        "dice",
        "game",
        "giveaway",
        "giveaway_winners",
        "invoice",
        "venue",
        "location",
        "poll",
    ];

    /// The content field that selected this variant.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Animation { .. } => "animation",
            Self::Audio { .. } => "audio",
            Self::Document { .. } => "document",
            Self::PaidMedia { .. } => "paid_media",
            Self::Photo { .. } => "photo",
            Self::Sticker { .. } => "sticker",
            Self::Story { .. } => "story",
            Self::Video { .. } => "video",
            Self::VideoNote { .. } => "video_note",
            Self::Voice { .. } => "voice",
            Self::Contact { .. } => "contact",
            Self::Dice { .. } => "dice",
            Self::Game { .. } => "game",
            Self::Giveaway { .. } => "giveaway",
            Self::GiveawayWinners { .. } => "giveaway_winners",
            Self::Invoice { .. } => "invoice",
            Self::Venue { .. } => "venue",
            Self::Location { .. } => "location",
            Self::Poll { .. } => "poll",
        }
    }

    fn from_map(key: &str, map: &mut Map<String, Value>) -> Result<Self, serde_json::Error> {
        let content = match key {
            "animation" => Self::Animation {
                animation: field(map, "animation")?,
                document: field(map, "document")?,
            },
            "audio" => Self::Audio { audio: field(map, key)? },
            "document" => Self::Document { document: field(map, key)? },
            "paid_media" => Self::PaidMedia { paid_media: field(map, key)? },
            "photo" => Self::Photo { photo: field(map, key)? },
            "sticker" => Self::Sticker { sticker: field(map, key)? },
            "story" => Self::Story { story: field(map, key)? },
            "video" => Self::Video { video: field(map, key)? },
            "video_note" => Self::VideoNote { video_note: field(map, key)? },
            "voice" => Self::Voice { voice: field(map, key)? },
            "contact" => Self::Contact { contact: field(map, key)? },
            "dice" => Self::Dice { dice: field(map, key)? },
            "game" => Self::Game { game: field(map, key)? },
            "giveaway" => Self::Giveaway { giveaway: field(map, key)? },
            "giveaway_winners" => Self::GiveawayWinners { giveaway_winners: field(map, key)? },
            "invoice" => Self::Invoice { invoice: field(map, key)? },
            "venue" => Self::Venue {
                venue: field(map, "venue")?,
                location: field(map, "location")?,
            },
            "location" => Self::Location { location: field(map, key)? },
            "poll" => Self::Poll { poll: field(map, key)? },
            other => return Err(serde_json::Error::unknown_field(other, Self::KEYS)),
        };
        Ok(content)
    }
}

/// Decodes `key` out of `map`; an absent key reads as `null`.
fn field<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Result<T, serde_json::Error> {
    serde_json::from_value(shape::take(map, key))
}

impl<'de> Deserialize<'de> for ExternalReplyContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let Some(key) = shape::first_key(&map, Self::KEYS) else {
            return Err(D::Error::custom(format!(
                "external reply has no known content field; found {}",
                shape::list_keys(&map)
            )));
        };
        Self::from_map(key, &mut map).map_err(|e| shape::variant_error("external reply", key, e))
    }
}

/// Reply parameters for a message being sent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyParameters {
    pub message_id: i64,
    /// Set when replying to a message in another chat.
    pub chat_id: Option<ChatId>,
    pub allow_sending_without_reply: Option<bool>,
    /// Exact substring of the replied-to message; 0-1024 characters.
    pub quote: Option<String>,
    pub quote_parse_mode: Option<ParseMode>,
    pub quote_entities: Option<Vec<MessageEntity>>,
    /// In UTF-16 code units.
    pub quote_position: Option<i64>,
    pub checklist_task_id: Option<i64>,
}

impl ReplyParameters {
    pub fn to_message(message_id: i64) -> Self {
        Self {
            message_id,
            chat_id: None,
            allow_sending_without_reply: None,
            quote: None,
            quote_parse_mode: None,
            quote_entities: None,
            quote_position: None,
            checklist_task_id: None,
        }
    }
}

/// Options used for link preview generation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewOptions {
    pub is_disabled: Option<bool>,
    /// Empty means the first URL in the text.
    pub url: Option<String>,
    pub prefer_small_media: Option<bool>,
    pub prefer_large_media: Option<bool>,
    pub show_above_text: Option<bool>,
}
