use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::business::{BusinessIntro, BusinessLocation, BusinessOpeningHours};
use crate::content::Location;
use crate::gift::AcceptedGiftTypes;
use crate::message::Message;
use crate::primitives::True;
use crate::reaction::ReactionType;
use crate::user::{Birthdate, User};

/// A chat, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chat {
    Private(PrivateChat),
    Group(GroupChat),
    Supergroup(SupergroupChat),
    Channel(ChannelChat),
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateChat {
    pub id: i64,
    pub username: Option<String>,
    /// First name of the other party.
    pub first_name: String,
    pub last_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupChat {
    pub id: i64,
    pub title: String,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupergroupChat {
    pub id: i64,
    pub username: Option<String>,
    pub title: String,
    /// Set when topics are enabled.
    pub is_forum: Option<True>,
    /// Set for the direct messages chat of a channel.
    pub is_direct_messages: Option<True>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelChat {
    pub id: i64,
    pub title: String,
    pub username: Option<String>,
}

impl Chat {
    /// Chat identifier; may exceed 32 bits.
    pub fn id(&self) -> i64 {
        match self {
            Self::Private(c) => c.id,
            Self::Group(c) => c.id,
            Self::Supergroup(c) => c.id,
            Self::Channel(c) => c.id,
        }
    }

    /// The wire value of the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Private(_) => "private",
            Self::Group(_) => "group",
            Self::Supergroup(_) => "supergroup",
            Self::Channel(_) => "channel",
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Private(c) => c.username.as_deref(),
            Self::Group(c) => c.username.as_deref(),
            Self::Supergroup(c) => c.username.as_deref(),
            Self::Channel(c) => c.username.as_deref(),
        }
    }

    /// Title of a group, supergroup or channel. Private chats have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Private(_) => None,
            Self::Group(c) => Some(&c.title),
            Self::Supergroup(c) => Some(&c.title),
            Self::Channel(c) => Some(&c.title),
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel(_))
    }
}

/// Full information about a chat, as returned by `getChat`.
///
/// Each variant embeds the matching [`Chat`] variant and adds the fields
/// that only a full fetch populates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatFullInfo {
    Private(PrivateChatFullInfo),
    Group(GroupChatFullInfo),
    Supergroup(SupergroupChatFullInfo),
    Channel(ChannelChatFullInfo),
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateChatFullInfo {
    #[serde(flatten)]
    pub chat: PrivateChat,
    pub accent_color_id: i64,
    pub max_reaction_count: i64,
    pub photo: Option<ChatPhoto>,
    pub active_usernames: Option<Vec<String>>,
    pub birthdate: Option<Birthdate>,
    pub business_intro: Option<BusinessIntro>,
    pub business_location: Option<BusinessLocation>,
    pub business_opening_hours: Option<BusinessOpeningHours>,
    /// The personal channel of the user.
    pub personal_chat: Option<Chat>,
    /// If omitted, all emoji reactions are allowed.
    pub available_reactions: Option<Vec<ReactionType>>,
    pub background_custom_emoji_id: Option<String>,
    pub profile_accent_color_id: Option<i64>,
    pub profile_background_custom_emoji_id: Option<String>,
    pub emoji_status_custom_emoji_id: Option<String>,
    pub emoji_status_expiration_date: Option<i64>,
    pub bio: Option<String>,
    pub has_private_forwards: Option<True>,
    pub has_restricted_voice_and_video_messages: Option<True>,
    pub pinned_message: Option<Box<Message>>,
    pub accepted_gift_types: Option<AcceptedGiftTypes>,
    pub message_auto_delete_time: Option<i64>,
    pub has_protected_content: Option<True>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupChatFullInfo {
    #[serde(flatten)]
    pub chat: GroupChat,
    pub accent_color_id: i64,
    pub max_reaction_count: i64,
    pub photo: Option<ChatPhoto>,
    pub active_usernames: Option<Vec<String>>,
    pub available_reactions: Option<Vec<ReactionType>>,
    pub background_custom_emoji_id: Option<String>,
    pub profile_accent_color_id: Option<i64>,
    pub profile_background_custom_emoji_id: Option<String>,
    pub emoji_status_custom_emoji_id: Option<String>,
    pub emoji_status_expiration_date: Option<i64>,
    pub description: Option<String>,
    /// Primary invite link.
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    /// Default member permissions.
    pub permissions: Option<ChatPermissions>,
    pub accepted_gift_types: Option<AcceptedGiftTypes>,
    pub message_auto_delete_time: Option<i64>,
    pub has_hidden_members: Option<True>,
    pub has_protected_content: Option<True>,
    pub has_visible_history: Option<True>,
    pub can_set_sticker_set: Option<True>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupergroupChatFullInfo {
    #[serde(flatten)]
    pub chat: SupergroupChat,
    pub accent_color_id: i64,
    pub max_reaction_count: i64,
    pub photo: Option<ChatPhoto>,
    pub active_usernames: Option<Vec<String>>,
    /// The corresponding channel; direct messages chats only.
    pub parent_chat: Option<Chat>,
    pub available_reactions: Option<Vec<ReactionType>>,
    pub background_custom_emoji_id: Option<String>,
    pub profile_accent_color_id: Option<i64>,
    pub profile_background_custom_emoji_id: Option<String>,
    pub join_to_send_messages: Option<True>,
    pub join_by_request: Option<True>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub permissions: Option<ChatPermissions>,
    pub accepted_gift_types: Option<AcceptedGiftTypes>,
    pub can_send_paid_media: Option<True>,
    /// Minimum delay between consecutive messages of unprivileged users, in seconds.
    pub slow_mode_delay: Option<i64>,
    pub unrestrict_boost_count: Option<i64>,
    pub message_auto_delete_time: Option<i64>,
    pub has_aggressive_anti_spam_enabled: Option<True>,
    pub has_hidden_members: Option<True>,
    pub has_protected_content: Option<True>,
    pub has_visible_history: Option<True>,
    pub sticker_set_name: Option<String>,
    pub can_set_sticker_set: Option<True>,
    pub custom_emoji_sticker_set_name: Option<String>,
    /// Discussion group of a channel or vice versa. May exceed 32 bits.
    pub linked_chat_id: Option<i64>,
    pub location: Option<ChatLocation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelChatFullInfo {
    #[serde(flatten)]
    pub chat: ChannelChat,
    pub accent_color_id: i64,
    pub max_reaction_count: i64,
    pub photo: Option<ChatPhoto>,
    pub active_usernames: Option<Vec<String>>,
    pub available_reactions: Option<Vec<ReactionType>>,
    pub background_custom_emoji_id: Option<String>,
    pub profile_accent_color_id: Option<i64>,
    pub profile_background_custom_emoji_id: Option<String>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub accepted_gift_types: Option<AcceptedGiftTypes>,
    pub can_send_paid_media: Option<True>,
    pub message_auto_delete_time: Option<i64>,
    pub has_protected_content: Option<True>,
    /// Discussion group identifier. Smaller than 2^52, so `i64` is exact.
    pub linked_chat_id: Option<i64>,
}

impl ChatFullInfo {
    pub fn id(&self) -> i64 {
        match self {
            Self::Private(c) => c.chat.id,
            Self::Group(c) => c.chat.id,
            Self::Supergroup(c) => c.chat.id,
            Self::Channel(c) => c.chat.id,
        }
    }

    /// The basic chat embedded in this full record.
    pub fn chat(&self) -> Chat {
        match self {
            Self::Private(c) => Chat::Private(c.chat.clone()),
            Self::Group(c) => Chat::Group(c.chat.clone()),
            Self::Supergroup(c) => Chat::Supergroup(c.chat.clone()),
            Self::Channel(c) => Chat::Channel(c.chat.clone()),
        }
    }

    pub fn accent_color_id(&self) -> i64 {
        match self {
            Self::Private(c) => c.accent_color_id,
            Self::Group(c) => c.accent_color_id,
            Self::Supergroup(c) => c.accent_color_id,
            Self::Channel(c) => c.accent_color_id,
        }
    }

    pub fn pinned_message(&self) -> Option<&Message> {
        match self {
            Self::Private(c) => c.pinned_message.as_deref(),
            Self::Group(c) => c.pinned_message.as_deref(),
            Self::Supergroup(c) => c.pinned_message.as_deref(),
            Self::Channel(c) => c.pinned_message.as_deref(),
        }
    }
}

/// Chat photo file identifiers, small (160x160) and big (640x640).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// An invite link for a chat.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteLink {
    /// Links created by other administrators have their second part replaced with "…".
    pub invite_link: String,
    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    /// 1-99999.
    pub member_limit: Option<i64>,
    pub pending_join_request_count: Option<i64>,
    pub subscription_period: Option<i64>,
    pub subscription_price: Option<i64>,
}

/// Actions a non-administrator user is allowed to take in a chat.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPermissions {
    pub can_send_messages: Option<bool>,
    pub can_send_audios: Option<bool>,
    pub can_send_documents: Option<bool>,
    pub can_send_photos: Option<bool>,
    pub can_send_videos: Option<bool>,
    pub can_send_video_notes: Option<bool>,
    pub can_send_voice_notes: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
    /// Defaults to `can_pin_messages` when omitted.
    pub can_manage_topics: Option<bool>,
}

impl ChatPermissions {
    pub fn can_manage_topics(&self) -> bool {
        self.can_manage_topics
            .or(self.can_pin_messages)
            .unwrap_or(false)
    }
}

/// A location to which a supergroup is connected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    /// Never a live location.
    pub location: Location,
    pub address: String,
}

/// A join request sent to a supergroup or channel.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    /// Usable for 24 hours to message the requester.
    pub user_chat_id: i64,
    pub date: i64,
    pub bio: Option<String>,
    pub invite_link: Option<ChatInviteLink>,
}

/// A topic of a direct messages chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessagesTopic {
    pub topic_id: i64,
    pub user: User,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub message_thread_id: i64,
    pub name: String,
    /// RGB.
    pub icon_color: i64,
    pub icon_custom_emoji_id: Option<String>,
}
