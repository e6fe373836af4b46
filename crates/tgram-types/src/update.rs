use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::boost::{ChatBoostRemoved, ChatBoostUpdated};
use crate::business::{BusinessConnection, BusinessMessagesDeleted};
use crate::chat::{Chat, ChatJoinRequest};
use crate::content::{Poll, PollAnswer};
use crate::inline::{ChosenInlineResult, InlineQuery};
use crate::markup::CallbackQuery;
use crate::member::ChatMemberUpdated;
use crate::message::Message;
use crate::payment::{PaidMediaPurchased, PreCheckoutQuery, ShippingQuery};
use crate::reaction::{MessageReactionCountUpdated, MessageReactionUpdated};
use crate::shape::{self, keyed_union};
use crate::user::User;

/// An incoming update: an identifier plus exactly one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Sequential; useful to ignore repeated webhook deliveries.
    pub update_id: i64,
    #[serde(flatten)]
    pub kind: UpdateKind,
}

keyed_union! {
    pub enum UpdateKind {
        /// New non-channel message.
        "message" => Message(Message),
        "edited_message" => EditedMessage(Message),
        "channel_post" => ChannelPost(Message),
        "edited_channel_post" => EditedChannelPost(Message),
        "business_connection" => BusinessConnection(BusinessConnection),
        "business_message" => BusinessMessage(Message),
        "edited_business_message" => EditedBusinessMessage(Message),
        "deleted_business_messages" => DeletedBusinessMessages(BusinessMessagesDeleted),
        "message_reaction" => MessageReaction(MessageReactionUpdated),
        "message_reaction_count" => MessageReactionCount(MessageReactionCountUpdated),
        "inline_query" => InlineQuery(InlineQuery),
        "chosen_inline_result" => ChosenInlineResult(ChosenInlineResult),
        "callback_query" => CallbackQuery(CallbackQuery),
        /// Flexible-price invoices only.
        "shipping_query" => ShippingQuery(ShippingQuery),
        "pre_checkout_query" => PreCheckoutQuery(PreCheckoutQuery),
        "purchased_paid_media" => PurchasedPaidMedia(PaidMediaPurchased),
        /// Only polls stopped or sent by the bot.
        "poll" => Poll(Poll),
        "poll_answer" => PollAnswer(PollAnswer),
        /// The bot's own member status changed.
        "my_chat_member" => MyChatMember(ChatMemberUpdated),
        "chat_member" => ChatMember(ChatMemberUpdated),
        "chat_join_request" => ChatJoinRequest(ChatJoinRequest),
        "chat_boost" => ChatBoost(ChatBoostUpdated),
        "removed_chat_boost" => RemovedChatBoost(ChatBoostRemoved),
    }
}

impl<'de> Deserialize<'de> for UpdateKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let key = shape::exclusive_key("update", &map, Self::KEYS)?;
        Self::from_entry(key, shape::take(&mut map, key))
            .map_err(|e| shape::variant_error("update", key, e))
    }
}

impl UpdateKind {
    pub fn update_type(&self) -> UpdateType {
        match self {
            Self::Message(_) => UpdateType::Message,
            Self::EditedMessage(_) => UpdateType::EditedMessage,
            Self::ChannelPost(_) => UpdateType::ChannelPost,
            Self::EditedChannelPost(_) => UpdateType::EditedChannelPost,
            Self::BusinessConnection(_) => UpdateType::BusinessConnection,
            Self::BusinessMessage(_) => UpdateType::BusinessMessage,
            Self::EditedBusinessMessage(_) => UpdateType::EditedBusinessMessage,
            Self::DeletedBusinessMessages(_) => UpdateType::DeletedBusinessMessages,
            Self::MessageReaction(_) => UpdateType::MessageReaction,
            Self::MessageReactionCount(_) => UpdateType::MessageReactionCount,
            Self::InlineQuery(_) => UpdateType::InlineQuery,
            Self::ChosenInlineResult(_) => UpdateType::ChosenInlineResult,
            Self::CallbackQuery(_) => UpdateType::CallbackQuery,
            Self::ShippingQuery(_) => UpdateType::ShippingQuery,
            Self::PreCheckoutQuery(_) => UpdateType::PreCheckoutQuery,
            Self::PurchasedPaidMedia(_) => UpdateType::PurchasedPaidMedia,
            Self::Poll(_) => UpdateType::Poll,
            Self::PollAnswer(_) => UpdateType::PollAnswer,
            Self::MyChatMember(_) => UpdateType::MyChatMember,
            Self::ChatMember(_) => UpdateType::ChatMember,
            Self::ChatJoinRequest(_) => UpdateType::ChatJoinRequest,
            Self::ChatBoost(_) => UpdateType::ChatBoost,
            Self::RemovedChatBoost(_) => UpdateType::RemovedChatBoost,
        }
    }

    /// The message carried by any of the six message payloads.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Message(m)
            | Self::EditedMessage(m)
            | Self::ChannelPost(m)
            | Self::EditedChannelPost(m)
            | Self::BusinessMessage(m)
            | Self::EditedBusinessMessage(m) => Some(m),
            _ => None,
        }
    }
}

impl Update {
    pub fn update_type(&self) -> UpdateType {
        self.kind.update_type()
    }

    pub fn message(&self) -> Option<&Message> {
        self.kind.message()
    }

    /// The chat the update happened in, when it has one.
    pub fn chat(&self) -> Option<&Chat> {
        match &self.kind {
            UpdateKind::DeletedBusinessMessages(d) => Some(&d.chat),
            UpdateKind::MessageReaction(r) => Some(&r.chat),
            UpdateKind::MessageReactionCount(r) => Some(&r.chat),
            UpdateKind::CallbackQuery(q) => q.message.as_ref().map(|m| m.chat()),
            UpdateKind::MyChatMember(m) | UpdateKind::ChatMember(m) => Some(&m.chat),
            UpdateKind::ChatJoinRequest(r) => Some(&r.chat),
            UpdateKind::ChatBoost(b) => Some(&b.chat),
            UpdateKind::RemovedChatBoost(b) => Some(&b.chat),
            kind => kind.message().map(|m| &m.chat),
        }
    }

    /// The user who caused the update, when known.
    pub fn from(&self) -> Option<&User> {
        match &self.kind {
            UpdateKind::BusinessConnection(c) => Some(&c.user),
            UpdateKind::MessageReaction(r) => r.user.as_ref(),
            UpdateKind::InlineQuery(q) => Some(&q.from),
            UpdateKind::ChosenInlineResult(r) => Some(&r.from),
            UpdateKind::CallbackQuery(q) => Some(&q.from),
            UpdateKind::ShippingQuery(q) => Some(&q.from),
            UpdateKind::PreCheckoutQuery(q) => Some(&q.from),
            UpdateKind::PurchasedPaidMedia(p) => Some(&p.from),
            UpdateKind::PollAnswer(a) => a.user.as_ref(),
            UpdateKind::MyChatMember(m) | UpdateKind::ChatMember(m) => Some(&m.from),
            UpdateKind::ChatJoinRequest(r) => Some(&r.from),
            kind => kind.message().and_then(|m| m.from.as_ref()),
        }
    }
}

/// Update type names, as used in `allowed_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    BusinessConnection,
    BusinessMessage,
    EditedBusinessMessage,
    DeletedBusinessMessages,
    MessageReaction,
    MessageReactionCount,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    PurchasedPaidMedia,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    ChatBoost,
    RemovedChatBoost,
}

impl UpdateType {
    pub const ALL: [UpdateType; 23] = [
        Self::Message,
        Self::EditedMessage,
        Self::ChannelPost,
        Self::EditedChannelPost,
        Self::BusinessConnection,
        Self::BusinessMessage,
        Self::EditedBusinessMessage,
        Self::DeletedBusinessMessages,
        Self::MessageReaction,
        Self::MessageReactionCount,
        Self::InlineQuery,
        Self::ChosenInlineResult,
        Self::CallbackQuery,
        Self::ShippingQuery,
        Self::PreCheckoutQuery,
        Self::PurchasedPaidMedia,
        Self::Poll,
        Self::PollAnswer,
        Self::MyChatMember,
        Self::ChatMember,
        Self::ChatJoinRequest,
        Self::ChatBoost,
        Self::RemovedChatBoost,
    ];

    /// Same order as [`UpdateKind::KEYS`].
    pub fn as_str(&self) -> &'static str {
        UpdateKind::KEYS[*self as usize]
    }

    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::EditedMessage | Self::EditedChannelPost | Self::EditedBusinessMessage
        )
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Self::BusinessMessage | Self::EditedBusinessMessage)
    }

    pub fn is_channel_post(&self) -> bool {
        matches!(self, Self::ChannelPost | Self::EditedChannelPost)
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown update type {0:?}")]
pub struct UnknownUpdateType(pub String);

impl FromStr for UpdateType {
    type Err = UnknownUpdateType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownUpdateType(s.to_string()))
    }
}
