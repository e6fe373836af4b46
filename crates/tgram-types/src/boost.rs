use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::primitives::True;
use crate::user::User;

/// Source of a chat boost, discriminated by `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    /// Subscribing to or gifting Telegram Premium.
    Premium { user: User },
    /// Premium gift codes created to boost the chat.
    GiftCode { user: User },
    Giveaway(ChatBoostSourceGiveaway),
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiveaway {
    /// May be 0 if the message isn't sent yet.
    pub giveaway_message_id: i64,
    /// Premium giveaways only.
    pub user: Option<User>,
    /// Star giveaways only.
    pub prize_star_count: Option<i64>,
    pub is_unclaimed: Option<True>,
}

impl ChatBoostSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Premium { .. } => "premium",
            Self::GiftCode { .. } => "gift_code",
            Self::Giveaway(_) => "giveaway",
        }
    }

    /// The booster or giveaway winner, when known.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Premium { user } | Self::GiftCode { user } => Some(user),
            Self::Giveaway(g) => g.user.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,
    pub expiration_date: i64,
    pub source: ChatBoostSource,
}

/// A boost added to a chat or changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,
    pub remove_date: i64,
    pub source: ChatBoostSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}

/// Service message: a user boosted the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostAdded {
    pub boost_count: i64,
}
