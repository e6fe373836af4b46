use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::media::PhotoSize;
use crate::primitives::True;

/// A Telegram user or bot.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// May exceed 32 bits; always fits in 52.
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// IETF language tag of the user's language.
    pub language_code: Option<String>,
    pub is_premium: Option<True>,
    pub added_to_attachment_menu: Option<True>,
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {last}", self.first_name),
            None => self.first_name.clone(),
        }
    }
}

/// The bot itself, as returned by `getMe`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFromGetMe {
    #[serde(flatten)]
    pub user: User,
    pub can_join_groups: bool,
    pub can_read_all_group_messages: bool,
    pub supports_inline_queries: bool,
    pub can_connect_to_business: Option<bool>,
    pub has_main_web_app: Option<bool>,
}

impl Deref for UserFromGetMe {
    type Target = User;

    fn deref(&self) -> &User {
        &self.user
    }
}

impl UserFromGetMe {
    /// Bots always have a username; `getMe` guarantees it.
    pub fn username(&self) -> &str {
        self.user.username.as_deref().unwrap_or_default()
    }
}

/// A user's profile pictures, each in up to 4 sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    pub photos: Vec<Vec<PhotoSize>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthdate {
    pub day: u8,
    pub month: u8,
    pub year: Option<i32>,
}

/// A bot command: 1-32 lowercase letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

/// Current status of a webhook.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// May be empty if no webhook is set up.
    pub url: Option<String>,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    pub ip_address: Option<String>,
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub last_synchronization_error_date: Option<i64>,
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<String>>,
}

/// A file ready to be downloaded from
/// `https://api.telegram.org/file/bot<token>/<file_path>`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    /// Can be bigger than 2^31; at most 52 significant bits.
    pub file_size: Option<i64>,
    pub file_path: Option<String>,
}
