use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::content::Location;
use crate::media::Sticker;
use crate::primitives::True;
use crate::user::User;

/// Start page settings of a Telegram Business account.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessIntro {
    pub title: Option<String>,
    pub message: Option<String>,
    pub sticker: Option<Sticker>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLocation {
    pub address: String,
    pub location: Option<Location>,
}

/// Minutes are counted from Monday 00:00 in the business time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessOpeningHoursInterval {
    /// 0 - 7 * 24 * 60.
    pub opening_minute: i64,
    /// 0 - 8 * 24 * 60.
    pub closing_minute: i64,
}

impl BusinessOpeningHoursInterval {
    pub fn contains(&self, minute_of_week: i64) -> bool {
        (self.opening_minute..self.closing_minute).contains(&minute_of_week)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessOpeningHours {
    pub time_zone_name: String,
    pub opening_hours: Vec<BusinessOpeningHoursInterval>,
}

impl BusinessOpeningHours {
    /// Whether the business is open at the given minute of the week.
    pub fn is_open_at(&self, minute_of_week: i64) -> bool {
        self.opening_hours.iter().any(|i| i.contains(minute_of_week))
    }
}

/// Rights of a business bot. Absent means not granted.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessBotRights {
    pub can_reply: Option<True>,
    pub can_read_messages: Option<True>,
    pub can_delete_outgoing_messages: Option<True>,
    pub can_delete_all_messages: Option<True>,
    pub can_edit_name: Option<True>,
    pub can_edit_bio: Option<True>,
    pub can_edit_profile_photo: Option<True>,
    pub can_edit_username: Option<True>,
    pub can_change_gift_settings: Option<True>,
    pub can_view_gifts_and_stars: Option<True>,
    pub can_convert_gifts_to_stars: Option<True>,
    pub can_transfer_and_upgrade_gifts: Option<True>,
    pub can_transfer_stars: Option<True>,
    pub can_manage_stories: Option<True>,
}

/// Connection of the bot with a business account.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessConnection {
    pub id: String,
    pub user: User,
    /// Private chat with the connecting user. At most 52 significant bits.
    pub user_chat_id: i64,
    pub date: i64,
    pub rights: Option<BusinessBotRights>,
    /// Older payloads report reply permission here instead of in `rights`.
    pub can_reply: Option<bool>,
    pub is_enabled: bool,
}

impl BusinessConnection {
    pub fn can_reply(&self) -> bool {
        self.rights
            .as_ref()
            .map(|r| r.can_reply.is_some())
            .or(self.can_reply)
            .unwrap_or(false)
    }
}

/// Messages deleted from a connected business account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMessagesDeleted {
    pub business_connection_id: String,
    pub chat: Chat,
    pub message_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opening_hours() {
        let hours: BusinessOpeningHours = serde_json::from_value(json!({
            "time_zone_name": "UTC",
            "opening_hours": [
                {"opening_minute": 540, "closing_minute": 1020},
                {"opening_minute": 1980, "closing_minute": 2460}
            ]
        }))
        .unwrap();
        assert!(hours.is_open_at(600));
        assert!(!hours.is_open_at(1020));
        assert!(hours.is_open_at(2000));
    }

    #[test]
    fn test_connection_reply_rights() {
        let raw = json!({
            "id": "biz-1",
            "user": {"id": 5, "is_bot": false, "first_name": "Shop"},
            "user_chat_id": 4503599627370495_i64,
            "date": 1700000000,
            "rights": {"can_reply": true, "can_read_messages": true},
            "is_enabled": true
        });
        let conn: BusinessConnection = serde_json::from_value(raw.clone()).unwrap();
        assert!(conn.can_reply());
        assert_eq!(conn.user_chat_id, 4503599627370495);
        assert_eq!(serde_json::to_value(&conn).unwrap(), raw);

        let legacy: BusinessConnection = serde_json::from_value(json!({
            "id": "biz-2",
            "user": {"id": 5, "is_bot": false, "first_name": "Shop"},
            "user_chat_id": 5,
            "date": 1700000000,
            "can_reply": true,
            "is_enabled": false
        }))
        .unwrap();
        assert!(legacy.can_reply());
    }
}
