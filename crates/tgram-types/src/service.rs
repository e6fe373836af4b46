//! Payloads of service messages.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::content::ChecklistTask;
use crate::media::{Document, PhotoSize};
use crate::message::Message;
use crate::primitives::True;
use crate::user::User;

/// A user triggered another user's proximity alert while sharing a live location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,
    /// Meters.
    pub distance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAutoDeleteTimerChanged {
    /// Seconds.
    pub message_auto_delete_time: i64,
}

/// How a background is filled, discriminated by `type`. Colors are RGB24.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid {
        color: i64,
    },
    Gradient {
        top_color: i64,
        bottom_color: i64,
        /// Degrees clockwise, 0-359.
        rotation_angle: i64,
    },
    /// Rotates after every message in the chat.
    FreeformGradient {
        /// 3 or 4 base colors.
        colors: Vec<i64>,
    },
}

/// Discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundType {
    Fill {
        fill: BackgroundFill,
        /// Percent, 0-100.
        dark_theme_dimming: i64,
    },
    /// JPEG wallpaper.
    Wallpaper {
        document: Document,
        dark_theme_dimming: i64,
        is_blurred: bool,
        is_moving: bool,
    },
    /// PNG or TGV pattern combined with a fill.
    Pattern {
        document: Document,
        fill: BackgroundFill,
        /// Percent, 0-100.
        intensity: i64,
        /// Dark themes only.
        is_inverted: bool,
        is_moving: bool,
    },
    ChatTheme {
        theme_name: String,
    },
}

impl BackgroundType {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fill { .. } => "fill",
            Self::Wallpaper { .. } => "wallpaper",
            Self::Pattern { .. } => "pattern",
            Self::ChatTheme { .. } => "chat_theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopicCreated {
    pub name: String,
    /// RGB.
    pub icon_color: i64,
    pub icon_custom_emoji_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopicEdited {
    pub name: Option<String>,
    /// Empty when the icon was removed.
    pub icon_custom_emoji_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicClosed {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicReopened {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralForumTopicHidden {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralForumTopicUnhidden {}

/// A user shared with the bot through a request-users button.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedUser {
    /// The bot may have no access to this user.
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersShared {
    pub request_id: i64,
    pub users: Vec<SharedUser>,
}

/// A chat shared with the bot through a request-chat button.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatShared {
    pub request_id: i64,
    pub chat_id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAccessAllowed {
    /// Granted after an explicit Web App request.
    pub from_request: Option<bool>,
    /// Granted when the named Web App was launched from a link.
    pub web_app_name: Option<String>,
    pub from_attachment_menu: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChatScheduled {
    pub start_date: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChatStarted {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChatEnded {
    /// Seconds.
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoChatParticipantsInvited {
    pub users: Vec<User>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawayCreated {
    /// Star giveaways only.
    pub prize_star_count: Option<i64>,
}

/// A scheduled giveaway.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Giveaway {
    /// Chats the user must join to take part.
    pub chats: Vec<Chat>,
    pub winners_selection_date: i64,
    pub winner_count: i64,
    pub only_new_members: Option<True>,
    pub has_public_winners: Option<True>,
    pub prize_description: Option<String>,
    /// ISO 3166-1 alpha-2; empty means everyone may take part.
    pub country_codes: Option<Vec<String>>,
    pub prize_star_count: Option<i64>,
    pub premium_subscription_month_count: Option<i64>,
}

/// A giveaway with public winners was completed.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiveawayWinners {
    pub chat: Chat,
    pub giveaway_message_id: i64,
    pub winners_selection_date: i64,
    pub winner_count: i64,
    /// Up to 100.
    pub winners: Vec<User>,
    pub additional_chat_count: Option<i64>,
    pub prize_star_count: Option<i64>,
    pub premium_subscription_month_count: Option<i64>,
    pub unclaimed_prize_count: Option<i64>,
    pub only_new_members: Option<True>,
    pub was_refunded: Option<True>,
    pub prize_description: Option<String>,
    pub is_star_giveaway: Option<True>,
}

/// A giveaway without public winners was completed.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiveawayCompleted {
    pub winner_count: i64,
    pub unclaimed_prize_count: Option<i64>,
    /// Absent if the giveaway message was deleted.
    pub giveaway_message: Option<Box<Message>>,
    pub is_star_giveaway: Option<True>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMessagePriceChanged {
    pub paid_message_star_count: i64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessagePriceChanged {
    pub are_direct_messages_enabled: bool,
    /// Absent means 0.
    pub direct_message_star_count: Option<i64>,
}

// Checklist messages embedded below never carry `reply_to_message`.

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTasksDone {
    pub checklist_message: Option<Box<Message>>,
    pub marked_as_done_task_ids: Option<Vec<i64>>,
    pub marked_as_not_done_task_ids: Option<Vec<i64>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTasksAdded {
    pub checklist_message: Option<Box<Message>>,
    pub tasks: Vec<ChecklistTask>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> serde_json::Value {
        json!({"file_id": "BQAC", "file_unique_id": "AgAD", "mime_type": "image/jpeg"})
    }

    #[test]
    fn test_background_types() {
        let samples = [
            json!({"type": "fill", "fill": {"type": "solid", "color": 16711680}, "dark_theme_dimming": 20}),
            json!({"type": "wallpaper", "document": document(), "dark_theme_dimming": 0, "is_blurred": true, "is_moving": false}),
            json!({
                "type": "pattern",
                "document": document(),
                "fill": {"type": "freeform_gradient", "colors": [1, 2, 3, 4]},
                "intensity": 60,
                "is_inverted": false,
                "is_moving": true
            }),
            json!({"type": "chat_theme", "theme_name": "🌸"}),
        ];
        for raw in samples {
            let background: ChatBackground = serde_json::from_value(json!({"type": raw.clone()})).unwrap();
            assert_eq!(background.kind.kind(), raw["type"]);
            assert_eq!(serde_json::to_value(&background.kind).unwrap(), raw);
        }
    }

    #[test]
    fn test_gradient_fill() {
        let raw = json!({"type": "gradient", "top_color": 0, "bottom_color": 255, "rotation_angle": 45});
        let fill: BackgroundFill = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(fill, BackgroundFill::Gradient { rotation_angle: 45, .. }));
        assert_eq!(serde_json::to_value(&fill).unwrap(), raw);
    }

    #[test]
    fn test_unknown_fill_fails() {
        assert!(serde_json::from_value::<BackgroundFill>(json!({"type": "noise"})).is_err());
        assert!(serde_json::from_value::<BackgroundType>(json!({"type": "video"})).is_err());
    }

    #[test]
    fn test_empty_payloads_round_trip() {
        let closed: ForumTopicClosed = serde_json::from_value(json!({})).unwrap();
        assert_eq!(serde_json::to_value(closed).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(VideoChatStarted {}).unwrap(), json!({}));
    }

    #[test]
    fn test_giveaway_winners() {
        let winners: GiveawayWinners = serde_json::from_value(json!({
            "chat": {"id": -1001, "type": "channel", "title": "C"},
            "giveaway_message_id": 10,
            "winners_selection_date": 1700000000,
            "winner_count": 1,
            "winners": [{"id": 7, "is_bot": false, "first_name": "W"}],
            "is_star_giveaway": true,
            "prize_star_count": 5000
        }))
        .unwrap();
        assert_eq!(winners.winners.len(), 1);
        assert_eq!(winners.is_star_giveaway, Some(True));
    }
}
