use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::entity::{MessageEntity, ParseMode};
use crate::media::{Animation, PhotoSize};
use crate::primitives::True;
use crate::user::User;

/// A phone contact.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
    pub vcard: Option<String>,
}

/// Animated emoji showing a random value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: i64,
}

impl Dice {
    /// Highest value the dice emoji can show.
    pub fn max_value(&self) -> i64 {
        match self.emoji.as_str() {
            "🏀" | "⚽" => 5,
            "🎰" => 64,
            _ => 6,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    /// Only custom emoji entities are allowed.
    pub text_entities: Option<Vec<MessageEntity>>,
    pub voter_count: i64,
}

/// An answer option of a poll being sent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPollOption {
    pub text: String,
    pub text_parse_mode: Option<ParseMode>,
    pub text_entities: Option<Vec<MessageEntity>>,
}

/// A user's answer in a non-anonymous poll.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    /// Set when the voter is anonymous.
    pub voter_chat: Option<Chat>,
    pub user: Option<User>,
    /// 0-based; empty when the vote was retracted.
    pub option_ids: Vec<i64>,
}

impl PollAnswer {
    pub fn is_retracted(&self) -> bool {
        self.option_ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollType {
    Regular,
    Quiz,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub question_entities: Option<Vec<MessageEntity>>,
    pub options: Vec<PollOption>,
    pub total_voter_count: i64,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub kind: PollType,
    pub allows_multiple_answers: bool,
    /// Quiz polls only, and only when visible to the bot.
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
}

impl Poll {
    /// Options with the most votes. Empty when nobody voted.
    pub fn leaders(&self) -> Vec<&PollOption> {
        let top = self.options.iter().map(|o| o.voter_count).max().unwrap_or(0);
        if top == 0 {
            return Vec::new();
        }
        self.options.iter().filter(|o| o.voter_count == top).collect()
    }
}

/// A point on the map.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationFields")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters, 0-1500.
    pub horizontal_accuracy: Option<f64>,
    /// Present for active live locations.
    #[serde(flatten)]
    pub live: Option<LiveLocation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveLocation {
    /// Seconds relative to the message date during which the location can update.
    pub live_period: i64,
    /// Degrees, 1-360.
    pub heading: Option<i64>,
    /// Meters.
    pub proximity_alert_radius: Option<i64>,
}

impl Location {
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

/// The flat wire form of [`Location`]; live fields are checked as a group.
#[derive(Deserialize)]
struct LocationFields {
    latitude: f64,
    longitude: f64,
    horizontal_accuracy: Option<f64>,
    live_period: Option<i64>,
    heading: Option<i64>,
    proximity_alert_radius: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
#[error("`heading` and `proximity_alert_radius` require `live_period`")]
pub struct LiveFieldsWithoutPeriod;

impl TryFrom<LocationFields> for Location {
    type Error = LiveFieldsWithoutPeriod;

    fn try_from(f: LocationFields) -> Result<Self, Self::Error> {
        let live = match f.live_period {
            Some(live_period) => Some(LiveLocation {
                live_period,
                heading: f.heading,
                proximity_alert_radius: f.proximity_alert_radius,
            }),
            None if f.heading.is_some() || f.proximity_alert_radius.is_some() => {
                return Err(LiveFieldsWithoutPeriod);
            }
            None => None,
        };
        Ok(Self {
            latitude: f.latitude,
            longitude: f.longitude,
            horizontal_accuracy: f.horizontal_accuracy,
            live,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Never a live location.
    pub location: Location,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

/// Create and edit games with BotFather.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    pub text: Option<String>,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
    pub position: i64,
    pub user: User,
    pub score: i64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTask {
    pub id: i64,
    pub text: String,
    pub text_entities: Option<Vec<MessageEntity>>,
    /// Omitted if the task wasn't completed.
    pub completed_by_user: Option<User>,
    /// 0 if the task wasn't completed.
    pub completion_date: Option<i64>,
}

impl ChecklistTask {
    pub fn is_done(&self) -> bool {
        self.completion_date.is_some_and(|d| d != 0)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub title_entities: Option<Vec<MessageEntity>>,
    pub tasks: Vec<ChecklistTask>,
    pub others_can_add_tasks: Option<True>,
    pub others_can_mark_tasks_as_done: Option<True>,
}

/// A task to add to a checklist.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputChecklistTask {
    /// Positive and unique within the checklist.
    pub id: i64,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub text_entities: Option<Vec<MessageEntity>>,
}

/// A checklist to create.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputChecklist {
    pub title: String,
    pub parse_mode: Option<ParseMode>,
    pub title_entities: Option<Vec<MessageEntity>>,
    /// 1-30 tasks.
    pub tasks: Vec<InputChecklistTask>,
    pub others_can_add_tasks: Option<bool>,
    pub others_can_mark_tasks_as_done: Option<bool>,
}

/// Data sent from a Web App. Clients can send arbitrary values here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppData {
    pub data: String,
    pub button_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_static_location() {
        let raw = json!({"latitude": 48.8584, "longitude": 2.2945});
        let location: Location = serde_json::from_value(raw.clone()).unwrap();
        assert!(!location.is_live());
        assert_eq!(serde_json::to_value(&location).unwrap(), raw);
    }

    #[test]
    fn test_live_location() {
        let raw = json!({
            "latitude": 48.8584,
            "longitude": 2.2945,
            "horizontal_accuracy": 12.5,
            "live_period": 900,
            "heading": 90,
            "proximity_alert_radius": 100
        });
        let location: Location = serde_json::from_value(raw.clone()).unwrap();
        let live = location.live.as_ref().unwrap();
        assert_eq!(live.live_period, 900);
        assert_eq!(live.heading, Some(90));
        assert_eq!(serde_json::to_value(&location).unwrap(), raw);
    }

    #[test]
    fn test_malformed_live_fields_rejected() {
        let err = serde_json::from_value::<Location>(json!({
            "latitude": 1.0, "longitude": 2.0, "live_period": "forever"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));

        let err = serde_json::from_value::<Location>(json!({
            "latitude": 1.0, "longitude": 2.0, "live_period": 60, "heading": "north"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));

        let err = serde_json::from_value::<Location>(json!({
            "latitude": 1.0, "longitude": 2.0, "heading": 90
        }))
        .unwrap_err();
        assert!(err.to_string().contains("require `live_period`"));
    }

    #[test]
    fn test_quiz_poll() {
        let raw = json!({
            "id": "p1",
            "question": "2+2?",
            "options": [
                {"text": "3", "voter_count": 1},
                {"text": "4", "voter_count": 5}
            ],
            "total_voter_count": 6,
            "is_closed": true,
            "is_anonymous": false,
            "type": "quiz",
            "allows_multiple_answers": false,
            "correct_option_id": 1
        });
        let poll: Poll = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(poll.kind, PollType::Quiz);
        assert_eq!(poll.leaders().len(), 1);
        assert_eq!(poll.leaders()[0].text, "4");
        assert_eq!(serde_json::to_value(&poll).unwrap(), raw);
    }

    #[test]
    fn test_unknown_poll_type_fails() {
        assert!(serde_json::from_value::<PollType>(json!("survey")).is_err());
    }

    #[test]
    fn test_dice_ranges() {
        let slot = Dice { emoji: "🎰".to_string(), value: 64 };
        assert_eq!(slot.max_value(), 64);
        let ball = Dice { emoji: "⚽".to_string(), value: 3 };
        assert_eq!(ball.max_value(), 5);
        let die = Dice { emoji: "🎲".to_string(), value: 1 };
        assert_eq!(die.max_value(), 6);
    }

    #[test]
    fn test_checklist_task_completion() {
        let checklist: Checklist = serde_json::from_value(json!({
            "title": "Launch",
            "tasks": [
                {"id": 1, "text": "Build", "completion_date": 1700000000, "completed_by_user": {"id": 9, "is_bot": false, "first_name": "Q"}},
                {"id": 2, "text": "Ship", "completion_date": 0}
            ],
            "others_can_add_tasks": true
        }))
        .unwrap();
        assert!(checklist.tasks[0].is_done());
        assert!(!checklist.tasks[1].is_done());
        assert_eq!(checklist.others_can_add_tasks, Some(True));
    }

    #[test]
    fn test_retracted_vote() {
        let answer: PollAnswer = serde_json::from_value(json!({
            "poll_id": "p1",
            "voter_chat": {"id": -1002, "type": "channel", "title": "Ch"},
            "option_ids": []
        }))
        .unwrap();
        assert!(answer.is_retracted());
    }
}
