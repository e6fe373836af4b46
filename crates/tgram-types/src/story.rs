use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::reaction::ReactionType;

/// A story posted by a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub chat: Chat,
    pub id: i64,
}

/// Percentages are relative to the media size; the angle is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoryAreaPosition {
    pub x_percentage: f64,
    pub y_percentage: f64,
    pub width_percentage: f64,
    pub height_percentage: f64,
    /// 0-360, clockwise.
    pub rotation_angle: f64,
    pub corner_radius_percentage: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAddress {
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

/// Type of a clickable story area, discriminated by `type`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoryAreaType {
    Location {
        latitude: f64,
        longitude: f64,
        address: Option<LocationAddress>,
    },
    SuggestedReaction {
        reaction_type: ReactionType,
        is_dark: Option<bool>,
        is_flipped: Option<bool>,
    },
    /// HTTP or tg:// link.
    Link { url: String },
    Weather {
        /// Degrees Celsius.
        temperature: f64,
        emoji: String,
        /// ARGB.
        background_color: i64,
    },
    UniqueGift { name: String },
}

impl StoryAreaType {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Location { .. } => "location",
            Self::SuggestedReaction { .. } => "suggested_reaction",
            Self::Link { .. } => "link",
            Self::Weather { .. } => "weather",
            Self::UniqueGift { .. } => "unique_gift",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryArea {
    pub position: StoryAreaPosition,
    #[serde(rename = "type")]
    pub kind: StoryAreaType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn position() -> serde_json::Value {
        json!({
            "x_percentage": 50.0,
            "y_percentage": 25.5,
            "width_percentage": 10.0,
            "height_percentage": 5.0,
            "rotation_angle": 0.0,
            "corner_radius_percentage": 1.5
        })
    }

    #[test]
    fn test_area_types() {
        let samples = [
            json!({"type": "location", "latitude": 52.52, "longitude": 13.405, "address": {"country_code": "DE", "city": "Berlin"}}),
            json!({"type": "suggested_reaction", "reaction_type": {"type": "emoji", "emoji": "👍"}, "is_dark": true}),
            json!({"type": "link", "url": "https://telegram.org"}),
            json!({"type": "weather", "temperature": -3.5, "emoji": "❄", "background_color": 4294967295_i64}),
            json!({"type": "unique_gift", "name": "PlushPepe-1"}),
        ];
        let kinds = ["location", "suggested_reaction", "link", "weather", "unique_gift"];
        for (raw, kind) in samples.into_iter().zip(kinds) {
            let area: StoryArea =
                serde_json::from_value(json!({"position": position(), "type": raw.clone()})).unwrap();
            assert_eq!(area.kind.kind(), kind);
            assert_eq!(serde_json::to_value(&area.kind).unwrap(), raw);
        }
    }

    #[test]
    fn test_unknown_area_type_fails() {
        assert!(serde_json::from_value::<StoryAreaType>(json!({"type": "music"})).is_err());
    }
}
