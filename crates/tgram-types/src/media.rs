use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::user::File;

/// One size of a photo or a file/sticker thumbnail.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    /// Stable across bots; cannot be used to download the file.
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub file_size: Option<i64>,
}

/// Largest size by pixel area.
pub fn largest_photo(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    sizes.iter().max_by_key(|p| p.width.saturating_mul(p.height))
}

/// GIF or H.264/MPEG-4 AVC video without sound.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// Audio file treated as music.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i64,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    /// Album cover.
    pub thumbnail: Option<PhotoSize>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    pub thumbnail: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    pub thumbnail: Option<PhotoSize>,
    pub cover: Option<Vec<PhotoSize>>,
    /// Seconds from which playback starts in the message.
    pub start_timestamp: Option<i64>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// Round video message.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    /// Width and height (diameter).
    pub length: i64,
    pub duration: i64,
    pub thumbnail: Option<PhotoSize>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i64,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// Paid media attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaInfo {
    pub star_count: i64,
    pub paid_media: Vec<PaidMedia>,
}

/// Discriminated by `type`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaidMedia {
    /// Not available before payment.
    Preview {
        width: Option<i64>,
        height: Option<i64>,
        duration: Option<i64>,
    },
    Photo { photo: Vec<PhotoSize> },
    Video { video: Video },
}

impl PaidMedia {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Preview { .. } => "preview",
            Self::Photo { .. } => "photo",
            Self::Video { .. } => "video",
        }
    }
}

/// Independent of the sticker format, which `is_animated` and `is_video` determine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerType {
    Regular,
    Mask,
    CustomEmoji,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub is_video: bool,
    pub thumbnail: Option<PhotoSize>,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    /// Premium regular stickers only.
    pub premium_animation: Option<File>,
    /// Mask stickers only.
    pub mask_position: Option<MaskPosition>,
    /// Custom emoji stickers only.
    pub custom_emoji_id: Option<String>,
    /// Custom emoji stickers that are repainted to the text color.
    pub needs_repainting: Option<bool>,
    pub file_size: Option<i64>,
}

impl Sticker {
    /// `tgs`, `webm` or `webp`, from the format flags.
    pub fn format(&self) -> &'static str {
        if self.is_animated {
            "tgs"
        } else if self.is_video {
            "webm"
        } else {
            "webp"
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub sticker_type: StickerType,
    pub stickers: Vec<Sticker>,
    pub thumbnail: Option<PhotoSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

/// Default placement of a mask on a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    /// In mask widths, left to right.
    pub x_shift: f64,
    /// In mask heights, top to bottom.
    pub y_shift: f64,
    pub scale: f64,
}
