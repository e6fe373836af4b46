use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::{CommonMessage, MaybeInaccessibleMessage};
use crate::boost::ChatBoostAdded;
use crate::content::{Checklist, Contact, Dice, Game, Location, Poll, Venue, WebAppData};
use crate::entity::MessageEntity;
use crate::gift::{GiftInfo, UniqueGiftInfo};
use crate::media::{
    Animation, Audio, Document, PaidMediaInfo, PhotoSize, Sticker, Video, VideoNote, Voice,
};
use crate::passport::PassportData;
use crate::payment::{Invoice, RefundedPayment, SuccessfulPayment};
use crate::primitives::True;
use crate::service::*;
use crate::shape;
use crate::story::Story;
use crate::suggested::{
    SuggestedPostApprovalFailed, SuggestedPostApproved, SuggestedPostDeclined, SuggestedPostPaid,
    SuggestedPostRefunded,
};
use crate::user::User;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// 0-1024 characters.
    pub caption: Option<String>,
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    /// Shared by every message of an album.
    pub media_group_id: Option<String>,
    pub has_media_spoiler: Option<True>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub text: String,
    pub entities: Option<Vec<MessageEntity>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(flatten)]
    pub media: MediaGroup,
    pub animation: Animation,
    /// The same file, kept for older clients.
    pub document: Option<Document>,
    pub show_caption_above_media: Option<True>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(flatten)]
    pub media: MediaGroup,
    pub audio: Audio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(flatten)]
    pub media: MediaGroup,
    pub document: Document,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    pub paid_media: PaidMediaInfo,
    pub show_caption_above_media: Option<True>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(flatten)]
    pub media: MediaGroup,
    /// Available sizes.
    pub photo: Vec<PhotoSize>,
    pub show_caption_above_media: Option<True>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub sticker: Sticker,
}

/// A forwarded story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub story: Story,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(flatten)]
    pub media: MediaGroup,
    pub video: Video,
    pub show_caption_above_media: Option<True>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoNoteMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub video_note: VideoNote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    #[serde(flatten)]
    pub caption: Caption,
    pub voice: Voice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub checklist: Checklist,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub dice: Dice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub game: Game,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub poll: Poll,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub venue: Venue,
    /// The venue's location, kept for older clients.
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMessage {
    #[serde(flatten)]
    pub common: CommonMessage,
    pub location: Location,
}

/// Declares [`MessageKind`] from its common and service kinds.
///
/// Common kinds decode from the whole object since they carry
/// [`CommonMessage`] fields; service kinds only read their own field.
macro_rules! message_kinds {
    (
        common { $( $ckey:literal => $cvariant:ident($cty:ty), )+ }
        service { $( $(#[$smeta:meta])* $skey:ident => $svariant:ident($sty:ty), )+ }
    ) => {
        /// What a message contains.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum MessageKind {
            $( $cvariant($cty), )+
            $( $(#[$smeta])* $svariant { $skey: $sty }, )+
        }

        impl MessageKind {
            /// Content fields in decoding precedence order.
            pub const KEYS: &'static [&'static str] = &[$($ckey,)+ $(stringify!($skey),)+];

            /// The content field that selects this kind.
            pub fn key(&self) -> &'static str {
                match self {
                    $( Self::$cvariant(_) => $ckey, )+
                    $( Self::$svariant { .. } => stringify!($skey), )+
                }
            }

            /// Shared fields of a common (non-service) message.
            pub fn common(&self) -> Option<&CommonMessage> {
                match self {
                    $( Self::$cvariant(m) => Some(&m.common), )+
                    _ => None,
                }
            }

            fn from_map(key: &str, mut map: Map<String, Value>) -> Result<Self, serde_json::Error> {
                match key {
                    $( $ckey => serde_json::from_value(Value::Object(map)).map(Self::$cvariant), )+
                    $(
                        stringify!($skey) => serde_json::from_value(shape::take(&mut map, key))
                            .map(|$skey| Self::$svariant { $skey }),
                    )+
                    other => Err(serde::de::Error::unknown_field(other, Self::KEYS)),
                }
            }
        }
    };
}

message_kinds! {
    common {
        "animation" => Animation(AnimationMessage),
        "audio" => Audio(AudioMessage),
        "document" => Document(DocumentMessage),
        "paid_media" => PaidMedia(PaidMediaMessage),
        "photo" => Photo(PhotoMessage),
        "sticker" => Sticker(StickerMessage),
        "story" => Story(StoryMessage),
        "video" => Video(VideoMessage),
        "video_note" => VideoNote(VideoNoteMessage),
        "voice" => Voice(VoiceMessage),
        "checklist" => Checklist(ChecklistMessage),
        "contact" => Contact(ContactMessage),
        "dice" => Dice(DiceMessage),
        "game" => Game(GameMessage),
        "poll" => Poll(PollMessage),
        "venue" => Venue(VenueMessage),
        "location" => Location(LocationMessage),
        "text" => Text(TextMessage),
    }
    service {
        new_chat_members => NewChatMembers(Vec<User>),
        left_chat_member => LeftChatMember(User),
        new_chat_title => NewChatTitle(String),
        new_chat_photo => NewChatPhoto(Vec<PhotoSize>),
        delete_chat_photo => DeleteChatPhoto(True),
        group_chat_created => GroupChatCreated(True),
        /// Only seen in `reply_to_message`; bots cannot be present at creation.
        supergroup_chat_created => SupergroupChatCreated(True),
        /// Only seen in `reply_to_message`; bots cannot be present at creation.
        channel_chat_created => ChannelChatCreated(True),
        message_auto_delete_timer_changed => MessageAutoDeleteTimerChanged(MessageAutoDeleteTimerChanged),
        migrate_to_chat_id => MigrateToChatId(i64),
        migrate_from_chat_id => MigrateFromChatId(i64),
        /// Never carries its own `reply_to_message`.
        pinned_message => PinnedMessage(Box<MaybeInaccessibleMessage>),
        invoice => Invoice(Invoice),
        successful_payment => SuccessfulPayment(SuccessfulPayment),
        refunded_payment => RefundedPayment(RefundedPayment),
        users_shared => UsersShared(UsersShared),
        chat_shared => ChatShared(ChatShared),
        gift => Gift(GiftInfo),
        unique_gift => UniqueGift(UniqueGiftInfo),
        /// Domain of the website the user logged in on.
        connected_website => ConnectedWebsite(String),
        write_access_allowed => WriteAccessAllowed(WriteAccessAllowed),
        passport_data => PassportData(PassportData),
        proximity_alert_triggered => ProximityAlertTriggered(ProximityAlertTriggered),
        boost_added => BoostAdded(ChatBoostAdded),
        chat_background_set => ChatBackgroundSet(ChatBackground),
        checklist_tasks_done => ChecklistTasksDone(ChecklistTasksDone),
        checklist_tasks_added => ChecklistTasksAdded(ChecklistTasksAdded),
        direct_message_price_changed => DirectMessagePriceChanged(DirectMessagePriceChanged),
        forum_topic_created => ForumTopicCreated(ForumTopicCreated),
        forum_topic_edited => ForumTopicEdited(ForumTopicEdited),
        forum_topic_closed => ForumTopicClosed(ForumTopicClosed),
        forum_topic_reopened => ForumTopicReopened(ForumTopicReopened),
        general_forum_topic_hidden => GeneralForumTopicHidden(GeneralForumTopicHidden),
        general_forum_topic_unhidden => GeneralForumTopicUnhidden(GeneralForumTopicUnhidden),
        giveaway_created => GiveawayCreated(GiveawayCreated),
        giveaway => Giveaway(Giveaway),
        giveaway_winners => GiveawayWinners(GiveawayWinners),
        giveaway_completed => GiveawayCompleted(GiveawayCompleted),
        paid_message_price_changed => PaidMessagePriceChanged(PaidMessagePriceChanged),
        suggested_post_approved => SuggestedPostApproved(SuggestedPostApproved),
        suggested_post_approval_failed => SuggestedPostApprovalFailed(SuggestedPostApprovalFailed),
        suggested_post_declined => SuggestedPostDeclined(SuggestedPostDeclined),
        suggested_post_paid => SuggestedPostPaid(SuggestedPostPaid),
        suggested_post_refunded => SuggestedPostRefunded(SuggestedPostRefunded),
        video_chat_scheduled => VideoChatScheduled(VideoChatScheduled),
        video_chat_started => VideoChatStarted(VideoChatStarted),
        video_chat_ended => VideoChatEnded(VideoChatEnded),
        video_chat_participants_invited => VideoChatParticipantsInvited(VideoChatParticipantsInvited),
        web_app_data => WebAppData(WebAppData),
    }
}

impl MessageKind {
    pub fn caption(&self) -> Option<&Caption> {
        match self {
            Self::Animation(m) => Some(&m.caption),
            Self::Audio(m) => Some(&m.caption),
            Self::Document(m) => Some(&m.caption),
            Self::PaidMedia(m) => Some(&m.caption),
            Self::Photo(m) => Some(&m.caption),
            Self::Video(m) => Some(&m.caption),
            Self::Voice(m) => Some(&m.caption),
            _ => None,
        }
    }

    pub fn is_service(&self) -> bool {
        self.common().is_none()
    }
}

impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let Some(key) = shape::first_key(&map, Self::KEYS) else {
            return Err(D::Error::custom(format!(
                "message has no known content field; found {}",
                shape::list_keys(&map)
            )));
        };
        Self::from_map(key, map).map_err(|e| shape::variant_error("message", key, e))
    }
}
