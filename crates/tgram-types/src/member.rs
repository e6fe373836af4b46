use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::{Chat, ChatInviteLink};
use crate::user::User;

/// Rights of an administrator in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    /// Implied by any other administrator privilege.
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,
    /// Channels only.
    pub can_post_messages: bool,
    /// Channels only.
    pub can_edit_messages: bool,
    /// Groups and supergroups only.
    pub can_pin_messages: bool,
    /// Supergroups only.
    pub can_manage_topics: bool,
    /// Channels only.
    pub can_manage_direct_messages: bool,
}

/// One member of a chat, discriminated by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

/// Owns the chat and has all administrator privileges.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    pub custom_title: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    /// The bot may edit this administrator's privileges.
    pub can_be_edited: bool,
    #[serde(flatten)]
    pub rights: ChatAdministratorRights,
    pub custom_title: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// When the user's subscription expires.
    pub until_date: Option<i64>,
}

/// Under restrictions in the chat. Supergroups only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// 0 means restricted forever.
    pub until_date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

/// Banned; cannot return to the chat or view its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// 0 means banned forever.
    pub until_date: i64,
}

impl ChatMember {
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m) => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m) => &m.user,
            Self::Restricted(m) => &m.user,
            Self::Left(m) => &m.user,
            Self::Banned(m) => &m.user,
        }
    }

    /// The wire value of the `status` field.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Owner(_) => "creator",
            Self::Administrator(_) => "administrator",
            Self::Member(_) => "member",
            Self::Restricted(_) => "restricted",
            Self::Left(_) => "left",
            Self::Banned(_) => "kicked",
        }
    }

    /// Whether the user is currently in the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(m) => m.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Owner(_) | Self::Administrator(_))
    }
}

/// A change in the status of a chat member.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    /// Performer of the action.
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    /// Joining by invite link only.
    pub invite_link: Option<ChatInviteLink>,
    pub via_join_request: Option<bool>,
    pub via_chat_folder_invite_link: Option<bool>,
}

impl ChatMemberUpdated {
    /// The member went from absent to present.
    pub fn joined(&self) -> bool {
        !self.old_chat_member.is_present() && self.new_chat_member.is_present()
    }

    /// The member went from present to absent.
    pub fn left(&self) -> bool {
        self.old_chat_member.is_present() && !self.new_chat_member.is_present()
    }
}
