//! Where a message may appear in an update, and what it must carry there.

use crate::message::Message;
use crate::update::{Update, UpdateType};

/// A documented constraint the message in an update does not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rule {
    #[error("chat must be a channel")]
    ChannelChatExpected,
    #[error("chat must not be a channel")]
    NonChannelChatExpected,
    #[error("`from` must be present")]
    SenderMissing,
    #[error("`from` must be absent in channel posts")]
    SenderUnexpected,
    #[error("new messages must not have `edit_date`")]
    EditDateUnexpected,
    #[error("edited messages must have `edit_date`")]
    EditDateMissing,
    #[error("`business_connection_id` must be present and non-empty")]
    BusinessConnectionMissing,
    #[error("service messages cannot be edited")]
    ServiceMessageEdited,
    #[error("`author_signature` is only set in channel posts")]
    AuthorSignatureUnexpected,
    #[error("business updates carry only common messages")]
    BusinessServiceMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{update_type}: {rule}")]
pub struct Violation {
    pub update_type: UpdateType,
    pub rule: Rule,
}

impl Update {
    /// Every envelope rule the carried message breaks. Updates that do not
    /// carry a message always pass.
    pub fn check_envelope(&self) -> Vec<Violation> {
        let update_type = self.update_type();
        let Some(message) = self.message() else {
            return Vec::new();
        };
        check_message(update_type, message)
            .into_iter()
            .map(|rule| Violation { update_type, rule })
            .collect()
    }
}

fn check_message(update_type: UpdateType, message: &Message) -> Vec<Rule> {
    let mut rules = Vec::new();

    if update_type.is_channel_post() {
        if !message.chat.is_channel() {
            rules.push(Rule::ChannelChatExpected);
        }
        if message.from.is_some() {
            rules.push(Rule::SenderUnexpected);
        }
    } else {
        if message.chat.is_channel() {
            rules.push(Rule::NonChannelChatExpected);
        }
        if message.from.is_none() {
            rules.push(Rule::SenderMissing);
        }
        if message.common().is_some_and(|c| c.author_signature.is_some()) {
            rules.push(Rule::AuthorSignatureUnexpected);
        }
    }

    if update_type.is_edit() {
        match message.common() {
            None => rules.push(Rule::ServiceMessageEdited),
            Some(common) if common.edit_date.is_none() => rules.push(Rule::EditDateMissing),
            Some(_) => {}
        }
    } else if message.edit_date().is_some() {
        rules.push(Rule::EditDateUnexpected);
    }

    if update_type.is_business() {
        match message.common() {
            // Edited service messages are already reported above.
            None if !update_type.is_edit() => rules.push(Rule::BusinessServiceMessage),
            None => {}
            Some(common) if common.business_connection_id.as_deref().map_or(true, str::is_empty) => {
                rules.push(Rule::BusinessConnectionMissing);
            }
            Some(_) => {}
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn user() -> Value {
        json!({"id": 7, "is_bot": false, "first_name": "Kit"})
    }

    fn channel() -> Value {
        json!({"id": -1001, "type": "channel", "title": "News"})
    }

    fn group() -> Value {
        json!({"id": -55, "type": "group", "title": "Team"})
    }

    fn update(key: &str, message: Value) -> Update {
        let mut raw = json!({"update_id": 1});
        raw[key] = message;
        serde_json::from_value(raw).unwrap()
    }

    fn rules(update: &Update) -> Vec<Rule> {
        update.check_envelope().into_iter().map(|v| v.rule).collect()
    }

    #[test]
    fn test_valid_message_passes() {
        let u = update("message", json!({"message_id": 1, "date": 5, "chat": group(), "from": user(), "text": "hi"}));
        assert!(u.check_envelope().is_empty());
    }

    #[test]
    fn test_valid_channel_post_passes() {
        let u = update("channel_post", json!({"message_id": 1, "date": 5, "chat": channel(), "text": "news"}));
        assert!(u.check_envelope().is_empty());
    }

    #[test]
    fn test_channel_post_in_group_flagged() {
        let u = update(
            "channel_post",
            json!({"message_id": 1, "date": 5, "chat": group(), "from": user(), "text": "x"}),
        );
        assert_eq!(rules(&u), vec![Rule::ChannelChatExpected, Rule::SenderUnexpected]);
    }

    #[test]
    fn test_message_in_channel_flagged() {
        let u = update("message", json!({"message_id": 1, "date": 5, "chat": channel(), "text": "x"}));
        assert_eq!(rules(&u), vec![Rule::NonChannelChatExpected, Rule::SenderMissing]);
    }

    #[test]
    fn test_edit_date_rules() {
        let new = update(
            "message",
            json!({"message_id": 1, "date": 5, "edit_date": 6, "chat": group(), "from": user(), "text": "x"}),
        );
        assert_eq!(rules(&new), vec![Rule::EditDateUnexpected]);

        let edited = update(
            "edited_message",
            json!({"message_id": 1, "date": 5, "chat": group(), "from": user(), "text": "x"}),
        );
        assert_eq!(rules(&edited), vec![Rule::EditDateMissing]);
    }

    #[test]
    fn test_edited_service_message_flagged() {
        let u = update(
            "edited_message",
            json!({"message_id": 1, "date": 5, "chat": group(), "from": user(), "group_chat_created": true}),
        );
        assert_eq!(rules(&u), vec![Rule::ServiceMessageEdited]);
    }

    #[test]
    fn test_business_connection_required() {
        let private = json!({"id": 7, "type": "private", "first_name": "Kit"});
        let missing = update(
            "business_message",
            json!({"message_id": 1, "date": 5, "chat": private.clone(), "from": user(), "text": "x"}),
        );
        assert_eq!(rules(&missing), vec![Rule::BusinessConnectionMissing]);

        let empty = update(
            "business_message",
            json!({"message_id": 1, "date": 5, "chat": private.clone(), "from": user(), "text": "x", "business_connection_id": ""}),
        );
        assert_eq!(rules(&empty), vec![Rule::BusinessConnectionMissing]);

        let ok = update(
            "business_message",
            json!({"message_id": 1, "date": 5, "chat": private, "from": user(), "text": "x", "business_connection_id": "bc"}),
        );
        assert!(ok.check_envelope().is_empty());
    }

    #[test]
    fn test_author_signature_outside_channel_flagged() {
        let u = update(
            "message",
            json!({"message_id": 1, "date": 5, "chat": group(), "from": user(), "text": "x", "author_signature": "x"}),
        );
        assert_eq!(rules(&u), vec![Rule::AuthorSignatureUnexpected]);

        let post = update(
            "channel_post",
            json!({"message_id": 1, "date": 5, "chat": channel(), "text": "x", "author_signature": "Editor"}),
        );
        assert!(post.check_envelope().is_empty());
    }

    #[test]
    fn test_business_service_message_flagged() {
        let private = json!({"id": 7, "type": "private", "first_name": "Kit"});
        let new = update(
            "business_message",
            json!({"message_id": 1, "date": 5, "chat": private.clone(), "from": user(), "delete_chat_photo": true}),
        );
        assert_eq!(rules(&new), vec![Rule::BusinessServiceMessage]);

        let edited = update(
            "edited_business_message",
            json!({"message_id": 1, "date": 5, "chat": private, "from": user(), "delete_chat_photo": true}),
        );
        assert_eq!(rules(&edited), vec![Rule::ServiceMessageEdited]);
    }

    #[test]
    fn test_non_message_updates_pass() {
        let u: Update = serde_json::from_value(json!({
            "update_id": 3,
            "poll_answer": {"poll_id": "p", "user": user(), "option_ids": []}
        }))
        .unwrap();
        assert!(u.check_envelope().is_empty());
    }

    #[test]
    fn test_violation_display() {
        let v = Violation { update_type: UpdateType::ChannelPost, rule: Rule::SenderUnexpected };
        assert_eq!(v.to_string(), "channel_post: `from` must be absent in channel posts");
    }
}
