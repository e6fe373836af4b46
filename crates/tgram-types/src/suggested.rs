use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::gift::StarAmount;
use crate::message::Message;

/// `XTR` amounts are Stars (5-100000); `TON` amounts are nanotoncoins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPostPrice {
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedPostState {
    Pending,
    Approved,
    Declined,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostInfo {
    pub state: SuggestedPostState,
    /// Omitted for unpaid posts.
    pub price: Option<SuggestedPostPrice>,
    /// Omitted when the post can be published any time within 30 days.
    pub send_date: Option<i64>,
}

/// Parameters of a post suggested by the bot.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostParameters {
    pub price: Option<SuggestedPostPrice>,
    /// 300 seconds to 30 days in the future.
    pub send_date: Option<i64>,
}

// The embedded messages never carry `reply_to_message`.

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostApproved {
    pub suggested_post_message: Option<Box<Message>>,
    pub price: Option<SuggestedPostPrice>,
    pub send_date: i64,
}

/// Only caused by insufficient funds at approval time.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostApprovalFailed {
    pub suggested_post_message: Option<Box<Message>>,
    pub price: Option<SuggestedPostPrice>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostDeclined {
    pub suggested_post_message: Option<Box<Message>>,
    pub comment: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostPaid {
    pub suggested_post_message: Option<Box<Message>>,
    /// `XTR` or `TON`.
    pub currency: String,
    /// Nanotoncoins; TON payments only.
    pub amount: Option<i64>,
    /// Star payments only.
    pub star_amount: Option<StarAmount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedPostRefundReason {
    PostDeleted,
    PaymentRefunded,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPostRefunded {
    pub suggested_post_message: Option<Box<Message>>,
    pub reason: SuggestedPostRefundReason,
}
