use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::gift::Gift;
use crate::media::PaidMedia;
use crate::user::User;

/// A portion of the price for goods or services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    /// In the smallest units of the currency.
    pub amount: i64,
}

/// Basic information about an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    /// ISO 4217 code, or `XTR` for Telegram Stars.
    pub currency: String,
    /// In the smallest units of the currency.
    pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

impl ShippingOption {
    pub fn total(&self) -> i64 {
        self.prices.iter().map(|p| p.amount).sum()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    /// Subscriptions only.
    pub subscription_expiration_date: Option<i64>,
    pub is_recurring: Option<bool>,
    pub is_first_recurring: Option<bool>,
    pub shipping_option_id: Option<String>,
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

/// Refunds are only issued in Telegram Stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarsCurrency {
    #[serde(rename = "XTR")]
    Xtr,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundedPayment {
    pub currency: StarsCurrency,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub shipping_option_id: Option<String>,
    pub order_info: Option<OrderInfo>,
}

/// A user bought paid media with a non-empty payload sent by the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaPurchased {
    pub from: User,
    pub paid_media_payload: String,
}

/// State of a revenue withdrawal, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevenueWithdrawalState {
    Pending,
    Succeeded {
        date: i64,
        /// Where the transaction can be viewed.
        url: String,
    },
    Failed,
}

/// The affiliate that received a commission.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateInfo {
    pub affiliate_user: Option<User>,
    pub affiliate_chat: Option<Chat>,
    pub commission_per_mille: i64,
    /// Stars received, possibly negative for refunds.
    pub amount: i64,
    pub nanostar_amount: Option<i64>,
}

/// The other side of a Star transaction, discriminated by `type`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionPartner {
    User(TransactionPartnerUser),
    Chat {
        chat: Chat,
        gift: Option<Gift>,
    },
    AffiliateProgram {
        sponsor_user: Option<User>,
        commission_per_mille: i64,
    },
    Fragment {
        withdrawal_state: Option<RevenueWithdrawalState>,
    },
    TelegramAds,
    /// Paid broadcasts.
    TelegramApi {
        request_count: i64,
    },
    Other,
}

impl TransactionPartner {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Chat { .. } => "chat",
            Self::AffiliateProgram { .. } => "affiliate_program",
            Self::Fragment { .. } => "fragment",
            Self::TelegramAds => "telegram_ads",
            Self::TelegramApi { .. } => "telegram_api",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerUser {
    pub user: User,
    #[serde(flatten)]
    pub transaction: UserTransaction,
}

/// What a user paid for, discriminated by `transaction_type`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "transaction_type", rename_all = "snake_case")]
pub enum UserTransaction {
    InvoicePayment {
        affiliate: Option<AffiliateInfo>,
        invoice_payload: Option<String>,
        /// Seconds.
        subscription_period: Option<i64>,
    },
    PaidMediaPayment {
        affiliate: Option<AffiliateInfo>,
        paid_media: Option<Vec<PaidMedia>>,
        paid_media_payload: Option<String>,
    },
    GiftPurchase {
        gift: Option<Gift>,
    },
    PremiumPurchase {
        /// Months.
        premium_subscription_duration: Option<i64>,
    },
    BusinessAccountTransfer,
}

impl UserTransaction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvoicePayment { .. } => "invoice_payment",
            Self::PaidMediaPayment { .. } => "paid_media_payment",
            Self::GiftPurchase { .. } => "gift_purchase",
            Self::PremiumPurchase { .. } => "premium_purchase",
            Self::BusinessAccountTransfer => "business_account_transfer",
        }
    }
}

/// A Telegram Star transaction. Incoming ones have `source`; outgoing ones have `receiver`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarTransaction {
    pub id: String,
    pub amount: i64,
    pub nanostar_amount: Option<i64>,
    pub date: i64,
    pub source: Option<TransactionPartner>,
    pub receiver: Option<TransactionPartner>,
}

impl StarTransaction {
    pub fn is_incoming(&self) -> bool {
        self.source.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarTransactions {
    pub transactions: Vec<StarTransaction>,
}
