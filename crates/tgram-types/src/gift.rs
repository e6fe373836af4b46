use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::chat::Chat;
use crate::entity::MessageEntity;
use crate::media::Sticker;
use crate::user::User;

/// A gift that can be sent by the bot.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub sticker: Sticker,
    pub star_count: i64,
    pub upgrade_star_count: Option<i64>,
    /// Limited gifts only.
    pub total_count: Option<i64>,
    /// Limited gifts only.
    pub remaining_count: Option<i64>,
    pub publisher_chat: Option<Chat>,
}

impl Gift {
    pub fn is_limited(&self) -> bool {
        self.total_count.is_some()
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining_count == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gifts {
    pub gifts: Vec<Gift>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGiftModel {
    pub name: String,
    pub sticker: Sticker,
    /// Out of every 1000 upgraded gifts.
    pub rarity_per_mille: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGiftSymbol {
    pub name: String,
    pub sticker: Sticker,
    pub rarity_per_mille: i64,
}

/// RGB colors of a unique gift backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueGiftBackdropColors {
    pub center_color: i64,
    pub edge_color: i64,
    pub symbol_color: i64,
    pub text_color: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGiftBackdrop {
    pub name: String,
    pub colors: UniqueGiftBackdropColors,
    pub rarity_per_mille: i64,
}

/// A unique gift upgraded from a regular one.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGift {
    /// Name of the regular gift it was upgraded from.
    pub base_name: String,
    /// Usable in t.me/nft links and story areas.
    pub name: String,
    pub number: i64,
    pub model: UniqueGiftModel,
    pub symbol: UniqueGiftSymbol,
    pub backdrop: UniqueGiftBackdrop,
    pub publisher_chat: Option<Chat>,
}

/// A gift owned by a user or chat, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OwnedGift {
    Regular(OwnedGiftRegular),
    Unique(OwnedGiftUnique),
}

impl OwnedGift {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Regular(_) => "regular",
            Self::Unique(_) => "unique",
        }
    }

    pub fn send_date(&self) -> i64 {
        match self {
            Self::Regular(g) => g.send_date,
            Self::Unique(g) => g.send_date,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGiftRegular {
    pub gift: Gift,
    /// Business accounts only.
    pub owned_gift_id: Option<String>,
    pub sender_user: Option<User>,
    pub send_date: i64,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub is_private: Option<bool>,
    pub is_saved: Option<bool>,
    pub can_be_upgraded: Option<bool>,
    pub was_refunded: Option<bool>,
    /// Omitted if the gift cannot be converted to Stars.
    pub convert_star_count: Option<i64>,
    pub prepaid_upgrade_star_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGiftUnique {
    pub gift: UniqueGift,
    pub owned_gift_id: Option<String>,
    pub sender_user: Option<User>,
    pub send_date: i64,
    pub is_saved: Option<bool>,
    pub can_be_transferred: Option<bool>,
    /// Omitted if the bot cannot transfer the gift.
    pub transfer_star_count: Option<i64>,
    pub next_transfer_date: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGifts {
    pub total_count: i64,
    pub gifts: Vec<OwnedGift>,
    /// Empty when there are no more results.
    pub next_offset: Option<String>,
}

/// Gift types a user or chat accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedGiftTypes {
    pub unlimited_gifts: bool,
    pub limited_gifts: bool,
    pub unique_gifts: bool,
    pub premium_subscription: bool,
}

impl AcceptedGiftTypes {
    pub fn accepts_any(&self) -> bool {
        self.unlimited_gifts || self.limited_gifts || self.unique_gifts || self.premium_subscription
    }
}

/// An amount of Telegram Stars, possibly negative.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarAmount {
    pub amount: i64,
    /// Billionths of a Star, -999999999..=999999999.
    pub nanostar_amount: Option<i64>,
}

impl StarAmount {
    pub const NANOSTARS_PER_STAR: i64 = 1_000_000_000;

    /// Total in nanostars.
    pub fn as_nanostars(&self) -> i64 {
        self.amount * Self::NANOSTARS_PER_STAR + self.nanostar_amount.unwrap_or(0)
    }
}

/// Service message: a regular gift was sent or received.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftInfo {
    pub gift: Gift,
    pub owned_gift_id: Option<String>,
    pub convert_star_count: Option<i64>,
    pub prepaid_upgrade_star_count: Option<i64>,
    pub can_be_upgraded: Option<bool>,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueGiftOrigin {
    Upgrade,
    Transfer,
    Resale,
}

/// Service message: a unique gift was sent or received.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueGiftInfo {
    pub gift: UniqueGift,
    pub origin: UniqueGiftOrigin,
    /// Resale only.
    pub last_resale_star_count: Option<i64>,
    pub owned_gift_id: Option<String>,
    pub transfer_star_count: Option<i64>,
    pub next_transfer_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sticker() -> serde_json::Value {
        json!({
            "file_id": "CAAC",
            "file_unique_id": "AgAD",
            "type": "regular",
            "width": 512,
            "height": 512,
            "is_animated": false,
            "is_video": false
        })
    }

    fn unique_gift() -> serde_json::Value {
        json!({
            "base_name": "Plush Pepe",
            "name": "PlushPepe-7",
            "number": 7,
            "model": {"name": "Gold", "sticker": sticker(), "rarity_per_mille": 12},
            "symbol": {"name": "Star", "sticker": sticker(), "rarity_per_mille": 40},
            "backdrop": {
                "name": "Night",
                "colors": {"center_color": 1, "edge_color": 2, "symbol_color": 3, "text_color": 16777215},
                "rarity_per_mille": 15
            }
        })
    }

    #[test]
    fn test_owned_gift_variants() {
        let regular = json!({
            "type": "regular",
            "gift": {"id": "g1", "sticker": sticker(), "star_count": 15, "total_count": 100, "remaining_count": 0},
            "send_date": 1700000000,
            "text": "hi",
            "convert_star_count": 10
        });
        let gift: OwnedGift = serde_json::from_value(regular.clone()).unwrap();
        let OwnedGift::Regular(inner) = &gift else {
            panic!("expected regular gift");
        };
        assert!(inner.gift.is_limited());
        assert!(inner.gift.is_sold_out());
        assert_eq!(serde_json::to_value(&gift).unwrap(), regular);

        let unique = json!({"type": "unique", "gift": unique_gift(), "send_date": 1700000001, "can_be_transferred": true});
        let gift: OwnedGift = serde_json::from_value(unique.clone()).unwrap();
        assert_eq!(gift.kind(), "unique");
        assert_eq!(gift.send_date(), 1700000001);
        assert_eq!(serde_json::to_value(&gift).unwrap(), unique);
    }

    #[test]
    fn test_unknown_owned_gift_type_fails() {
        assert!(serde_json::from_value::<OwnedGift>(json!({"type": "premium", "send_date": 1})).is_err());
    }

    #[test]
    fn test_unique_gift_info_origin() {
        let info: UniqueGiftInfo = serde_json::from_value(json!({
            "gift": unique_gift(),
            "origin": "resale",
            "last_resale_star_count": 2500
        }))
        .unwrap();
        assert_eq!(info.origin, UniqueGiftOrigin::Resale);
        assert!(serde_json::from_value::<UniqueGiftOrigin>(json!("mint")).is_err());
    }

    #[test]
    fn test_star_amount_nanostars() {
        let amount: StarAmount =
            serde_json::from_value(json!({"amount": -2, "nanostar_amount": -500000000})).unwrap();
        assert_eq!(amount.as_nanostars(), -2_500_000_000);
        assert!(!AcceptedGiftTypes::default().accepts_any());
    }
}
