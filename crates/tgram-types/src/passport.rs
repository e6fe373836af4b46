use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Telegram Passport data shared with the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    /// Needed to decrypt `data`.
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport. Files are in JPEG format and at most 10MB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    pub file_date: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptedPassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

impl EncryptedPassportElementType {
    /// Identity documents carry a front side and a selfie.
    pub fn is_identity_document(&self) -> bool {
        matches!(
            self,
            Self::Passport | Self::DriverLicense | Self::IdentityCard | Self::InternalPassport
        )
    }
}

/// Documents or other Telegram Passport elements shared with the bot.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    /// Base64 encrypted data; personal details, identity documents and addresses.
    pub data: Option<String>,
    /// `phone_number` only.
    pub phone_number: Option<String>,
    /// `email` only.
    pub email: Option<String>,
    pub files: Option<Vec<PassportFile>>,
    pub front_side: Option<PassportFile>,
    pub reverse_side: Option<PassportFile>,
    pub selfie: Option<PassportFile>,
    pub translation: Option<Vec<PassportFile>>,
    /// Base64 element hash.
    pub hash: String,
}

/// Decryption data, encrypted with the bot's public RSA key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passport_data() {
        let raw = json!({
            "data": [
                {"type": "phone_number", "phone_number": "+15550123", "hash": "aGFzaA=="},
                {
                    "type": "passport",
                    "data": "ZW5j",
                    "front_side": {"file_id": "f", "file_unique_id": "u", "file_size": 1024, "file_date": 1700000000},
                    "hash": "aGFzaDI="
                }
            ],
            "credentials": {"data": "ZA==", "hash": "aA==", "secret": "cw=="}
        });
        let passport: PassportData = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(passport.data[0].kind, EncryptedPassportElementType::PhoneNumber);
        assert!(passport.data[1].kind.is_identity_document());
        assert_eq!(serde_json::to_value(&passport).unwrap(), raw);
    }

    #[test]
    fn test_unknown_element_type_fails() {
        let raw = json!({"type": "visa", "hash": "h"});
        assert!(serde_json::from_value::<EncryptedPassportElement>(raw).is_err());
    }
}
