use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The object every Bot API method returns.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    /// Human-readable explanation, mostly for failures.
    pub description: Option<String>,
    /// Subject to change.
    pub error_code: Option<i64>,
    pub parameters: Option<ResponseParameters>,
}

/// Hints for handling a failed request automatically.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating a rate-limited request.
    pub retry_after: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("api error {}: {description}", code.map_or_else(|| "without code".to_string(), |c| c.to_string()))]
    Failed {
        code: Option<i64>,
        description: String,
        parameters: Option<ResponseParameters>,
    },
    #[error("response is ok but carries no result")]
    MissingResult,
}

impl ApiError {
    pub fn retry_after(&self) -> Option<i64> {
        match self {
            Self::Failed { parameters, .. } => parameters.and_then(|p| p.retry_after),
            Self::MissingResult => None,
        }
    }

    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            Self::Failed { parameters, .. } => parameters.and_then(|p| p.migrate_to_chat_id),
            Self::MissingResult => None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.ok {
            return Err(ApiError::Failed {
                code: self.error_code,
                description: self.description.unwrap_or_default(),
                parameters: self.parameters,
            });
        }
        self.result.ok_or(ApiError::MissingResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use serde_json::json;

    #[test]
    fn test_ok_response() {
        let raw = r#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"Helper"}}"#;
        let response: ApiResponse<User> = serde_json::from_str(raw).unwrap();
        let user = response.into_result().unwrap();
        assert_eq!(user.id, 42);
    }

    #[test]
    fn test_failed_response_keeps_parameters() {
        let raw = r#"{
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 14",
            "parameters": {"retry_after": 14}
        }"#;
        let response: ApiResponse<bool> = serde_json::from_str(raw).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.retry_after(), Some(14));
        assert_eq!(err.migrate_to_chat_id(), None);
        assert_eq!(err.to_string(), "api error 429: Too Many Requests: retry after 14");
    }

    #[test]
    fn test_migration_hint() {
        let response: ApiResponse<bool> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: group chat was upgraded to a supergroup chat",
            "parameters": {"migrate_to_chat_id": -1001234567890_i64}
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.migrate_to_chat_id(), Some(-1001234567890));
    }

    #[test]
    fn test_ok_without_result() {
        let response: ApiResponse<bool> = serde_json::from_value(json!({"ok": true})).unwrap();
        assert!(matches!(response.into_result(), Err(ApiError::MissingResult)));
    }

    #[test]
    fn test_response_round_trip() {
        let raw = json!({"ok": true, "result": [1, 2], "description": "fine"});
        let response: ApiResponse<Vec<i64>> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }
}
