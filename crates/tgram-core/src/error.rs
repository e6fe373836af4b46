use std::path::PathBuf;

use tgram_types::{ApiError, Violation};

#[derive(Debug, thiserror::Error)]
pub enum TgramError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode error ({origin}): {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode error ({origin}): {source}")]
    Encode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("update {update_id} breaks {}", join(violations))]
    Envelope {
        update_id: i64,
        violations: Vec<Violation>,
    },

    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TgramError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tgram_types::{Rule, UpdateType};

    #[test]
    fn test_envelope_error_lists_violations() {
        let err = TgramError::Envelope {
            update_id: 9,
            violations: vec![
                Violation { update_type: UpdateType::Message, rule: Rule::SenderMissing },
                Violation { update_type: UpdateType::Message, rule: Rule::EditDateUnexpected },
            ],
        };
        assert_eq!(
            err.to_string(),
            "update 9 breaks message: `from` must be present; message: new messages must not have `edit_date`"
        );
    }

    #[test]
    fn test_api_error_converts() {
        let err: TgramError = ApiError::MissingResult.into();
        assert!(matches!(err, TgramError::Api(ApiError::MissingResult)));
    }

    #[test]
    fn test_encode_error_is_not_a_decode_error() {
        let source = <serde_json::Error as serde::ser::Error>::custom("key must be a string");
        let err = TgramError::Encode { origin: "dump.json".to_string(), source };
        assert_eq!(err.to_string(), "encode error (dump.json): key must be a string");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = TgramError::Io {
            path: PathBuf::from("updates.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "io error (updates.json): missing");
    }
}
