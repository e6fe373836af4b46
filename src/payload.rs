//! Reading input files into updates.

use std::io::Read;
use std::path::Path;

use serde::de::Error as _;
use serde_json::Value;
use tgram_core::config::PayloadShape;
use tgram_core::{Result, TgramError};
use tgram_types::{ApiResponse, Update};

/// Display name for input read from stdin.
pub const STDIN: &str = "<stdin>";

/// Read a file, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| TgramError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| TgramError::Io {
                    path: STDIN.into(),
                    source,
                })?;
            Ok((STDIN.to_string(), text))
        }
    }
}

/// Guess the payload shape from the top-level JSON value.
pub fn detect(value: &Value) -> Option<PayloadShape> {
    match value {
        Value::Array(_) => Some(PayloadShape::Updates),
        Value::Object(map) if map.contains_key("ok") => Some(PayloadShape::Response),
        Value::Object(map) if map.contains_key("update_id") => Some(PayloadShape::Update),
        _ => None,
    }
}

/// Decode `text` into updates according to `shape`.
pub fn decode(shape: PayloadShape, origin: &str, text: &str) -> Result<Vec<Update>> {
    let decode_err = |source: serde_json::Error| TgramError::Decode {
        origin: origin.to_string(),
        source,
    };
    let value: Value = serde_json::from_str(text).map_err(decode_err)?;
    let shape = match shape {
        PayloadShape::Auto => detect(&value).ok_or_else(|| {
            decode_err(serde_json::Error::custom(
                "expected an update, an array of updates or an API response",
            ))
        })?,
        pinned => pinned,
    };
    tracing::debug!(origin, ?shape, "decoding payload");

    match shape {
        PayloadShape::Update => Ok(vec![serde_json::from_value(value).map_err(decode_err)?]),
        PayloadShape::Updates | PayloadShape::Auto => serde_json::from_value(value).map_err(decode_err),
        PayloadShape::Response => {
            let response: ApiResponse<Vec<Update>> =
                serde_json::from_value(value).map_err(decode_err)?;
            Ok(response.into_result()?)
        }
    }
}
