//! Decoding for unions that carry no tag field and are told apart by which
//! key is present.

use serde::de;
use serde_json::{Map, Value};

/// Declares an enum whose variants are each keyed by one JSON field.
///
/// Serializing writes `{key: value}`; the generated `from_entry` builds a
/// variant from a key and its value. Each user writes its own `Deserialize`
/// on top, choosing between [`exclusive_key`] and [`first_key`].
macro_rules! keyed_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $key:literal => $variant:ident($ty:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant($ty), )+
        }

        impl $name {
            /// Every key, in decoding precedence order.
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// The JSON field this variant is stored under.
            pub fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $key, )+
                }
            }

            fn from_entry(key: &str, value: serde_json::Value) -> Result<Self, serde_json::Error> {
                match key {
                    $( $key => serde_json::from_value(value).map(Self::$variant), )+
                    other => Err(<serde_json::Error as serde::de::Error>::unknown_field(other, Self::KEYS)),
                }
            }
        }
    };
}

pub(crate) use keyed_union;

/// The first of `keys` present in `map`.
pub(crate) fn first_key(map: &Map<String, Value>, keys: &[&'static str]) -> Option<&'static str> {
    keys.iter().copied().find(|k| map.contains_key(*k))
}

/// The single key of `keys` present in `map`. None or several is an error.
pub(crate) fn exclusive_key<E: de::Error>(
    what: &str,
    map: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<&'static str, E> {
    let present: Vec<&'static str> = keys.iter().copied().filter(|k| map.contains_key(*k)).collect();
    match present.as_slice() {
        [key] => Ok(*key),
        [] => Err(E::custom(format!(
            "{what} has none of the expected fields; found {}",
            list_keys(map)
        ))),
        several => Err(E::custom(format!(
            "{what} has several exclusive fields: {}",
            several.join(", ")
        ))),
    }
}

/// Keys present in `map`, for error messages.
pub(crate) fn list_keys(map: &Map<String, Value>) -> String {
    if map.is_empty() {
        return "no fields".to_string();
    }
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    format!("[{}]", keys.join(", "))
}

/// Rewraps a variant decode failure so it names the selected key.
pub(crate) fn variant_error<E: de::Error>(what: &str, key: &str, err: serde_json::Error) -> E {
    E::custom(format!("invalid `{key}` {what}: {err}"))
}

/// Removes `key` from `map` and returns its value; `null` when absent.
pub(crate) fn take(map: &mut Map<String, Value>, key: &str) -> Value {
    map.remove(key).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_first_key_follows_precedence() {
        let map = object(json!({"location": {}, "venue": {}}));
        assert_eq!(first_key(&map, &["venue", "location"]), Some("venue"));
        assert_eq!(first_key(&map, &["text"]), None);
    }

    #[test]
    fn test_exclusive_key() {
        let keys = ["message", "poll"];
        let one = object(json!({"update_id": 1, "poll": {}}));
        assert_eq!(exclusive_key::<serde_json::Error>("update", &one, &keys).unwrap(), "poll");

        let none = object(json!({"update_id": 1}));
        let err = exclusive_key::<serde_json::Error>("update", &none, &keys).unwrap_err();
        assert!(err.to_string().contains("found [update_id]"));

        let both = object(json!({"message": {}, "poll": {}}));
        let err = exclusive_key::<serde_json::Error>("update", &both, &keys).unwrap_err();
        assert!(err.to_string().contains("several exclusive fields: message, poll"));
    }

    #[test]
    fn test_list_keys_empty() {
        assert_eq!(list_keys(&Map::new()), "no fields");
    }
}
