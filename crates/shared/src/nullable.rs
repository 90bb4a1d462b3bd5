//! Deserialization helpers for partial updates.
//!
//! A PATCH body distinguishes three states for a nullable column:
//! the key is absent (keep), the key is `null` (clear), or the key carries a
//! value (set). Fields use `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "shared::nullable::deserialize")]`.

use serde::{Deserialize, Deserializer};

/// Deserializes a present key into `Some(inner)`, where `inner` is `None` for
/// an explicit `null`. Absent keys fall back to `Default` (`None`).
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        image: Option<Option<String>>,
    }

    #[test]
    fn test_absent_key_keeps_value() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.image, None);
    }

    #[test]
    fn test_null_clears_value() {
        let patch: Patch = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert_eq!(patch.image, Some(None));
    }

    #[test]
    fn test_value_sets_value() {
        let patch: Patch = serde_json::from_str(r#"{"image": "news/a.jpg"}"#).unwrap();
        assert_eq!(patch.image, Some(Some("news/a.jpg".to_string())));
    }
}
