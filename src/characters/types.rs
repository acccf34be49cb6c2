//! Character DTOs
//!
//! The remote API serves characters with numeric ids while the presentation
//! layer routes with string path parameters. `CharacterId` normalizes both to
//! a string so lookups behave the same regardless of the caller's type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a character, compared as a string
///
/// Deserializes from either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is no usable id (empty or whitespace-only)
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for CharacterId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for CharacterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CharacterId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = CharacterId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or numeric character id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CharacterId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(CharacterId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CharacterId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One character record as served by the remote API
///
/// Only the id is required; every other attribute is a passthrough field.
/// Attributes the crate does not model are retained in `extra` so records
/// survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ki: Option<String>,

    #[serde(rename = "maxKi", default, skip_serializing_if = "Option::is_none")]
    pub max_ki: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Attributes not modeled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    /// Minimal record with only an id set
    pub fn with_id(id: impl Into<CharacterId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            race: None,
            gender: None,
            ki: None,
            max_ki: None,
            affiliation: None,
            description: None,
            image: None,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_deserializes_from_string_and_number() {
        let from_str: CharacterId = serde_json::from_value(json!("2")).unwrap();
        let from_num: CharacterId = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(from_str, from_num);
    }

    #[test]
    fn id_conversions_normalize_to_string() {
        assert_eq!(CharacterId::from(2u64), CharacterId::from("2"));
        assert!(CharacterId::from("  ").is_empty());
        assert!(!CharacterId::from("1").is_empty());
    }

    #[test]
    fn character_requires_only_an_id() {
        let character: Character = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(character.id, CharacterId::from("1"));
        assert!(character.name.is_none());

        let missing_id = serde_json::from_value::<Character>(json!({ "name": "Goku" }));
        assert!(missing_id.is_err());
    }

    #[test]
    fn unmodeled_fields_are_retained() {
        let character: Character = serde_json::from_value(json!({
            "id": "1",
            "name": "Goku",
            "maxKi": "90 Septillion",
            "originPlanet": "Vegeta"
        }))
        .unwrap();

        assert_eq!(character.max_ki.as_deref(), Some("90 Septillion"));
        assert_eq!(character.extra["originPlanet"], json!("Vegeta"));

        let back = serde_json::to_value(&character).unwrap();
        assert_eq!(back["originPlanet"], json!("Vegeta"));
    }
}
