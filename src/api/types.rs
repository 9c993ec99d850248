//! Payload records returned by the Dog API.
//!
//! Only the fields the gallery relies on are named. Everything else the API
//! sends is kept in `extra` so records serialize back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a breed or image.
///
/// The API uses integers for breeds and short strings for images. The
/// original representation is kept so it serializes back the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

/// A dog breed as listed by `GET /breeds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: Identifier,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Breed {
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// String-valued opaque field, e.g. `temperament` or `life_span`.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// An image as returned by `GET /images/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogImage {
    pub id: Identifier,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DogImage {
    pub fn new(id: impl Into<Identifier>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }

    /// Pixel dimensions when the API reported them.
    pub fn dimensions(&self) -> Option<(u64, u64)> {
        let width = self.extra.get("width").and_then(Value::as_u64)?;
        let height = self.extra.get("height").and_then(Value::as_u64)?;
        Some((width, height))
    }

    /// Name of the first breed attached to the image, if any.
    pub fn breed_name(&self) -> Option<&str> {
        self.extra
            .get("breeds")
            .and_then(Value::as_array)
            .and_then(|breeds| breeds.first())
            .and_then(|breed| breed.get("name"))
            .and_then(Value::as_str)
    }
}
