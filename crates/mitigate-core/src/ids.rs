//! Citizen identifiers and store ID prefixes.
//!
//! Citizen identifiers reach the store in two shapes: the Citizens collection
//! keeps them as JSON integers, while every referencing collection stores the
//! string that was typed into a form. `CitizenId` accepts both and compares on
//! the normalized string form, so `7` and `"7"` name the same citizen.

use std::fmt;
use std::hash::{Hash, Hasher};

use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub const PREFIX_CITIZEN: &str = "ctz";
pub const PREFIX_VACCINATION: &str = "vac";
pub const PREFIX_COVID_CASE: &str = "cov";
pub const PREFIX_HOSPITAL: &str = "hsp";
pub const PREFIX_TESTING_CENTER: &str = "tst";
pub const PREFIX_AWARENESS_PROGRAM: &str = "awp";

/// A citizen identifier as stored: either a JSON integer or a JSON string.
///
/// Serialization keeps the stored representation. Equality and hashing use
/// [`CitizenId::key`].
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum CitizenId {
    Number(i64),
    Text(String),
}

impl CitizenId {
    /// The normalized string form used for every comparison.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Integer value of the identifier, if it has one.
    ///
    /// Text identifiers are trimmed before parsing.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether the identifier is already stored as a JSON integer.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl PartialEq for CitizenId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for CitizenId {}

impl Hash for CitizenId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for CitizenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CitizenId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CitizenId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CitizenId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<'de> Deserialize<'de> for CitizenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CitizenIdVisitor)
    }
}

struct CitizenIdVisitor;

impl Visitor<'_> for CitizenIdVisitor {
    type Value = CitizenId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string citizen identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(CitizenId::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(CitizenId::Number)
            .or_else(|_| Ok(CitizenId::Text(v.to_string())))
    }

    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let truncated = v.trunc();
        if truncated == v && truncated.abs() < 9.0e15 {
            Ok(CitizenId::Number(truncated as i64))
        } else {
            Ok(CitizenId::Text(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(CitizenId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(CitizenId::Text(v))
    }
}
