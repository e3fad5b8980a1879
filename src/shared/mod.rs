//! Shared newtypes used across all modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as
//! plain JSON strings, so they can be embedded directly in wire types.

pub mod price;

pub use price::{from_micro, to_micro, PriceError, MICRO_SCALE};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── IsccCode ────────────────────────────────────────────────────────────────

/// A composite ISCC identifier, e.g. `"CCDFPFc87MhdT-CTHKoHHjhwrqqn-CDC4cyThebBU4-CR6vjW94bB5c9"`.
///
/// Four ordered sub-codes (meta, content, data, instance) joined by `-`.
/// Generation is delegated to the ISCC service; this type only carries and
/// splits the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsccCode(String);

/// The four sub-codes of an [`IsccCode`], in order.
///
/// Positions missing from a malformed code are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IsccComponents {
    pub meta_id: String,
    pub content_id: String,
    pub data_id: String,
    pub instance_id: String,
}

impl IsccCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the four ordered sub-codes.
    pub fn components(&self) -> IsccComponents {
        let mut parts = self.0.split('-');
        let mut next = || parts.next().unwrap_or_default().to_string();
        IsccComponents {
            meta_id: next(),
            content_id: next(),
            data_id: next(),
            instance_id: next(),
        }
    }

    /// The content sub-code, used as the registry lookup key.
    pub fn content_id(&self) -> String {
        self.components().content_id
    }
}

impl std::fmt::Display for IsccCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IsccCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for IsccCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for IsccCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IsccCode(s.to_string()))
    }
}

impl Serialize for IsccCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IsccCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(IsccCode(s))
    }
}

// ─── AccAddress ──────────────────────────────────────────────────────────────

/// A bech32 account or contract address stored as a string.
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress(String);

impl AccAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AccAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AccAddress(s))
    }
}
