//! Identifier coercion
//!
//! The platform sends identifiers as JSON numbers in some payloads and as
//! strings in others. Identity comparison goes through [`IdToken`], the
//! canonical string form, so `7`, `7.0` and `"7"` all compare equal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier exactly as it arrived from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Canonical string form of an identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdToken(String);

impl IdToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for IdToken {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for IdToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl RawId {
    /// Canonical token, or `None` when the value cannot identify anything
    pub fn token(&self) -> Option<IdToken> {
        match self {
            RawId::Int(n) => Some(IdToken(n.to_string())),
            RawId::Unsigned(n) => Some(IdToken(n.to_string())),
            RawId::Float(f) if !f.is_finite() => None,
            RawId::Float(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
                Some(IdToken((*f as i64).to_string()))
            }
            RawId::Float(f) => Some(IdToken(f.to_string())),
            RawId::Text(s) if s.is_empty() => None,
            RawId::Text(s) => Some(IdToken(s.clone())),
            RawId::Other(_) => None,
        }
    }

    /// Two identifiers match only when both have a token and the tokens agree
    pub fn same_as(&self, other: &RawId) -> bool {
        match (self.token(), other.token()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for RawId {
    /// A missing identifier; it has no token and never matches
    fn default() -> Self {
        RawId::Other(serde_json::Value::Null)
    }
}

impl From<i64> for RawId {
    fn from(value: i64) -> Self {
        RawId::Int(value)
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        RawId::Text(value.to_string())
    }
}

/// Token of an optional identifier
pub fn token_of(id: Option<&RawId>) -> Option<IdToken> {
    id.and_then(RawId::token)
}
