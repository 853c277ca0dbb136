mod coerce;
mod compare;


use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// re-exports
pub use coerce::{CoercionError, coerce};
pub use compare::{canonical_cmp, strict_order_cmp};

///
/// Value
///
/// Runtime value read from a record field or coerced from a raw operand.
///
/// Null → the field's value is `Option::None`.
/// List → operand transport for membership operators; never read from a field.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(DateTime<Utc>),
    Uint(u64),
}

impl Value {
    /// Stable rank used for cross-variant ordering.
    ///
    /// `Null` ranks first so absent values group at the front of an ascending
    /// sort. Rank order is part of deterministic sort behavior and must
    /// remain fixed.
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Float(_) => 4,
            Self::Text(_) => 5,
            Self::Timestamp(_) => 6,
            Self::List(_) => 7,
        }
    }

    /// Render a scalar value to the text form membership operators compare
    /// against. `Null` and `List` have no text form.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.clone()),
            Self::Timestamp(value) => Some(value.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::Uint(value) => Some(value.to_string()),
            Self::List(_) | Self::Null => None,
        }
    }

    /// Substring containment over two text values.
    #[must_use]
    pub fn text_contains(&self, needle: &Self) -> Option<bool> {
        match (self, needle) {
            (Self::Text(haystack), Self::Text(needle)) => Some(haystack.contains(needle.as_str())),
            _ => None,
        }
    }

    /// Prefix match over two text values.
    #[must_use]
    pub fn text_starts_with(&self, needle: &Self) -> Option<bool> {
        match (self, needle) {
            (Self::Text(haystack), Self::Text(needle)) => {
                Some(haystack.starts_with(needle.as_str()))
            }
            _ => None,
        }
    }

    /// Suffix match over two text values.
    #[must_use]
    pub fn text_ends_with(&self, needle: &Self) -> Option<bool> {
        match (self, needle) {
            (Self::Text(haystack), Self::Text(needle)) => Some(haystack.ends_with(needle.as_str())),
            _ => None,
        }
    }
}
