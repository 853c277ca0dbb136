//! Module: query::ops
//! Responsibility: the closed operator enumerations and their grammar tokens.
//! Does not own: operator evaluation semantics or spec validation.
//! Boundary: unknown tokens are rejected here, at parse time, never at eval time.

use derive_more::Display;
use std::str::FromStr;

///
/// CompareOp
///
/// The fixed comparison operator set. Tokens are case-sensitive and match
/// the wire grammar exactly.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CompareOp {
    #[display("==")]
    Eq,
    #[display("!=")]
    Ne,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display("like")]
    Like,
    #[display("not_like")]
    NotLike,
    #[display("starts_with")]
    StartsWith,
    #[display("not_starts_with")]
    NotStartsWith,
    #[display("ends_with")]
    EndsWith,
    #[display("not_ends_with")]
    NotEndsWith,
    #[display("is_empty")]
    IsEmpty,
    #[display("is_not_empty")]
    IsNotEmpty,
    #[display("in")]
    In,
    #[display("not_in")]
    NotIn,
}

impl CompareOp {
    /// Every valid token, for validation messages.
    pub const TOKENS: &'static [&'static str] = &[
        "==",
        "!=",
        ">",
        ">=",
        "<",
        "<=",
        "like",
        "not_like",
        "starts_with",
        "not_starts_with",
        "ends_with",
        "not_ends_with",
        "is_empty",
        "is_not_empty",
        "in",
        "not_in",
    ];

    /// Operators restricted to text fields.
    ///
    /// `not_like` intentionally carries no restriction: substring containment
    /// over a non-text value is false, so its negation matches such rows.
    #[must_use]
    pub const fn is_text_only(self) -> bool {
        matches!(
            self,
            Self::Like
                | Self::StartsWith
                | Self::NotStartsWith
                | Self::EndsWith
                | Self::NotEndsWith
                | Self::IsEmpty
                | Self::IsNotEmpty
        )
    }

    /// Operators that compare against a supplied operand. Emptiness checks
    /// ignore any operand and require none.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }
}

///
/// InvalidComparisonOperator
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown comparison operator '{0}'")]
pub struct InvalidComparisonOperator(pub String);

impl FromStr for CompareOp {
    type Err = InvalidComparisonOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let op = match token {
            "==" => Self::Eq,
            "!=" => Self::Ne,
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            "like" => Self::Like,
            "not_like" => Self::NotLike,
            "starts_with" => Self::StartsWith,
            "not_starts_with" => Self::NotStartsWith,
            "ends_with" => Self::EndsWith,
            "not_ends_with" => Self::NotEndsWith,
            "is_empty" => Self::IsEmpty,
            "is_not_empty" => Self::IsNotEmpty,
            "in" => Self::In,
            "not_in" => Self::NotIn,
            _ => return Err(InvalidComparisonOperator(token.to_string())),
        };

        Ok(op)
    }
}

///
/// LogicOp
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum LogicOp {
    #[display("&&")]
    And,
    #[display("||")]
    Or,
}

impl LogicOp {
    pub const TOKENS: &'static [&'static str] = &["&&", "||"];
}

///
/// InvalidLogicOperator
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown logic operator '{0}'")]
pub struct InvalidLogicOperator(pub String);

impl FromStr for LogicOp {
    type Err = InvalidLogicOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "&&" => Ok(Self::And),
            "||" => Ok(Self::Or),
            _ => Err(InvalidLogicOperator(token.to_string())),
        }
    }
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum OrderDirection {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl OrderDirection {
    pub const TOKENS: &'static [&'static str] = &["asc", "desc"];
}

///
/// InvalidSortOrder
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown sort order '{0}'")]
pub struct InvalidSortOrder(pub String);

impl FromStr for OrderDirection {
    type Err = InvalidSortOrder;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(InvalidSortOrder(token.to_string())),
        }
    }
}
