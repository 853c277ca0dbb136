//! Module: value::coerce
//! Responsibility: convert raw string operands into the typed `Value` a field requires.
//! Does not own: operator legality or predicate evaluation.
//! Boundary: failure is a recoverable value; callers decide drop-vs-surface.

use crate::{model::FieldKind, value::Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

///
/// CoercionError
///
/// A raw operand that does not convert into the target field's kind.
/// Recoverable: quick search and explicit clauses drop the comparison
/// rather than failing the compile.
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("cannot convert '{raw}' into {kind}")]
pub struct CoercionError {
    pub raw: String,
    pub kind: String,
}

impl CoercionError {
    fn new(raw: &str, kind: &FieldKind) -> Self {
        Self {
            raw: raw.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Convert a raw operand into the typed constant a target field compares
/// against. Nested and collection kinds never coerce.
pub fn coerce(raw: &str, kind: &FieldKind) -> Result<Value, CoercionError> {
    let fail = || CoercionError::new(raw, kind);

    match kind {
        FieldKind::Bool => parse_bool(raw.trim()).map(Value::Bool).ok_or_else(fail),
        FieldKind::Float => raw.trim().parse().map(Value::Float).map_err(|_| fail()),
        FieldKind::Int => raw.trim().parse().map(Value::Int).map_err(|_| fail()),
        FieldKind::Text => Ok(Value::Text(raw.to_string())),
        FieldKind::Timestamp => parse_timestamp(raw.trim())
            .map(Value::Timestamp)
            .ok_or_else(fail),
        FieldKind::Uint => raw.trim().parse().map(Value::Uint).map_err(|_| fail()),
        FieldKind::Nested(_) | FieldKind::List(_) => Err(fail()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// RFC 3339 first, then the two bare forms callers actually send.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}
