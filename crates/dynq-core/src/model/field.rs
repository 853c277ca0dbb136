//! Module: model::field
//! Responsibility: static field metadata and the scalar/nested/collection classifier.
//! Does not own: runtime field access or value coercion.
//! Boundary: consumed by path resolution, compilation, and validation.

use crate::{model::RecordModel, query::ops::CompareOp};
use std::fmt;

///
/// FieldModel
/// Static field metadata registered by a record type.
///

pub struct FieldModel {
    /// Field name as used in field paths, clauses, and projections.
    pub name: &'static str,
    /// Declared runtime type shape.
    pub kind: FieldKind,
    /// Operator quick search applies to this field; `None` opts the field out.
    /// On a nested field the marker enables recursion into the nested record's
    /// own annotated fields; the operator itself is not used.
    pub quick_search: Option<CompareOp>,
}

///
/// FieldKind
///
/// Minimal declared type surface needed by the compilers.
/// Nullability is carried by `Option` on the record itself and surfaces as
/// `Value::Null` at read time; it is not part of the kind.
///

#[derive(Clone, Copy)]
pub enum FieldKind {
    // Scalar primitives
    Bool,
    Float,
    Int,
    Text,
    Timestamp,
    Uint,

    /// Single-valued nested record.
    Nested(&'static RecordModel),
    /// Collection of records.
    List(&'static RecordModel),
}

///
/// FieldClass
///
/// Coarse classification driving how each compiler recurses.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldClass {
    Scalar,
    Nested,
    Collection,
}

impl FieldKind {
    /// Classify this kind. Total; every kind maps to exactly one class.
    #[must_use]
    pub const fn class(&self) -> FieldClass {
        match self {
            Self::Bool | Self::Float | Self::Int | Self::Text | Self::Timestamp | Self::Uint => {
                FieldClass::Scalar
            }
            Self::Nested(_) => FieldClass::Nested,
            Self::List(_) => FieldClass::Collection,
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// The nested record model, for `Nested` and `List` kinds.
    #[must_use]
    pub const fn nested_model(&self) -> Option<&'static RecordModel> {
        match self {
            Self::Nested(model) | Self::List(model) => Some(model),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Float => write!(f, "Float"),
            Self::Int => write!(f, "Int"),
            Self::Text => write!(f, "Text"),
            Self::Timestamp => write!(f, "Timestamp"),
            Self::Uint => write!(f, "Uint"),
            Self::Nested(model) => write!(f, "Nested<{}>", model.record_name),
            Self::List(model) => write!(f, "List<{}>", model.record_name),
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display form; never recurse into nested models.
        write!(f, "{self}")
    }
}
