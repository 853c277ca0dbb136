//! Record access traits: the typed surface the compilers read records through.

use crate::{model::RecordModel, query::projection::ProjectionTree, value::Value};
use chrono::{DateTime, Utc};

///
/// FieldRead
///
/// Result of reading one immediate field from a record, type-erased for path
/// traversal. Collections are opaque here; only projection descends into
/// them, through the typed [`Record::project`] path.
///

pub enum FieldRead<'a> {
    /// Scalar value; `Value::Null` when the field is unset.
    Value(Value),
    /// Single nested record; `None` when the field is unset.
    Nested(Option<&'a dyn DynRecord>),
    /// Collection-valued field.
    Collection,
}

///
/// DynRecord
///
/// Object-safe record access used by predicate evaluation and sort selectors
/// while walking dotted paths across heterogeneous nested types.
///

pub trait DynRecord {
    /// The static model describing this record's fields.
    fn model(&self) -> &'static RecordModel;

    /// Read one immediate field by name.
    fn field(&self, name: &str) -> Option<FieldRead<'_>>;
}

///
/// Record
///
/// A queryable record type. `Default` gives projection its freshly
/// constructed instances; `Clone` gives it field copies. Implemented via
/// [`record_impl!`](crate::record_impl).
///

pub trait Record: DynRecord + Clone + Default + 'static {
    /// The static model for this type; `model()` returns the same table.
    const MODEL: &'static RecordModel;

    /// Construct a partial copy containing only the fields named by `tree`;
    /// everything else keeps its default. The tree has been validated against
    /// `MODEL`, so unknown names are ignored.
    #[must_use]
    fn project(&self, tree: &ProjectionTree) -> Self;
}

///
/// FieldValue
///
/// Conversion from a concrete scalar field into [`Value`].
/// `Option<T>` maps `None` to `Value::Null`.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FieldValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FieldValue for u32 {
    fn to_value(&self) -> Value {
        Value::Uint(u64::from(*self))
    }
}

impl FieldValue for u64 {
    fn to_value(&self) -> Value {
        Value::Uint(*self)
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
