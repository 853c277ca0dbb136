use crate::query::{ops::CompareOp, validate::SpecIssues};
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Compile-time failures of the filter/sort/projection compilers. All of
/// these are fatal to the compile call; no partial program is ever returned.
/// Coercion failures are not here; they are recoverable values that drop a
/// single comparison (see `value::coerce`).
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum QueryError {
    /// A predicate or sort path traverses a collection-valued field.
    /// Collections are only reachable through projection.
    #[error("path '{path}' traverses collection field on '{record}'")]
    CollectionTraversal { record: String, path: String },

    /// A path or recursion exceeded the per-call depth bound.
    #[error("path '{path}' exceeds the maximum field depth of {limit}")]
    DepthExceeded { path: String, limit: usize },

    /// Every clause of a group was dropped, leaving nothing to seed it.
    #[error("clause group {index} compiled to no usable clauses")]
    EmptyClauseGroup { index: usize },

    /// The projection field list is empty.
    #[error("projection requires at least one field")]
    EmptyProjection,

    /// A path segment does not exist on the type it was resolved against.
    #[error("field '{field}' not found on '{record}'")]
    FieldNotFound { record: String, field: String },

    /// The query specification failed validation; all issues are collected.
    #[error("invalid query specification: {0}")]
    InvalidSpec(SpecIssues),

    /// A text-only operator was applied to a non-text field.
    #[error("operator '{op}' only applies to text fields; '{field}' is {kind}")]
    TypeMismatch {
        field: String,
        op: CompareOp,
        kind: String,
    },
}
