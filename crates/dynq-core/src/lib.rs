//! Core engine for dynq: record models, runtime values, and the
//! filter/sort/projection compilers exported via the `prelude`.

pub mod error;
pub mod macros;
pub mod model;
pub mod query;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Maximum number of path segments (and quick-search/projection recursion
/// depth) accepted by one compile call.
///
/// The bound is per call and purely local; exceeding it fails the compile
/// with [`error::QueryError::DepthExceeded`].
pub const MAX_FIELD_DEPTH: usize = 32;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, validators, or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{FieldClass, FieldKind, FieldModel, RecordModel},
        query::{
            ops::{CompareOp, LogicOp, OrderDirection},
            predicate::FilterProgram,
            projection::ProjectionProgram,
            sort::SortProgram,
            spec::{Clause, ClauseGroup, FieldOrder, FilterSpec, QuerySpec, SortSpec},
        },
        traits::{DynRecord, FieldValue, Record},
        value::Value,
    };
}
