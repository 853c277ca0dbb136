pub mod ops;
pub mod path;
pub mod predicate;
pub mod projection;
pub mod sort;
pub mod spec;
pub mod validate;

pub use ops::{CompareOp, LogicOp, OrderDirection};
pub use path::FieldPath;
pub use predicate::{FilterProgram, Predicate};
pub use projection::ProjectionProgram;
pub use sort::SortProgram;
pub use spec::{Clause, ClauseGroup, FieldOrder, FilterSpec, QuerySpec, SortSpec};
pub use validate::{SpecIssue, SpecIssues, validate_query};
