//! Module: query::path
//! Responsibility: resolve dotted field paths against record models and walk
//! them over live records.
//! Does not own: operator legality or value comparison.
//! Boundary: resolution errors are the only place unknown names surface.

use crate::{
    MAX_FIELD_DEPTH,
    error::QueryError,
    model::{FieldKind, RecordModel},
    traits::{DynRecord, FieldRead},
    value::Value,
};

///
/// PathSegment
///
/// One resolved step of a field path: the declared name and kind.
///

#[derive(Clone, Copy, Debug)]
pub struct PathSegment {
    pub name: &'static str,
    pub kind: FieldKind,
}

///
/// FieldPath
///
/// A dotted path resolved once against a record model. Resolution guarantees
/// every intermediate segment is a nested record; the leaf may be any
/// classification. Reading walks the chain, yielding `Value::Null` as soon as
/// an intermediate record is absent.
///

#[derive(Clone, Debug)]
pub struct FieldPath {
    dotted: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Resolve `dotted` against `root`, segment by segment.
    pub fn resolve(root: &'static RecordModel, dotted: &str) -> Result<Self, QueryError> {
        let names: Vec<&str> = dotted.split('.').collect();
        if names.len() > MAX_FIELD_DEPTH {
            return Err(QueryError::DepthExceeded {
                path: dotted.to_string(),
                limit: MAX_FIELD_DEPTH,
            });
        }

        let mut segments = Vec::with_capacity(names.len());
        let mut current = root;

        for (index, name) in names.iter().enumerate() {
            let field = current
                .field(name)
                .ok_or_else(|| QueryError::FieldNotFound {
                    record: current.record_name.to_string(),
                    field: (*name).to_string(),
                })?;

            segments.push(PathSegment {
                name: field.name,
                kind: field.kind,
            });

            if index + 1 < names.len() {
                match field.kind {
                    FieldKind::Nested(model) => current = model,
                    FieldKind::List(_) => {
                        return Err(QueryError::CollectionTraversal {
                            record: current.record_name.to_string(),
                            path: dotted.to_string(),
                        });
                    }
                    // A scalar has no members to look the next segment up on.
                    _ => {
                        return Err(QueryError::FieldNotFound {
                            record: field.kind.to_string(),
                            field: names[index + 1].to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            dotted: dotted.to_string(),
            segments,
        })
    }

    /// Build a path from segments already resolved during a model walk.
    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        let dotted = segments
            .iter()
            .map(|segment| segment.name)
            .collect::<Vec<_>>()
            .join(".");

        Self { dotted, segments }
    }

    #[must_use]
    pub fn dotted(&self) -> &str {
        &self.dotted
    }

    /// Declared kind of the final segment.
    #[must_use]
    pub fn leaf_kind(&self) -> Option<FieldKind> {
        self.segments.last().map(|segment| segment.kind)
    }

    /// Read the path against one record. Absent intermediates and
    /// non-scalar leaves read as `Value::Null`.
    #[must_use]
    pub fn read(&self, record: &dyn DynRecord) -> Value {
        let Some((leaf, intermediate)) = self.segments.split_last() else {
            return Value::Null;
        };

        let mut current = record;
        for segment in intermediate {
            match current.field(segment.name) {
                Some(FieldRead::Nested(Some(next))) => current = next,
                _ => return Value::Null,
            }
        }

        match current.field(leaf.name) {
            Some(FieldRead::Value(value)) => value,
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{COURSE_MODEL, course_catalog};

    #[test]
    fn resolves_single_segment_paths() {
        let path = FieldPath::resolve(&COURSE_MODEL, "Title").unwrap();
        assert_eq!(path.dotted(), "Title");
        assert!(path.leaf_kind().is_some_and(|kind| kind.is_text()));
    }

    #[test]
    fn resolves_nested_paths_to_arbitrary_depth() {
        let path = FieldPath::resolve(&COURSE_MODEL, "Instructor.Profile.LinkedInUrl").unwrap();
        assert_eq!(path.dotted(), "Instructor.Profile.LinkedInUrl");
    }

    #[test]
    fn unknown_segment_names_the_owning_record() {
        let err = FieldPath::resolve(&COURSE_MODEL, "Instructor.Nickname").unwrap_err();
        match err {
            QueryError::FieldNotFound { record, field } => {
                assert_eq!(record, "instructor");
                assert_eq!(field, "Nickname");
            }
            other => panic!("expected FieldNotFound, got {other:?}"),
        }
    }

    #[test]
    fn intermediate_collection_segments_are_rejected() {
        let err = FieldPath::resolve(&COURSE_MODEL, "Modules.Title").unwrap_err();
        assert!(matches!(err, QueryError::CollectionTraversal { .. }));
    }

    #[test]
    fn scalar_intermediate_segments_fail_as_missing_fields() {
        let err = FieldPath::resolve(&COURSE_MODEL, "Title.Length").unwrap_err();
        assert!(matches!(err, QueryError::FieldNotFound { .. }));
    }

    #[test]
    fn reading_an_absent_nested_record_yields_null() {
        let course = course_catalog()
            .into_iter()
            .find(|course| course.instructor.is_none())
            .expect("fixture contains a course without an instructor");

        let path = FieldPath::resolve(&COURSE_MODEL, "Instructor.FullName").unwrap();
        assert_eq!(path.read(&course), Value::Null);
    }
}
