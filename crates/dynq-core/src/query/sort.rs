//! Module: query::sort
//! Responsibility: compile sort specs into ordered key lists and apply them.
//! Does not own: path resolution rules or value ordering (value::compare).
//! Boundary: composition is lexicographic and the applied sort is stable;
//! equal rows never reorder.

use crate::{
    error::QueryError,
    query::{
        ops::OrderDirection,
        path::FieldPath,
        spec::SortSpec,
        validate::{SpecIssue, SpecIssues, validate_sort},
    },
    traits::Record,
    value::canonical_cmp,
};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::str::FromStr;

///
/// SortKey
///
/// One compiled ordering: a resolved path and its direction.
///

#[derive(Clone, Debug)]
pub struct SortKey {
    pub path: FieldPath,
    pub direction: OrderDirection,
}

///
/// SortProgram
///
/// Compiled ordering list for one record type. The first key is the primary
/// order; later keys break ties only.
///

#[derive(Clone, Debug)]
pub struct SortProgram<R: Record> {
    keys: Vec<SortKey>,
    _marker: PhantomData<R>,
}

impl<R: Record> SortProgram<R> {
    /// Validate and compile a sort spec against `R`'s model.
    ///
    /// An empty spec compiles to the model's primary key, descending.
    pub fn compile(sort: &SortSpec) -> Result<Self, QueryError> {
        validate_sort(sort).into_result()?;

        let model = R::MODEL;

        if sort.fields_order.is_empty() {
            let path = FieldPath::resolve(model, model.primary_key)?;
            return Ok(Self {
                keys: vec![SortKey {
                    path,
                    direction: OrderDirection::Desc,
                }],
                _marker: PhantomData,
            });
        }

        let mut keys = Vec::with_capacity(sort.fields_order.len());
        for field_order in &sort.fields_order {
            // Validation vetted the token; this keeps the compile total when
            // a caller skips it.
            let direction = OrderDirection::from_str(&field_order.order).map_err(|err| {
                QueryError::InvalidSpec(SpecIssues(vec![SpecIssue {
                    path: "sort.fieldsOrder.order".to_string(),
                    message: err.to_string(),
                }]))
            })?;
            let path = FieldPath::resolve(model, &field_order.field)?;
            keys.push(SortKey { path, direction });
        }

        Ok(Self {
            keys,
            _marker: PhantomData,
        })
    }

    /// Compare two records under the compiled key list.
    #[must_use]
    pub fn compare(&self, left: &R, right: &R) -> Ordering {
        for key in &self.keys {
            let ordering = canonical_cmp(&key.path.read(left), &key.path.read(right));
            let ordering = match key.direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    /// Sort a slice in place. `sort_by` is stable, so ties keep their
    /// incoming order.
    pub fn sort(&self, records: &mut [R]) {
        records.sort_by(|left, right| self.compare(left, right));
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }
}
