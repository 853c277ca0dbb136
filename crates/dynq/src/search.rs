//! The application layer: validate a query spec, compile its three programs,
//! and run them over an in-memory slice in the fixed order
//! filter → sort → project → paginate.

use crate::page::Page;
use dynq_core::{
    error::QueryError,
    query::{
        predicate::FilterProgram, projection::ProjectionProgram, sort::SortProgram,
        spec::QuerySpec, validate::validate_query,
    },
    traits::Record,
};
use tracing::debug;

/// Run one query spec over a record slice.
///
/// An empty `fields` list projects the record's scalar fields. The spec is
/// validated once, up front; every compile failure surfaces before any record
/// is touched.
pub fn search<R: Record>(records: &[R], spec: &QuerySpec) -> Result<Page<R>, QueryError> {
    let mut spec = spec.clone();
    if spec.fields.is_empty() {
        spec.fields = R::MODEL.default_fields();
    }

    validate_query(&spec).into_result()?;

    let filter = FilterProgram::<R>::compile(&spec.filter)?;
    let sort = SortProgram::<R>::compile(&spec.sort)?;
    let projection = ProjectionProgram::<R>::compile(&spec.fields)?;

    let mut matched: Vec<R> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    debug!(
        record = R::MODEL.record_name,
        scanned = records.len(),
        matched = matched.len(),
        "search filtered"
    );

    sort.sort(&mut matched);
    let projected = projection.apply_all(&matched);

    Ok(Page::cut(projected, spec.page, spec.page_size))
}

/// Project a record slice to the requested fields, skipping filter and sort.
pub fn project<R: Record>(records: &[R], fields: &[String]) -> Result<Vec<R>, QueryError> {
    let program = ProjectionProgram::<R>::compile(fields)?;

    Ok(program.apply_all(records))
}
