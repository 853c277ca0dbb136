//! Module: query::projection
//! Responsibility: compile field lists into projection trees and apply them.
//! Does not own: per-type field copying (generated `Record::project` impls).
//! Boundary: collection projections materialize eagerly; the result is a
//! fully detached value.

use crate::{
    MAX_FIELD_DEPTH,
    error::QueryError,
    model::{FieldKind, RecordModel},
    traits::Record,
};
use std::marker::PhantomData;

///
/// ProjectionNode
///
/// One projected field. A leaf copies the field whole; a non-leaf recurses
/// into the nested record (or each collection element) with its children.
///

#[derive(Clone, Debug)]
pub struct ProjectionNode {
    name: &'static str,
    children: ProjectionTree,
}

impl ProjectionNode {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.nodes.is_empty()
    }

    #[must_use]
    pub const fn children(&self) -> &ProjectionTree {
        &self.children
    }
}

///
/// ProjectionTree
///
/// Requested fields grouped by first segment, in first-appearance order.
///

#[derive(Clone, Debug, Default)]
pub struct ProjectionTree {
    nodes: Vec<ProjectionNode>,
}

impl ProjectionTree {
    #[must_use]
    pub fn nodes(&self) -> &[ProjectionNode] {
        &self.nodes
    }
}

///
/// ProjectionProgram
///
/// Compiled projection for one record type: applying it yields a new
/// instance with only the requested fields populated, everything else at its
/// default.
///

#[derive(Clone, Debug)]
pub struct ProjectionProgram<R: Record> {
    tree: ProjectionTree,
    _marker: PhantomData<R>,
}

impl<R: Record> ProjectionProgram<R> {
    /// Compile a field list (dot notation supported) against `R`'s model.
    pub fn compile(fields: &[String]) -> Result<Self, QueryError> {
        if fields.is_empty() {
            return Err(QueryError::EmptyProjection);
        }

        let paths: Vec<&str> = fields.iter().map(String::as_str).collect();
        let tree = build_tree(R::MODEL, &paths, 0)?;

        Ok(Self {
            tree,
            _marker: PhantomData,
        })
    }

    /// Project one record.
    #[must_use]
    pub fn apply(&self, record: &R) -> R {
        record.project(&self.tree)
    }

    /// Project a slice into a new, materialized vector.
    #[must_use]
    pub fn apply_all(&self, records: &[R]) -> Vec<R> {
        records.iter().map(|record| self.apply(record)).collect()
    }

    #[must_use]
    pub const fn tree(&self) -> &ProjectionTree {
        &self.tree
    }
}

// Group paths by their first segment (first-appearance order preserved,
// duplicates collapse) and recurse on the remainders.
fn build_tree(
    model: &'static RecordModel,
    paths: &[&str],
    depth: usize,
) -> Result<ProjectionTree, QueryError> {
    if depth >= MAX_FIELD_DEPTH {
        return Err(QueryError::DepthExceeded {
            path: paths.first().unwrap_or(&"").to_string(),
            limit: MAX_FIELD_DEPTH,
        });
    }

    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for path in paths {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (*path, None),
        };

        match groups.iter_mut().find(|(name, _)| *name == head) {
            Some((_, rests)) => {
                if let Some(rest) = rest {
                    rests.push(rest);
                }
            }
            None => groups.push((head, rest.into_iter().collect())),
        }
    }

    let mut nodes = Vec::with_capacity(groups.len());
    for (head, rests) in groups {
        let field = model.field(head).ok_or_else(|| QueryError::FieldNotFound {
            record: model.record_name.to_string(),
            field: head.to_string(),
        })?;

        let children = if rests.is_empty() {
            ProjectionTree::default()
        } else {
            match field.kind {
                FieldKind::Nested(nested) | FieldKind::List(nested) => {
                    build_tree(nested, &rests, depth + 1)?
                }
                // A scalar has no members the sub-paths could name.
                _ => {
                    let next = rests[0].split('.').next().unwrap_or(rests[0]);
                    return Err(QueryError::FieldNotFound {
                        record: field.kind.to_string(),
                        field: next.to_string(),
                    });
                }
            }
        };

        nodes.push(ProjectionNode {
            name: field.name,
            children,
        });
    }

    Ok(ProjectionTree { nodes })
}
