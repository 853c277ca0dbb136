//! Module: query::spec
//! Responsibility: the wire-shaped query specification types and their typed constructors.
//! Does not own: token validation (query::validate) or compilation.
//! Boundary: operator fields hold raw grammar tokens until validation parses them.

use crate::query::ops::{CompareOp, LogicOp, OrderDirection};
use serde::{Deserialize, Serialize};

///
/// QuerySpec
///
/// One request's pagination, projection, filter, and sort, created by the
/// caller, validated once, compiled once, and discarded.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuerySpec {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Field names to project (dot notation supported). Empty means the
    /// record's scalar fields.
    pub fields: Vec<String>,
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            fields: Vec::new(),
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
        }
    }
}

impl QuerySpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }
}

///
/// FilterSpec
///
/// Optional quick search plus clause groups.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub quick_search: Option<String>,
    pub groups: Vec<ClauseGroup>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn quick_search(mut self, text: impl Into<String>) -> Self {
        self.quick_search = Some(text.into());
        self
    }

    /// Append a group, combined into the filter with the group's own logic
    /// operator.
    #[must_use]
    pub fn group(mut self, group: ClauseGroup) -> Self {
        self.groups.push(group);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quick_search
            .as_deref()
            .is_none_or(|text| text.trim().is_empty())
            && self.groups.is_empty()
    }
}

///
/// ClauseGroup
///
/// Clauses combined left-to-right by each clause's own logic operator; the
/// group's operator applies when composing across groups.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClauseGroup {
    pub logic_operator: String,
    pub clauses: Vec<Clause>,
}

impl Default for ClauseGroup {
    fn default() -> Self {
        Self {
            logic_operator: LogicOp::And.to_string(),
            clauses: Vec::new(),
        }
    }
}

impl ClauseGroup {
    /// A group ANDed into the filter.
    #[must_use]
    pub fn all(clauses: Vec<Clause>) -> Self {
        Self {
            logic_operator: LogicOp::And.to_string(),
            clauses,
        }
    }

    /// A group ORed into the filter.
    #[must_use]
    pub fn any(clauses: Vec<Clause>) -> Self {
        Self {
            logic_operator: LogicOp::Or.to_string(),
            clauses,
        }
    }
}

///
/// Clause
///
/// One field/operator/value comparison. `field` supports dot notation
/// ("Instructor.Profile.Bio").
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Clause {
    /// Combines this clause with the one before it; ignored on the first
    /// clause of a group.
    pub logic_operator: String,
    pub field: String,
    pub comparison_operator: String,
    pub value: Option<String>,
}

impl Default for Clause {
    fn default() -> Self {
        Self {
            logic_operator: LogicOp::And.to_string(),
            field: String::new(),
            comparison_operator: String::new(),
            value: None,
        }
    }
}

impl Clause {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            logic_operator: LogicOp::And.to_string(),
            field: field.into(),
            comparison_operator: op.to_string(),
            value: Some(value.into()),
        }
    }

    /// A clause for the operand-free emptiness operators.
    #[must_use]
    pub fn bare(field: impl Into<String>, op: CompareOp) -> Self {
        Self {
            logic_operator: LogicOp::And.to_string(),
            field: field.into(),
            comparison_operator: op.to_string(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_logic(mut self, op: LogicOp) -> Self {
        self.logic_operator = op.to_string();
        self
    }
}

///
/// SortSpec
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortSpec {
    pub fields_order: Vec<FieldOrder>,
}

impl SortSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn by(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self::default().then_by(field, direction)
    }

    #[must_use]
    pub fn then_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.fields_order.push(FieldOrder {
            field: field.into(),
            order: direction.to_string(),
        });
        self
    }
}

///
/// FieldOrder
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOrder {
    pub field: String,
    pub order: String,
}
