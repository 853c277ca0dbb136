//! Module: query::validate
//! Responsibility: pre-compile spec validation, collecting every issue.
//! Does not own: field-path resolution (a model concern, checked at compile).
//! Boundary: compilers call in before building; nothing past here sees a bad token.

use crate::{
    error::QueryError,
    query::{
        ops::{CompareOp, LogicOp, OrderDirection},
        spec::{FilterSpec, QuerySpec, SortSpec},
    },
};
use std::fmt;
use std::str::FromStr;

///
/// SpecIssue
///
/// One structured validation message, addressed by the wire path of the
/// offending value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpecIssue {
    pub path: String,
    pub message: String,
}

impl SpecIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SpecIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

///
/// SpecIssues
///
/// All issues found in one validation pass. Validation never stops at the
/// first problem; the caller gets the complete list.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpecIssues(pub Vec<SpecIssue>);

impl SpecIssues {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap a non-empty issue list into the compile error.
    pub fn into_result(self) -> Result<(), QueryError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(QueryError::InvalidSpec(self))
        }
    }
}

impl fmt::Display for SpecIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
            first = false;
        }

        Ok(())
    }
}

/// Validate a whole query spec: pagination bounds, projection fields, filter,
/// and sort.
pub fn validate_query(spec: &QuerySpec) -> SpecIssues {
    let mut issues = Vec::new();

    if spec.page < 1 {
        issues.push(SpecIssue::new("page", "must be greater than or equal to 1"));
    }
    if spec.page_size < 1 {
        issues.push(SpecIssue::new(
            "pageSize",
            "must be greater than or equal to 1",
        ));
    }
    if spec.fields.is_empty() {
        issues.push(SpecIssue::new("fields", "cannot be empty"));
    }
    for (index, field) in spec.fields.iter().enumerate() {
        if field.trim().is_empty() {
            issues.push(SpecIssue::new(format!("fields[{index}]"), "cannot be empty"));
        }
    }

    collect_filter(&spec.filter, "filter", &mut issues);
    collect_sort(&spec.sort, "sort", &mut issues);

    SpecIssues(issues)
}

/// Validate a filter spec alone.
pub fn validate_filter(filter: &FilterSpec) -> SpecIssues {
    let mut issues = Vec::new();
    collect_filter(filter, "filter", &mut issues);

    SpecIssues(issues)
}

/// Validate a sort spec alone.
pub fn validate_sort(sort: &SortSpec) -> SpecIssues {
    let mut issues = Vec::new();
    collect_sort(sort, "sort", &mut issues);

    SpecIssues(issues)
}

fn collect_filter(filter: &FilterSpec, prefix: &str, issues: &mut Vec<SpecIssue>) {
    for (group_index, group) in filter.groups.iter().enumerate() {
        let group_path = format!("{prefix}.groups[{group_index}]");

        check_logic_operator(&group.logic_operator, &group_path, issues);

        for (clause_index, clause) in group.clauses.iter().enumerate() {
            let clause_path = format!("{group_path}.clauses[{clause_index}]");

            check_logic_operator(&clause.logic_operator, &clause_path, issues);

            if clause.field.trim().is_empty() {
                issues.push(SpecIssue::new(
                    format!("{clause_path}.field"),
                    "cannot be empty",
                ));
            }

            if clause.comparison_operator.is_empty() {
                issues.push(SpecIssue::new(
                    format!("{clause_path}.comparisonOperator"),
                    "cannot be empty",
                ));
                continue;
            }

            match CompareOp::from_str(&clause.comparison_operator) {
                Ok(op) => {
                    let missing_value = clause
                        .value
                        .as_deref()
                        .is_none_or(|value| value.trim().is_empty());
                    if op.requires_value() && missing_value {
                        issues.push(SpecIssue::new(
                            format!("{clause_path}.value"),
                            format!("operator '{op}' requires a value"),
                        ));
                    }
                }
                Err(_) => {
                    issues.push(SpecIssue::new(
                        format!("{clause_path}.comparisonOperator"),
                        format!(
                            "'{}' is not one of: {}",
                            clause.comparison_operator,
                            CompareOp::TOKENS.join(", ")
                        ),
                    ));
                }
            }
        }
    }
}

fn collect_sort(sort: &SortSpec, prefix: &str, issues: &mut Vec<SpecIssue>) {
    for (index, field_order) in sort.fields_order.iter().enumerate() {
        let path = format!("{prefix}.fieldsOrder[{index}]");

        if field_order.field.trim().is_empty() {
            issues.push(SpecIssue::new(format!("{path}.field"), "cannot be empty"));
        }

        if OrderDirection::from_str(&field_order.order).is_err() {
            issues.push(SpecIssue::new(
                format!("{path}.order"),
                format!(
                    "'{}' is not one of: {}",
                    field_order.order,
                    OrderDirection::TOKENS.join(", ")
                ),
            ));
        }
    }
}

fn check_logic_operator(token: &str, path: &str, issues: &mut Vec<SpecIssue>) {
    if token.is_empty() {
        issues.push(SpecIssue::new(
            format!("{path}.logicOperator"),
            "cannot be empty",
        ));
    } else if LogicOp::from_str(token).is_err() {
        issues.push(SpecIssue::new(
            format!("{path}.logicOperator"),
            format!("'{}' is not one of: {}", token, LogicOp::TOKENS.join(", ")),
        ));
    }
}
