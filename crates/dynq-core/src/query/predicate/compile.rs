//! Module: predicate::compile
//! Responsibility: translate a filter spec into one predicate tree.
//! Does not own: spec-shape validation (already done) or evaluation.
//! Boundary: comparisons whose operand fails coercion are dropped here,
//! never at evaluation time.

use crate::{
    MAX_FIELD_DEPTH,
    error::QueryError,
    model::{FieldClass, FieldKind, RecordModel},
    query::{
        ops::{CompareOp, LogicOp},
        path::{FieldPath, PathSegment},
        predicate::{ComparePredicate, Predicate},
        spec::{Clause, FilterSpec},
        validate::{SpecIssue, SpecIssues},
    },
    value::{Value, coerce},
};
use std::str::FromStr;
use tracing::debug;

/// Compile a validated filter spec against one record model.
///
/// The combined shape is fixed: `quick AND groups`, where `quick` ORs the
/// annotated-field comparisons and `groups` folds left-to-right from `True`
/// under each group's own logic operator.
pub(super) fn compile_filter(
    model: &'static RecordModel,
    filter: &FilterSpec,
) -> Result<Predicate, QueryError> {
    let mut quick = Predicate::True;
    if let Some(text) = filter.quick_search.as_deref() {
        if !text.trim().is_empty() {
            let mut comparisons = Vec::new();
            collect_quick_search(model, text, &mut Vec::new(), &mut comparisons)?;

            if !comparisons.is_empty() {
                let matched = comparisons
                    .into_iter()
                    .fold(Predicate::False, |acc, cmp| acc.or(Predicate::Compare(cmp)));
                quick = quick.and(matched);
            }
        }
    }

    let mut groups = Predicate::True;
    for (index, group) in filter.groups.iter().enumerate() {
        let mut seed: Option<Predicate> = None;

        for clause in &group.clauses {
            let Some(comparison) = clause_comparison(model, clause)? else {
                continue;
            };
            let compiled = Predicate::Compare(comparison);

            seed = Some(match seed {
                None => compiled,
                Some(acc) => match parse_logic(&clause.logic_operator)? {
                    LogicOp::And => acc.and(compiled),
                    LogicOp::Or => acc.or(compiled),
                },
            });
        }

        let group_predicate = seed.ok_or(QueryError::EmptyClauseGroup { index })?;

        groups = match parse_logic(&group.logic_operator)? {
            LogicOp::And => groups.and(group_predicate),
            LogicOp::Or => groups.or(group_predicate),
        };
    }

    Ok(quick.and(groups))
}

// Walk the model's annotated fields, recursing through nested records.
// Scalars whose coercion fails are dropped so other fields still match;
// collection-valued annotations never participate.
fn collect_quick_search(
    model: &'static RecordModel,
    text: &str,
    prefix: &mut Vec<PathSegment>,
    comparisons: &mut Vec<ComparePredicate>,
) -> Result<(), QueryError> {
    if prefix.len() >= MAX_FIELD_DEPTH {
        return Err(QueryError::DepthExceeded {
            path: FieldPath::from_segments(prefix.clone()).dotted().to_string(),
            limit: MAX_FIELD_DEPTH,
        });
    }

    for field in model.quick_search_fields() {
        let Some(op) = field.quick_search else {
            continue;
        };

        prefix.push(PathSegment {
            name: field.name,
            kind: field.kind,
        });

        match field.kind.class() {
            FieldClass::Scalar => {
                let path = FieldPath::from_segments(prefix.clone());
                if let Some(comparison) = build_comparison(path, op, Some(text))? {
                    comparisons.push(comparison);
                }
            }
            FieldClass::Nested => {
                if let FieldKind::Nested(nested) = field.kind {
                    collect_quick_search(nested, text, prefix, comparisons)?;
                }
            }
            FieldClass::Collection => {
                debug!(field = field.name, "quick search skips collection fields");
            }
        }

        prefix.pop();
    }

    Ok(())
}

// Resolve and build one explicit clause. `None` means the clause dropped.
fn clause_comparison(
    model: &'static RecordModel,
    clause: &Clause,
) -> Result<Option<ComparePredicate>, QueryError> {
    let op = parse_compare(&clause.comparison_operator)?;
    let path = FieldPath::resolve(model, &clause.field)?;

    if path
        .leaf_kind()
        .is_some_and(|kind| kind.class() == FieldClass::Collection)
    {
        return Err(QueryError::CollectionTraversal {
            record: model.record_name.to_string(),
            path: clause.field.clone(),
        });
    }

    build_comparison(path, op, clause.value.as_deref())
}

// Operator-specific operand construction. Shared by explicit clauses and
// quick search so both observe identical type guards.
fn build_comparison(
    path: FieldPath,
    op: CompareOp,
    raw: Option<&str>,
) -> Result<Option<ComparePredicate>, QueryError> {
    let Some(kind) = path.leaf_kind() else {
        return Ok(None);
    };

    if op.is_text_only() && !kind.is_text() {
        return Err(QueryError::TypeMismatch {
            field: path.dotted().to_string(),
            op,
            kind: kind.to_string(),
        });
    }

    let value = match op {
        // The operand is ignored; emptiness is equality against empty text.
        CompareOp::IsEmpty | CompareOp::IsNotEmpty => Value::Text(String::new()),

        // Membership lists are split on commas and compared as text,
        // whatever the field's kind.
        CompareOp::In | CompareOp::NotIn => {
            let Some(raw) = raw else {
                return Ok(None);
            };
            Value::List(
                raw.split(',')
                    .map(|member| Value::Text(member.trim().to_string()))
                    .collect(),
            )
        }

        _ => {
            let Some(raw) = raw else {
                return Ok(None);
            };
            match coerce(raw, &kind) {
                Ok(value) => value,
                Err(err) => {
                    debug!(field = path.dotted(), %err, "dropping comparison");
                    return Ok(None);
                }
            }
        }
    };

    Ok(Some(ComparePredicate { path, op, value }))
}

// Validation has already vetted tokens; these keep the compile total if a
// caller skips it.
fn parse_logic(token: &str) -> Result<LogicOp, QueryError> {
    LogicOp::from_str(token).map_err(|err| {
        QueryError::InvalidSpec(SpecIssues(vec![SpecIssue {
            path: "logicOperator".to_string(),
            message: err.to_string(),
        }]))
    })
}

fn parse_compare(token: &str) -> Result<CompareOp, QueryError> {
    CompareOp::from_str(token).map_err(|err| {
        QueryError::InvalidSpec(SpecIssues(vec![SpecIssue {
            path: "comparisonOperator".to_string(),
            message: err.to_string(),
        }]))
    })
}
