//! Module: predicate::eval
//! Responsibility: evaluate one compiled predicate against one record.
//! Does not own: operand construction or type guards (compile-side).
//! Boundary: an invalid comparison at runtime is false, never a panic.

use crate::{
    query::{
        ops::CompareOp,
        predicate::{ComparePredicate, Predicate},
    },
    traits::DynRecord,
    value::{Value, strict_order_cmp},
};
use std::cmp::Ordering;
use std::mem::discriminant;

// Evaluate one predicate tree against one record.
pub(super) fn eval(predicate: &Predicate, record: &dyn DynRecord) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,
        Predicate::And(children) => children.iter().all(|child| eval(child, record)),
        Predicate::Or(children) => children.iter().any(|child| eval(child, record)),
        Predicate::Not(inner) => !eval(inner, record),
        Predicate::Compare(comparison) => eval_comparison(comparison, record),
    }
}

fn eval_comparison(comparison: &ComparePredicate, record: &dyn DynRecord) -> bool {
    let actual = comparison.path.read(record);
    let operand = &comparison.value;

    match comparison.op {
        CompareOp::Eq => values_equal(&actual, operand),
        CompareOp::Ne => !values_equal(&actual, operand),

        CompareOp::Gt => strict_order_cmp(&actual, operand).is_some_and(Ordering::is_gt),
        CompareOp::Gte => strict_order_cmp(&actual, operand).is_some_and(Ordering::is_ge),
        CompareOp::Lt => strict_order_cmp(&actual, operand).is_some_and(Ordering::is_lt),
        CompareOp::Lte => strict_order_cmp(&actual, operand).is_some_and(Ordering::is_le),

        CompareOp::Like => actual.text_contains(operand).unwrap_or(false),
        CompareOp::NotLike => !actual.text_contains(operand).unwrap_or(false),

        CompareOp::StartsWith => actual.text_starts_with(operand).unwrap_or(false),
        CompareOp::NotStartsWith => !actual.text_starts_with(operand).unwrap_or(false),
        CompareOp::EndsWith => actual.text_ends_with(operand).unwrap_or(false),
        CompareOp::NotEndsWith => !actual.text_ends_with(operand).unwrap_or(false),

        // Emptiness is (in)equality against empty text, so an unset field is
        // not empty but is not-empty.
        CompareOp::IsEmpty => values_equal(&actual, &Value::Text(String::new())),
        CompareOp::IsNotEmpty => !values_equal(&actual, &Value::Text(String::new())),

        CompareOp::In => in_list(&actual, operand),
        CompareOp::NotIn => !in_list(&actual, operand),
    }
}

// Null equals Null; otherwise only same-variant values can be equal.
fn values_equal(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right) && left == right
}

// Membership compares the rendered field value against each list member.
fn in_list(actual: &Value, operand: &Value) -> bool {
    let Value::List(members) = operand else {
        return false;
    };
    let Some(rendered) = actual.render() else {
        return false;
    };

    members
        .iter()
        .any(|member| matches!(member, Value::Text(text) if *text == rendered))
}
