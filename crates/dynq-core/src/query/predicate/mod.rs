mod compile;
mod eval;


use crate::{
    error::QueryError,
    query::{path::FieldPath, ops::CompareOp, spec::FilterSpec, validate::validate_filter},
    traits::Record,
    value::Value,
};
use std::marker::PhantomData;

///
/// Predicate
///
/// Compiled boolean expression over one record type.
///
/// Expressions can be:
/// - `True` or `False` constants
/// - Single comparisons of a field path against a typed operand
/// - Composite expressions: `And`, `Or`, and negation `Not`.
///

#[derive(Clone, Debug, Default)]
pub enum Predicate {
    #[default]
    True,
    False,
    Compare(ComparePredicate),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl Predicate {
    /// Combine two predicates into an `And`, flattening nested `And`s so
    /// `(a AND b) AND c` becomes `AND[a, b, c]`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two predicates into an `Or`, flattening nested `Or`s
    /// similarly to `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    /// Negate this predicate.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

///
/// ComparePredicate
///
/// One resolved comparison: field path, operator, typed operand.
///

#[derive(Clone, Debug)]
pub struct ComparePredicate {
    pub path: FieldPath,
    pub op: CompareOp,
    pub value: Value,
}

///
/// FilterProgram
///
/// Compiled, reusable filter for one record type. Stateless after
/// construction; evaluation never mutates.
///

#[derive(Clone, Debug)]
pub struct FilterProgram<R: Record> {
    predicate: Predicate,
    _marker: PhantomData<R>,
}

impl<R: Record> FilterProgram<R> {
    /// Validate and compile a filter spec against `R`'s model.
    pub fn compile(filter: &FilterSpec) -> Result<Self, QueryError> {
        validate_filter(filter).into_result()?;

        let predicate = compile::compile_filter(R::MODEL, filter)?;

        Ok(Self {
            predicate,
            _marker: PhantomData,
        })
    }

    /// Evaluate the compiled predicate against one record.
    #[must_use]
    pub fn matches(&self, record: &R) -> bool {
        eval::eval(&self.predicate, record)
    }

    /// Borrow the compiled predicate tree.
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
