//! Predicate evaluation
//!
//! A compiled predicate owns its expression tree and walks it against a
//! caller-supplied context. Evaluation short-circuits: the left operand of
//! a binary node runs first, and the right operand is skipped when the left
//! already decides the result. Left-before-right order is part of the
//! documented contract and must not be reordered.

use crate::ast::Expr;
use crate::context::EvaluationContext;
use std::fmt;

/// A compiled visibility expression.
///
/// Created once by [`crate::parse`], then invoked any number of times.
/// Holds no mutable state, so it can be shared across threads and evaluated
/// concurrently without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    expr: Expr,
}

impl Predicate {
    /// Wrap a parsed expression tree
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Evaluate against a context.
    ///
    /// Total over any context: a label absent from the set simply evaluates
    /// to false for that label test.
    pub fn eval(&self, ctx: &EvaluationContext) -> bool {
        evaluate(&self.expr, ctx)
    }

    /// The underlying expression tree
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)
    }
}

/// Evaluate an expression tree against a context
pub fn evaluate(expr: &Expr, ctx: &EvaluationContext) -> bool {
    match expr {
        Expr::Label(name) => ctx.contains(name),
        Expr::And(left, right) => evaluate(left, ctx) && evaluate(right, ctx),
        Expr::Or(left, right) => evaluate(left, ctx) || evaluate(right, ctx),
    }
}
