//! Visibility expression engine
//!
//! Compiles boolean label expressions such as `A & (B | C)` into reusable
//! predicates evaluated against a set of labels, so a host application can
//! gate visibility decisions without re-parsing the expression each time.
//!
//! The pipeline is synchronous and allocation-bounded: source text is lexed
//! into tokens, parsed by a two-rule recursive-descent grammar into an
//! expression tree, and wrapped in a [`Predicate`]. `&` and `|` share one
//! precedence level and chains associate strictly left-to-right; grouping
//! requires parentheses.
//!
//! ```
//! use vex_core::{parse, EvaluationContext};
//!
//! let predicate = parse("beta | (staff & internal)").unwrap();
//! let ctx: EvaluationContext = ["staff", "internal"].into_iter().collect();
//! assert!(predicate.eval(&ctx));
//! ```

pub mod ast;
pub mod context;
pub mod eval;
pub mod parser;

pub use ast::Expr;
pub use context::EvaluationContext;
pub use eval::{evaluate, Predicate};
pub use parser::{LexError, ParseError};

use parser::{Lexer, Parser};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Compile a visibility expression into a reusable [`Predicate`].
///
/// The input is lexed and parsed in full before anything is returned; on
/// malformed input this fails with [`Error::Lex`] or [`Error::Parse`] and
/// never yields a partially-built predicate.
pub fn parse(expression: &str) -> Result<Predicate> {
    let tokens = Lexer::new(expression).tokenize()?;
    let expr = Parser::new(tokens).parse()?;
    tracing::debug!("compiled visibility expression: {}", expr);
    Ok(Predicate::new(expr))
}
