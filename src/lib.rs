//! # reckon
//!
//! reckon evaluates arithmetic expressions: integers, floats, unary `+`/`-`,
//! the binary operators `+ - * /` and parentheses. Source text goes through a
//! lexer, a recursive-descent parser and a tree-walking evaluator. Each stage
//! either succeeds or reports a precise, position-annotated error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::context::EvaluationContext, lexer::tokenize, parser::core::parse,
        value::core::Number,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The AST is built by the parser and
/// read by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary node variants.
/// - Keeps the originating token on every node for error reporting.
/// - Renders trees in fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. Every error carries the source position it
/// refers to; runtime errors also carry the evaluation context trace.
///
/// # Responsibilities
/// - Defines error enums for each failing stage (parser, evaluator).
/// - Joins them into a single pipeline [`error::Error`].
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the entry points for each stage.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates `source` and returns its value.
///
/// The root evaluation context is named `<program>`. Use [`run`] to give it a
/// different name.
///
/// # Errors
/// Returns `Error::Syntax` if the source is not a valid expression and
/// `Error::Runtime` if evaluation fails (division by zero).
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// let value = get_result("2 + 3 * 4").unwrap();
/// assert_eq!(value.to_string(), "14");
///
/// // Unbalanced parenthesis.
/// let err = get_result("(1 + 2").unwrap_err();
/// assert!(err.to_string().contains("Expected ')'"));
/// ```
pub fn get_result(source: &str) -> Result<Number, Error> {
    run("<program>", source)
}

/// Evaluates `source`, naming the root evaluation context `source_name`.
///
/// Every call runs a fresh lex, parse and evaluate pipeline; nothing is
/// shared between calls.
///
/// # Errors
/// See [`get_result`].
///
/// # Examples
/// ```
/// use reckon::run;
///
/// let err = run("input.txt", "5 / 0").unwrap_err();
/// assert_eq!(err.to_string(),
///            "Runtime error at position 1:5 Division by zero, context trace: input.txt");
/// ```
pub fn run(source_name: &str, source: &str) -> Result<Number, Error> {
    let tokens = tokenize(source);
    let expr = parse(&tokens)?;
    let context = EvaluationContext::root(source_name);
    Ok(context.eval(&expr)?)
}
