//! # calculator
//!
//! calculator evaluates arithmetic expressions written as text.
//! Input is tokenized, parsed into a syntax tree under a fixed precedence
//! grammar, and evaluated to an `f64`.
//!
//! ```
//! assert_eq!(calculator::calculate("(2 + 3) * 4").unwrap(), 20.0);
//! ```

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
    ast::Node,
    error::Error,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the operator enums that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary nodes.
/// - Renders trees as indented text for diagnostics.
pub mod ast;
/// The interactive front end.
///
/// Reads expressions from the command line, a file or standard input, and
/// prints each result or error.
pub mod cli;
/// Provides unified error types for lexing and parsing.
///
/// # Responsibilities
/// - Defines error enums for every failure mode of the pipeline.
/// - Carries the offending character or token for user feedback.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the three stages of the pipeline. Data flows one
/// way: text, tokens, tree, number.
pub mod interpreter;

/// Every stage of one successful run through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The tokens produced by the lexer.
    pub tokens: Vec<Token>,
    /// The syntax tree built from the tokens.
    pub tree:   Node,
    /// The value of the tree.
    pub value:  f64,
}

/// Runs the whole pipeline on one input and keeps every intermediate stage.
///
/// # Errors
/// Returns [`Error::Lex`] if the text cannot be tokenized, or
/// [`Error::Parse`] if the tokens do not form exactly one expression.
///
/// # Example
/// ```
/// use calculator::evaluate_source;
///
/// let evaluation = evaluate_source("1 + 2").unwrap();
/// assert_eq!(evaluation.tokens.len(), 3);
/// assert_eq!(evaluation.tree.render(), "Addition\n+- 1\n+- 2");
/// assert_eq!(evaluation.value, 3.0);
/// ```
pub fn evaluate_source(source: &str) -> Result<Evaluation, Error> {
    let tokens = tokenize(source)?;
    let tree = parse(&tokens)?;
    let value = tree.evaluate();

    tracing::debug!(value, "evaluated expression");
    Ok(Evaluation { tokens, tree, value })
}

/// Runs the whole pipeline on one input and returns its value.
///
/// # Errors
/// Same as [`evaluate_source`].
///
/// # Examples
/// ```
/// use calculator::calculate;
///
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculate("sqrt4").unwrap(), 2.0);
///
/// // Unsupported character.
/// assert!(calculate("2 & 3").is_err());
/// ```
pub fn calculate(source: &str) -> Result<f64, Error> {
    evaluate_source(source).map(|evaluation| evaluation.value)
}

/// Formats a result with a fixed, locale-independent representation.
///
/// Finite values use `.` as the decimal separator and no digit grouping.
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
///
/// # Example
/// ```
/// use calculator::format_number;
///
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let name = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else {
        value.to_string()
    }
}
