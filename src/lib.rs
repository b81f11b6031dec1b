//! # ryx
//!
//! ryx is an easy to read, expression-oriented scripting language interpreter
//! written in Rust. It parses and evaluates programs built from variable
//! declarations, arithmetic, assignments, and object literals, with
//! member-access and call syntax already in the grammar.

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

use crate::interpreter::{
    environment::EnvRef, evaluator::core::evaluate_program, parser::core::produce_ast,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and error handling to provide a complete
/// runtime for source code evaluation. It exposes the public API for
/// interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment,
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a source text to completion against an environment.
///
/// The source is tokenized, parsed into a program, and evaluated statement by
/// statement. The returned value is that of the last statement, or null for
/// an empty source. Declarations persist in `env`, so consecutive calls with
/// the same environment behave like a session.
///
/// # Errors
/// Returns the first [`ParseError`](error::ParseError) or
/// [`RuntimeError`](error::RuntimeError) raised by any phase.
///
/// # Examples
/// ```
/// use ryx::{interpreter::{environment::Environment, value::Value}, run};
///
/// let env = Environment::global();
///
/// let result = run("val price = 3 * (4 + 1); price", &env).unwrap();
/// assert_eq!(result, Value::Number(15.0));
///
/// // 'undefined' is not declared anywhere.
/// assert!(run("undefined + 1", &env).is_err());
/// ```
pub fn run(source: &str, env: &EnvRef) -> Result<Value, Box<dyn std::error::Error>> {
    let program = produce_ast(source)?;
    let value = evaluate_program(&program, env)?;

    Ok(value)
}
