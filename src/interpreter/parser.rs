/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative precedence
/// levels and the mapping from operator characters to AST operators.
pub mod binary;

/// Core parsing logic and entry points.
///
/// Contains the program-level parse loop, the expression entry point, and
/// assignment parsing.
pub mod core;

/// Member access and call parsing.
///
/// Handles dot access, computed bracket access, and call argument lists,
/// including chained calls.
pub mod member;

/// Object literal parsing.
///
/// Parses brace-delimited property lists, including shorthand properties that
/// name an existing variable.
pub mod object;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: identifiers, numeric literals, and
/// parenthesized expressions.
pub mod primary;

/// Statement parsing.
///
/// Parses variable declarations and expression statements, and rejects
/// reserved keywords.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides shared helpers for identifiers, expected tokens, and
/// comma-separated lists.
pub mod utils;
