/// Binary operator evaluation.
///
/// Implements evaluation for the arithmetic operators, including the null
/// result for non-numeric operands.
pub mod binary;

/// Core evaluation logic for statements and expressions.
///
/// Contains the program-level evaluation loop, statement dispatch, and the
/// expression evaluator.
pub mod core;

/// Object literal evaluation.
///
/// Builds object values from property lists, resolving shorthand properties
/// against the environment.
pub mod object;
