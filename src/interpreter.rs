/// The environment module manages variable scopes and bindings.
///
/// Environments map names to runtime values and form a parent-linked chain
/// from the innermost scope out to the global scope. Declaration, lookup, and
/// reassignment all pass through this module, which also enforces constant
/// bindings.
///
/// # Responsibilities
/// - Stores variable bindings and tracks which are constants.
/// - Resolves names by walking the scope chain outward.
/// - Rejects redeclarations and constant reassignment with runtime errors.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// reads and writes variable state through the environment, and produces
/// runtime values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies declarations and assignments to the active environment.
/// - Reports runtime errors such as unknown variables or constant
///   reassignment.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line
///   information.
/// - Distinguishes keywords from plain identifiers.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar, reporting errors with location info.
/// - Supports declarations, arithmetic, assignments, object literals, and
///   member/call syntax.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types produced during execution:
/// numbers, booleans, null, and objects. Values are plain data and carry no
/// reference back to the environment that produced them.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversions, accessors, and display formatting.
pub mod value;
