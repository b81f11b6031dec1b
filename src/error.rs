/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens,
/// missing delimiters, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors cover both scope failures (unknown variables, redeclaration,
/// constant reassignment) and evaluation failures (invalid assignment
/// targets, unsupported expression kinds).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
