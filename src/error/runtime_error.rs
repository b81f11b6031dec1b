#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that is not declared in any enclosing scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists in the same scope.
    VariableRedeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a binding declared with `cval`.
    ConstantReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment was not an identifier.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression kind the grammar accepts but the evaluator does not
    /// implement yet (member access and calls).
    UnsupportedExpression {
        /// A short description of the expression kind.
        kind: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Cannot resolve variable '{name}' as it does not exist.")
            },
            Self::VariableRedeclaration { name, line } => {
                write!(f, "Error on line {line}: Cannot declare variable '{name}' as it is already defined.")
            },
            Self::ConstantReassignment { name, line } => {
                write!(f, "Error on line {line}: Cannot reassign to variable '{name}' as it was declared constant.")
            },
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid left-hand side of assignment.")
            },
            Self::UnsupportedExpression { kind, line } => {
                write!(f, "Error on line {line}: {kind} expressions are not supported by the evaluator yet.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
