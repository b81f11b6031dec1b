#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character outside every recognized class.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Its Unicode code point.
        code_point: u32,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: String,
        /// The token actually found.
        found: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `cval` declaration was written without an initializer.
    ConstantWithoutValue {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A keyword that is reserved but not yet part of the language.
    ReservedKeyword {
        /// The reserved keyword.
        keyword: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character,
                                          code_point,
                                          line, } => {
                write!(f,
                       "Error on line {line}: Unrecognized character '{character}' (code point {code_point}).")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },

            Self::ConstantWithoutValue { name, line } => {
                write!(f, "Error on line {line}: Must assign a value to constant '{name}'.")
            },

            Self::ReservedKeyword { keyword, line } => {
                write!(f, "Error on line {line}: Keyword '{keyword}' is reserved but not yet supported.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
