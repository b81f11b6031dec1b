use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier, reserved_keyword},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration introduced by `val` or
/// `cval`, or a standalone expression. Reserved keywords in statement
/// position are rejected immediately.
///
/// Grammar: `statement := var_declaration | expression`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statement.
///
/// # Errors
/// - `ReservedKeyword` when the statement starts with a keyword that is
///   reserved but not yet part of the language.
/// - Propagates any errors from declaration or expression parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, line)) = tokens.peek()
       && let Some(keyword) = reserved_keyword(token)
    {
        return Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                                 line:    *line, });
    }

    match tokens.peek() {
        Some((Token::Val, line)) => {
            let line = *line;
            tokens.next();
            parse_var_declaration(tokens, false, line)
        },

        Some((Token::Cval, line)) => {
            let line = *line;
            tokens.next();
            parse_var_declaration(tokens, true, line)
        },

        _ => {
            let expr = parse_expression(tokens)?;
            let line = expr.line_number();

            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses a variable declaration after its keyword has been consumed.
///
/// Syntax:
/// ```text
///     val <name> = <expression>;
///     val <name>;
///     cval <name> = <expression>;
/// ```
/// A bare `val name;` binds the name to null. Constants must carry an
/// initializer, so `cval name;` is rejected.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `val` or `cval` keyword.
/// - `constant`: Whether the declaration was introduced by `cval`.
/// - `line`: Line number of the keyword token.
///
/// # Returns
/// A `Statement::VarDeclaration` node.
///
/// # Errors
/// - `ConstantWithoutValue` for a `cval` declaration with no initializer.
/// - `ExpectedToken` when neither `=` nor `;` follows the name, or when the
///   trailing semicolon is missing.
/// - Propagates any errors from initializer parsing.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>,
                                constant: bool,
                                line: usize)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let identifier = parse_identifier(tokens, line)?;

    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();

            if constant {
                return Err(ParseError::ConstantWithoutValue { name: identifier,
                                                              line });
            }

            Ok(Statement::VarDeclaration { identifier,
                                           constant: false,
                                           value: None,
                                           line })
        },

        Some((Token::Equals, _)) => {
            tokens.next();

            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';'", line)?;

            Ok(Statement::VarDeclaration { identifier,
                                           constant,
                                           value: Some(value),
                                           line })
        },

        Some((token, line)) => {
            Err(ParseError::ExpectedToken { expected: "'=' or ';'".to_string(),
                                            found:    format!("{token:?}"),
                                            line:     *line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
