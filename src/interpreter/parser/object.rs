use std::iter::Peekable;

use crate::{
    ast::{Expr, Property},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses an object literal, or falls through to the additive level.
///
/// Syntax:
/// ```text
///     { key: <expression>, other: <expression> }
///     { key }
///     {}
/// ```
/// A property without a value expression is shorthand for `key: key`; the
/// value is looked up in the environment when the literal is evaluated.
/// Trailing commas are accepted.
///
/// Grammar: `object := "{" (property ("," property)* ","?)? "}" | additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::ObjectLiteral` node, or whatever the additive level produces
/// when the next token is not `{`.
///
/// # Errors
/// - `ExpectedToken` when a property key is not an identifier, or when a
///   property is not followed by `:`, `,`, or `}`.
/// - `UnexpectedEndOfInput` when the literal is left unclosed.
/// - Propagates any errors from value expression parsing.
pub fn parse_object<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.peek() {
        Some((Token::OpenBrace, line)) => *line,
        _ => return parse_additive(tokens),
    };
    tokens.next();

    let mut properties = Vec::new();

    while !matches!(tokens.peek(), Some((Token::CloseBrace, _))) {
        let (key, key_line) = match tokens.next() {
            Some((Token::Identifier(name), line)) => (name.clone(), *line),

            Some((Token::EndOfInput, line)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *line });
            },

            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: "a property name".to_string(),
                                                       found:    format!("{token:?}"),
                                                       line:     *line, });
            },

            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        };

        match tokens.peek() {
            // Shorthand property followed by more properties.
            Some((Token::Comma, _)) => {
                tokens.next();
                properties.push(Property { key,
                                           value: None,
                                           line: key_line });
            },

            // Shorthand property closing the literal.
            Some((Token::CloseBrace, _)) => {
                properties.push(Property { key,
                                           value: None,
                                           line: key_line });
            },

            Some((Token::Colon, _)) => {
                tokens.next();

                let value = parse_expression(tokens)?;
                properties.push(Property { key,
                                           value: Some(value),
                                           line: key_line });

                match tokens.peek() {
                    Some((Token::Comma, _)) => {
                        tokens.next();
                    },
                    Some((Token::CloseBrace, _)) => {},
                    Some((Token::EndOfInput, line)) => {
                        return Err(ParseError::UnexpectedEndOfInput { line: *line });
                    },
                    Some((token, line)) => {
                        return Err(ParseError::ExpectedToken { expected: "',' or '}'".to_string(),
                                                               found:    format!("{token:?}"),
                                                               line:     *line, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput { line: key_line }),
                }
            },

            Some((Token::EndOfInput, line)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *line });
            },

            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: "':', ',' or '}'".to_string(),
                                                       found:    format!("{token:?}"),
                                                       line:     *line, });
            },

            None => return Err(ParseError::UnexpectedEndOfInput { line: key_line }),
        }
    }
    tokens.next();

    Ok(Expr::ObjectLiteral { properties, line })
}
