use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility backs call argument lists. It repeatedly calls `parse_item`
/// to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek()
       && token == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if token == closing => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, line)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *line });
            },
            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or {closing:?}"),
                                                       found:    format!("{token:?}"),
                                                       line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
/// This function does not check for reserved keywords; callers must handle
/// that.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `line`: Line number to report when the stream is already exhausted.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((Token::EndOfInput, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        Some((token, line)) => {
            Err(ParseError::ExpectedToken { expected: "an identifier".to_string(),
                                            found:    format!("{token:?}"),
                                            line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes one token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The token that must come next.
/// - `description`: Human-readable rendering of the expected token.
/// - `line`: Line number to report when the stream is already exhausted.
///
/// # Errors
/// Returns a `ParseError` when the next token differs from `expected` or the
/// input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((Token::EndOfInput, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        Some((token, line)) => {
            Err(ParseError::ExpectedToken { expected: description.to_string(),
                                            found:    format!("{token:?}"),
                                            line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Returns the source text of a reserved keyword token.
///
/// Reserved keywords are recognized by the lexer but have no grammar behind
/// them yet. Returns `None` for every other token.
#[must_use]
pub(in crate::interpreter::parser) const fn reserved_keyword(token: &Token) -> Option<&'static str> {
    match token {
        Token::Gval => Some("gval"),
        Token::Fval => Some("fval"),
        Token::Lval => Some("lval"),
        Token::ForLoop => Some("forLoop"),
        Token::IfElse => Some("ifElse"),
        Token::TryCatch => Some("tryCatch"),
        Token::Fun => Some("fun"),
        _ => None,
    }
}
