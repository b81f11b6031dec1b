use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::reserved_keyword,
        },
    },
};

/// Parses a primary expression: the atoms of the grammar.
///
/// Handles identifiers, numeric literals, and parenthesized expressions.
/// Numeric lexemes are converted to values here, not in the lexer.
///
/// Grammar: `primary := identifier | number | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `ExpectedToken` when a parenthesized expression is left unclosed.
/// - `ReservedKeyword` when a reserved keyword appears in expression
///   position.
/// - `UnexpectedEndOfInput` when the stream ends where an expression was
///   required.
/// - `UnexpectedToken` for any other token.
pub(in crate::interpreter::parser) fn parse_primary<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(symbol), line)) => {
            Ok(Expr::Identifier { symbol: symbol.clone(),
                                  line:   *line, })
        },

        Some((Token::Number(lexeme), line)) => {
            let value = lexeme.parse::<f64>()
                              .map_err(|_| ParseError::UnexpectedToken { token: lexeme.clone(),
                                                                         line:  *line, })?;

            Ok(Expr::NumericLiteral { value, line: *line })
        },

        Some((Token::OpenParen, line)) => {
            let expr = parse_expression(tokens)?;

            match tokens.next() {
                Some((Token::CloseParen, _)) => Ok(expr),

                Some((Token::EndOfInput, line)) => {
                    Err(ParseError::UnexpectedEndOfInput { line: *line })
                },

                Some((token, line)) => {
                    Err(ParseError::ExpectedToken { expected: "')'".to_string(),
                                                    found:    format!("{token:?}"),
                                                    line:     *line, })
                },

                None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
            }
        },

        Some((Token::EndOfInput, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),

        Some((token, line)) => match reserved_keyword(token) {
            Some(keyword) => {
                Err(ParseError::ReservedKeyword { keyword: keyword.to_string(),
                                                  line:    *line, })
            },
            None => {
                Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                  line:  *line, })
            },
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
