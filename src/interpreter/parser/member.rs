use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            primary::parse_primary,
            utils::parse_comma_separated,
        },
    },
};

/// Parses a member chain with an optional trailing call.
///
/// The member chain is parsed first, so `point.moveTo(1, 2)` calls the member
/// `moveTo` rather than the object `point`.
///
/// Grammar: `call_member := member call?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let member = parse_member(tokens)?;

    if let Some((Token::OpenParen, _)) = tokens.peek() {
        return parse_call(tokens, member);
    }

    Ok(member)
}

/// Parses a call expression around an already-parsed callee.
///
/// The argument list is a comma-separated sequence of full expressions, which
/// may be empty. When another `(` immediately follows the closing one, the
/// call itself becomes the callee of a further call, so `f(1)(2)` parses as
/// `(f(1))(2)`.
///
/// Grammar: `call := "(" (expression ("," expression)*)? ")" call?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
/// - `caller`: The expression being called.
///
/// # Returns
/// An `Expr::Call` node, possibly nested for chained calls.
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the argument list
/// is left unclosed.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, caller: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = caller.line_number();
    tokens.next();

    let args = parse_comma_separated(tokens, parse_expression, &Token::CloseParen)?;
    let call = Expr::Call { caller: Box::new(caller),
                            args,
                            line };

    if let Some((Token::OpenParen, _)) = tokens.peek() {
        return parse_call(tokens, call);
    }

    Ok(call)
}

/// Parses a chain of member accesses off a primary expression.
///
/// Dot access requires a plain identifier on the right and produces a
/// non-computed member node; bracket access accepts any expression and
/// produces a computed one. Accesses chain left to right: `a.b.c` parses as
/// `(a.b).c`.
///
/// Grammar: `member := primary ("." identifier | "[" expression "]")*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::Member` chain, or the plain primary expression when no access
/// follows.
///
/// # Errors
/// - `ExpectedToken` when dot access is not followed by an identifier, or
///   when a bracket access is not closed with `]`.
/// - Propagates any errors from sub-expression parsing.
fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut object = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();

                let property = match tokens.next() {
                    Some((Token::Identifier(name), line)) => {
                        Expr::Identifier { symbol: name.clone(),
                                           line:   *line, }
                    },

                    Some((token, line)) => {
                        return Err(ParseError::ExpectedToken { expected:
                                                                   "an identifier after '.'".to_string(),
                                                               found: format!("{token:?}"),
                                                               line: *line, });
                    },

                    None => return Err(ParseError::UnexpectedEndOfInput { line }),
                };

                object = Expr::Member { object: Box::new(object),
                                        property: Box::new(property),
                                        computed: false,
                                        line };
            },

            Some((Token::OpenBracket, line)) => {
                let line = *line;
                tokens.next();

                let property = parse_expression(tokens)?;

                match tokens.next() {
                    Some((Token::CloseBracket, _)) => {},

                    Some((token, line)) => {
                        return Err(ParseError::ExpectedToken { expected: "']'".to_string(),
                                                               found:    format!("{token:?}"),
                                                               line:     *line, });
                    },

                    None => return Err(ParseError::UnexpectedEndOfInput { line }),
                }

                object = Expr::Member { object: Box::new(object),
                                        property: Box::new(property),
                                        computed: true,
                                        line };
            },

            _ => break,
        }
    }

    Ok(object)
}
