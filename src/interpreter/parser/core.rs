use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{object::parse_object, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete source text into a [`Program`].
///
/// This is the entry point of the parser. The source is tokenized, then
/// statements are parsed left to right until the end-of-input marker. Stray
/// semicolons between statements are skipped.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The parsed program with its statements in source order.
///
/// # Errors
/// Returns a `ParseError` when tokenization fails or any statement is
/// malformed.
///
/// # Example
/// ```
/// use ryx::interpreter::parser::core::produce_ast;
///
/// let program = produce_ast("val x = 2 + 3;").unwrap();
///
/// assert_eq!(program.body.len(), 1);
/// assert!(produce_ast("val = 5;").is_err());
/// ```
pub fn produce_ast(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let mut tokens = tokens.iter().peekable();
    let mut body = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::EndOfInput, _)) | None => break,
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some(_) => body.push(parse_statement(&mut tokens)?),
        }
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = 5` assigns `5` to `b` and then
/// the result to `a`. The left-hand side is parsed as a full expression and
/// only checked for being a valid target at evaluation time.
///
/// Grammar: `assignment := object ("=" assignment)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::Assignment` node, or the plain left-hand expression when no `=`
/// follows.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_object(tokens)?;

    if let Some((Token::Equals, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens)?;

        return Ok(Expr::Assignment { target: Box::new(left),
                                     value: Box::new(value),
                                     line });
    }

    Ok(left)
}
