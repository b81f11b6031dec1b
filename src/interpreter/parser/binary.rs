use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, member::parse_call_member},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        if let Some((Token::BinaryOperator(c), line)) = tokens.peek()
           && let Some(op) = binary_operator_from_char(*c)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();

            let right = parse_multiplicative(tokens)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, and `%`.
///
/// The rule is: `multiplicative := call_member (("*" | "/" | "%")
/// call_member)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining call/member-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_call_member(tokens)?;

    loop {
        if let Some((Token::BinaryOperator(c), line)) = tokens.peek()
           && let Some(op) = binary_operator_from_char(*c)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();

            let right = parse_call_member(tokens)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps an operator character to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for the five arithmetic operator characters
/// the lexer emits, and `None` for anything else.
///
/// # Parameters
/// - `c`: Character to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the character corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use ryx::{ast::BinaryOperator, interpreter::parser::binary::binary_operator_from_char};
///
/// assert_eq!(binary_operator_from_char('+'), Some(BinaryOperator::Add));
/// assert_eq!(binary_operator_from_char('='), None);
/// ```
#[must_use]
pub const fn binary_operator_from_char(c: char) -> Option<BinaryOperator> {
    match c {
        '+' => Some(BinaryOperator::Add),
        '-' => Some(BinaryOperator::Sub),
        '*' => Some(BinaryOperator::Mul),
        '/' => Some(BinaryOperator::Div),
        '%' => Some(BinaryOperator::Mod),
        _ => None,
    }
}
