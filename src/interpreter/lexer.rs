use logos::Logos;

use crate::error::ParseError;

/// Raw scanner output, before keyword and lexeme handling.
///
/// The raw enum only classifies spans of source text; [`tokenize`] converts
/// each raw token into a [`Token`] carrying its lexeme where one is needed
/// and appends the end-of-input marker logos itself never produces.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Integer literal tokens, a greedy run of ASCII digits such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `val`
    #[token("val")]
    Val,
    /// `cval`
    #[token("cval")]
    Cval,
    /// `gval` (reserved)
    #[token("gval")]
    Gval,
    /// `fval` (reserved)
    #[token("fval")]
    Fval,
    /// `lval` (reserved)
    #[token("lval")]
    Lval,
    /// `forLoop` (reserved)
    #[token("forLoop")]
    ForLoop,
    /// `ifElse` (reserved)
    #[token("ifElse")]
    IfElse,
    /// `tryCatch` (reserved)
    #[token("tryCatch")]
    TryCatch,
    /// `fun` (reserved)
    #[token("fun")]
    Fun,
    /// Identifier tokens; a run of alphabetic characters such as `x`.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Newlines bump the line counter and are never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by [`tokenize`].
/// Lexeme-carrying variants keep the raw source text: numeric lexemes are
/// converted to values only later, in the parser.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A numeric literal, carrying the raw digit-run lexeme.
    Number(String),
    /// A variable or symbol name.
    Identifier(String),
    /// `val`, declaring a mutable variable.
    Val,
    /// `cval`, declaring a constant variable.
    Cval,
    /// `gval`, reserved for global variables.
    Gval,
    /// `fval`, reserved for function variables.
    Fval,
    /// `lval`, reserved for local variables.
    Lval,
    /// `forLoop`, reserved for loops.
    ForLoop,
    /// `ifElse`, reserved for conditionals.
    IfElse,
    /// `tryCatch`, reserved for exception handling.
    TryCatch,
    /// `fun`, reserved for function definitions.
    Fun,
    /// One of the arithmetic operators `+ - * / %`.
    BinaryOperator(char),
    /// `=`
    Equals,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// The end-of-input marker; every token sequence ends with exactly one.
    EndOfInput,
}

/// Converts source text into a sequence of tokens with line numbers.
///
/// The scan is a single left-to-right pass. Whitespace is discarded, every
/// other character must belong to a recognized class, and the returned
/// sequence always ends with exactly one [`Token::EndOfInput`].
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] naming the character and its
/// code point when the source contains a character outside every recognized
/// class. No recovery is attempted.
///
/// # Examples
/// ```
/// use ryx::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("val x = 5;").unwrap();
///
/// assert_eq!(tokens[0].0, Token::Val);
/// assert_eq!(tokens.last().map(|(t, _)| t), Some(&Token::EndOfInput));
///
/// assert!(tokenize("5 @ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(raw) = lexer.next() {
        match raw {
            Ok(raw) => {
                let line = lexer.extras.line;
                tokens.push((convert_token(raw, lexer.slice()), line));
            },
            Err(()) => {
                let character = lexer.slice()
                                     .chars()
                                     .next()
                                     .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnrecognizedCharacter { character,
                                                               code_point: character as u32,
                                                               line: lexer.extras.line, });
            },
        }
    }

    tokens.push((Token::EndOfInput, lexer.extras.line));
    Ok(tokens)
}

/// Maps a raw scanner token to its [`Token`], attaching the lexeme where the
/// parser needs it.
fn convert_token(raw: RawToken, slice: &str) -> Token {
    match raw {
        RawToken::Number => Token::Number(slice.to_string()),
        RawToken::Identifier => Token::Identifier(slice.to_string()),
        RawToken::Val => Token::Val,
        RawToken::Cval => Token::Cval,
        RawToken::Gval => Token::Gval,
        RawToken::Fval => Token::Fval,
        RawToken::Lval => Token::Lval,
        RawToken::ForLoop => Token::ForLoop,
        RawToken::IfElse => Token::IfElse,
        RawToken::TryCatch => Token::TryCatch,
        RawToken::Fun => Token::Fun,
        RawToken::Plus => Token::BinaryOperator('+'),
        RawToken::Minus => Token::BinaryOperator('-'),
        RawToken::Star => Token::BinaryOperator('*'),
        RawToken::Slash => Token::BinaryOperator('/'),
        RawToken::Percent => Token::BinaryOperator('%'),
        RawToken::Equals => Token::Equals,
        RawToken::OpenParen => Token::OpenParen,
        RawToken::CloseParen => Token::CloseParen,
        RawToken::OpenBrace => Token::OpenBrace,
        RawToken::CloseBrace => Token::CloseBrace,
        RawToken::OpenBracket => Token::OpenBracket,
        RawToken::CloseBracket => Token::CloseBracket,
        RawToken::Dot => Token::Dot,
        RawToken::Comma => Token::Comma,
        RawToken::Colon => Token::Colon,
        RawToken::Semicolon => Token::Semicolon,
        // Both carry logos::Skip callbacks and never reach the stream.
        RawToken::NewLine | RawToken::Ignored => unreachable!(),
    }
}
