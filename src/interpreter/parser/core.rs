use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Lazily parses a token stream into statements.
///
/// Statement terminators (newlines and `;`) between statements are skipped.
/// Input that ends in the middle of a statement is reported on the last
/// line that holds a token.
/// Each call to `next` yields either the next statement or the error that
/// stopped parsing; after an error the iterator is exhausted, so statements
/// yielded earlier can already have been executed by the caller.
///
/// ## Example
/// ```
/// use numscript::interpreter::{lexer::tokenize, parser::core::Statements};
///
/// let tokens = tokenize("let x = 1; x + 1\n\n").unwrap();
/// let statements: Vec<_> = Statements::new(&tokens).collect();
/// assert_eq!(statements.len(), 2);
/// assert!(statements.iter().all(Result::is_ok));
/// ```
pub struct Statements<'a> {
    tokens:   Peekable<std::slice::Iter<'a, (Token, usize)>>,
    end_line: usize,
    failed:   bool,
}

impl<'a> Statements<'a> {
    /// Creates a statement iterator over `tokens`.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens:   tokens.iter().peekable(),
               end_line: tokens.last().map_or(1, |(_, line)| *line),
               failed:   false, }
    }
}

impl Iterator for Statements<'_> {
    type Item = ParseResult<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some((tok, _)) = self.tokens.peek()
              && tok.is_terminator()
        {
            self.tokens.next();
        }
        self.tokens.peek()?;

        let end_line = self.end_line;
        let result = parse_statement(&mut self.tokens).map_err(|e| match e {
            // Running out of tokens is reported on the last line.
            ParseError::UnexpectedEndOfInput { .. } => {
                ParseError::UnexpectedEndOfInput { line: end_line }
            },
            e => e,
        });
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
