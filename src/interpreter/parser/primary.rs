use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_closing_paren, parse_comma_separated},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
///
/// ```text
///     primary := NUMBER
///              | "-" primary
///              | IDENT
///              | IDENT "(" arguments? ")"
///              | "(" expression ")"
/// ```
///
/// A leading minus is sugar: `-2` becomes the literal `-2`, and `-x` becomes
/// `0 - x`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Literal(*value)),
        Some((Token::Minus, _)) => match parse_primary(tokens)? {
            Expr::Literal(value) => Ok(Expr::Literal(-value)),
            operand => Ok(Expr::binary(Expr::Literal(0.0), BinaryOperator::Sub, operand)),
        },
        Some((Token::LParen, line)) => {
            let inner = parse_expression(tokens)?;
            expect_closing_paren(tokens, *line)?;
            Ok(inner)
        },
        Some((Token::Identifier(name), _)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::FunctionCall { name: name.clone(),
                                               arguments });
            }
            Ok(Expr::Variable(name.clone()))
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
