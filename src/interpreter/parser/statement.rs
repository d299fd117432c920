use std::iter::Peekable;

use crate::{
    ast::{Command, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_declared_name},
        },
    },
};

/// Parses a single statement, including its terminator.
///
/// A statement may be one of:
/// - a variable declaration (`let x = ...`),
/// - a constant declaration (`const X = ...`),
/// - a function declaration (`f(a, b) = ...`),
/// - a command (`print(...)`, `variables`, `functions`, `constants`),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
/// The statement must be followed by a newline, a `;` or the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = parse_statement_body(tokens)?;

    match tokens.next() {
        None => {},
        Some((tok, _)) if tok.is_terminator() => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                              line:  *line, });
        },
    }

    Ok(statement)
}

fn parse_statement_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_command(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a variable or constant declaration.
///
/// A declaration has the form `let <identifier> = <expression>` or
/// `const <identifier> = <expression>`. The identifier must not be a
/// reserved name.
///
/// If the next token is neither `let` nor `const`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - `=` is missing,
/// - the expression is malformed,
/// - input ends unexpectedly.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (constant, line) = match tokens.peek() {
        Some((Token::Let, line)) => (false, *line),
        Some((Token::Const, line)) => (true, *line),
        _ => return Ok(None),
    };
    tokens.next();

    let name = parse_declared_name(tokens)?;

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '=', found '{tok}'"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let value = parse_expression(tokens)?;
    if constant {
        Ok(Some(Statement::ConstantDeclaration { name, value, line }))
    } else {
        Ok(Some(Statement::VariableDeclaration { name, value, line }))
    }
}

/// Parses a function definition of the form `<name>(param1, param2, ...) =
/// <expression>`.
///
/// This function identifies a definition by checking:
/// 1. The next token is an identifier.
/// 2. It is immediately followed by `(`.
/// 3. A matching `)` exists.
/// 4. The token after the closing `)` is `=`.
///
/// If the input does not match a function definition, the function returns
/// `Ok(None)` without consuming tokens. Duplicate parameter names are not
/// checked here; they are rejected when the declaration is executed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the function or a parameter name is reserved,
/// - parameters are not plain identifiers,
/// - the body expression fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(_), line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.next(), Some((Token::LParen, _))) {
        return Ok(None);
    }

    let mut parens = 1;
    while parens > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => parens += 1,
            Some((Token::RParen, _)) => parens -= 1,
            Some((tok, _)) if tok.is_terminator() => return Ok(None),
            Some(_) => {},
            None => return Ok(None),
        }
    }
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let name = parse_declared_name(tokens)?;
    tokens.next();
    let params = parse_comma_separated(tokens, parse_declared_name, &Token::RParen)?;
    tokens.next();

    let body = parse_expression(tokens)?;
    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body,
                                              line })))
}

/// Parses a command.
///
/// `print` takes a parenthesized argument list; on its own it is a `print`
/// without arguments. The argument-less commands (`variables`, `functions`,
/// `constants`) are only recognized when they make up the whole statement;
/// otherwise the name is left for expression parsing.
fn parse_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), _)) = tokens.peek().copied() else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    let next = lookahead.peek().copied().map(|(tok, _)| tok);

    if name == "print" && matches!(next, Some(Token::LParen)) {
        tokens.next();
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Some(Statement::Command(Command::Print(arguments))));
    }

    if !next.is_none_or(Token::is_terminator) {
        return Ok(None);
    }
    if name == "print" {
        tokens.next();
        return Ok(Some(Statement::Command(Command::Print(Vec::new()))));
    }
    if let Some(command) = Command::from_name(name) {
        tokens.next();
        return Ok(Some(Statement::Command(command)));
    }

    Ok(None)
}
