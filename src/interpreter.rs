/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks an expression, resolving names through the session
/// memory and calls through the function registry. Every failure is returned
/// as a [`RuntimeError`](crate::error::RuntimeError) value.
///
/// # Responsibilities
/// - Applies the arithmetic operators, rejecting division by zero.
/// - Dispatches calls by name and argument count.
/// - Runs custom function bodies inside their own scope.
pub mod evaluator;
/// Builtin and user-declared functions and the registry holding them.
pub mod function;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// tagged with the line it was found on. This is the first stage of
/// interpretation.
pub mod lexer;
/// Variable scopes and constants.
pub mod memory;
/// Output sinks a session reports to.
///
/// Defines the [`CalculatorOutput`](output::CalculatorOutput) trait together
/// with a coloured console sink and a recording sink.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// statements and expression trees, folding operator precedence into the
/// tree shape.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Rejects malformed input and reserved names, reporting the line.
pub mod parser;
/// Calculator sessions and the `execute` entry point.
pub mod session;
/// Executes one parsed statement against a session.
pub mod statement;
