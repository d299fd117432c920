/// Core parsing entry points.
///
/// Contains the expression entry point, the program splitter and the shared
/// result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the language: additive and
/// multiplicative, both left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, names, function calls, parenthesized expressions and unary
/// minus.
pub mod primary;

/// Statement parsing.
///
/// Recognizes declarations, commands and expression statements.
pub mod statement;

/// Shared helpers for the parser, such as comma separated lists.
pub mod utils;
