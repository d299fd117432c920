/// Core evaluation logic.
///
/// Contains the `Evaluator`, which walks an expression tree against a
/// session's memory and function registry.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to evaluated operands.
pub mod binary;

/// Function call evaluation.
///
/// Evaluates arguments, resolves the callee by `(name, arity)` and runs
/// custom function bodies in their own scope.
pub mod call;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable checks shared by the evaluator and parser.
pub mod utils;
