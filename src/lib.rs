//! # numscript
//!
//! numscript is a small arithmetic scripting language written in Rust.
//! Programs are made of numeric expressions, variables, write-once constants
//! and single-expression functions, plus a few commands to inspect the
//! session.
//!
//! ```
//! use numscript::{
//!     Calculator,
//!     interpreter::output::{OutputEvent, RecordingOutput},
//! };
//!
//! let mut calculator = Calculator::new();
//! let mut output = RecordingOutput::default();
//!
//! calculator.execute("let x = log(8, 2)\nprint(x, x * 2)", &mut output).unwrap();
//!
//! assert_eq!(output.events, vec![OutputEvent::Value(3.0), OutputEvent::Value(6.0)]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The tree is built by the
/// parser and executed by the statement processor and the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors carry the line they were found on; runtime errors carry the
/// names and signatures involved. The `Display` text of both is what a user
/// gets to see.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, session state and
/// output to provide a complete runtime for numscript programs.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, statement processor and evaluator.
/// - Owns the per-session memory and function registry.
/// - Reports results and errors through an output sink.
pub mod interpreter;
/// General numeric helpers.
///
/// Rounding helpers used by the builtin functions.
pub mod util;

pub use interpreter::session::Calculator;
