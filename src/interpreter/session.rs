use std::f64::consts;

use tracing::{debug, warn};

use crate::{
    error::RuntimeError,
    interpreter::{
        function::registry::FunctionRegistry,
        lexer::tokenize,
        memory::Memory,
        output::CalculatorOutput,
        parser::core::Statements,
        statement::StatementProcessor,
    },
};

/// Constants bound in every new session.
pub const PREDEFINED_CONSTANTS: &[(&str, f64)] = &[("PI", consts::PI), ("E", consts::E)];

/// One calculator session.
///
/// A session owns its memory and function registry; declarations made by
/// one [`Calculator::execute`] call stay visible to the next. Independent
/// sessions share nothing.
///
/// ## Example
/// ```
/// use numscript::{
///     Calculator,
///     interpreter::output::{OutputEvent, RecordingOutput},
/// };
///
/// let mut calculator = Calculator::new();
/// let mut output = RecordingOutput::default();
///
/// calculator.execute("circleArea(r) = PI * r * r", &mut output).unwrap();
/// calculator.execute("circleArea(2)", &mut output).unwrap();
///
/// assert_eq!(output.events, vec![OutputEvent::Result(12.566370614359172)]);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    memory:    Memory,
    functions: FunctionRegistry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a session holding the predefined constants and the builtin
    /// functions, with an empty variable scope.
    #[must_use]
    pub fn new() -> Self {
        Self { memory:    Memory::with_constants(PREDEFINED_CONSTANTS),
               functions: FunctionRegistry::with_builtins(), }
    }

    /// Runs a program of one or more statements.
    ///
    /// Statements run in order. A statement that fails reports its error to
    /// `output` and the next statement still runs. A syntax error is reported
    /// and ends this call; statements before it have already taken effect
    /// and stay in effect.
    ///
    /// # Errors
    /// Returns a fatal [`RuntimeError`]; the rest of the program is skipped.
    pub fn execute(&mut self,
                   program: &str,
                   output: &mut dyn CalculatorOutput)
                   -> Result<(), RuntimeError> {
        let tokens = match tokenize(program) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "tokenizing failed");
                output.error(&e.to_string());
                return Ok(());
            },
        };
        debug!(count = tokens.len(), "tokenized program");

        let mut processor = StatementProcessor::new(&mut self.memory, &mut self.functions, output);
        for statement in Statements::new(&tokens) {
            match statement {
                Ok(statement) => processor.process(&statement)?,
                Err(e) => {
                    warn!(error = %e, "parsing failed");
                    processor.syntax_error(&e);
                    break;
                },
            }
        }

        Ok(())
    }

    /// The session's variables and constants.
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The session's functions.
    #[must_use]
    pub const fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }
}
