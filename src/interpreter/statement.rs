use tracing::{debug, warn};

use crate::{
    ast::{Command, Expr, FunctionDef, Statement},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        function::{
            core::{CustomFunction, Function},
            registry::FunctionRegistry,
        },
        memory::Memory,
        output::CalculatorOutput,
    },
};

/// Runs parsed statements against a session's state.
///
/// Each statement is independent: it either commits its declaration, emits
/// its result, or reports an error through the output sink and leaves the
/// memory and registry exactly as they were.
///
/// Only fatal errors (see [`RuntimeError::is_fatal`]) are returned to the
/// caller; every other error has already been reported when `process`
/// returns `Ok`.
pub struct StatementProcessor<'s> {
    memory:    &'s mut Memory,
    functions: &'s mut FunctionRegistry,
    output:    &'s mut dyn CalculatorOutput,
}

impl<'s> StatementProcessor<'s> {
    /// Creates a processor over a session's state and output sink.
    pub fn new(memory: &'s mut Memory,
               functions: &'s mut FunctionRegistry,
               output: &'s mut dyn CalculatorOutput)
               -> Self {
        Self { memory,
               functions,
               output }
    }

    /// Executes one statement.
    ///
    /// # Errors
    /// Returns the error only if it is fatal.
    pub fn process(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Command(command) => self.command(command),
            Statement::Function(def) => self.declare_function(def),
            Statement::VariableDeclaration { name, value, line } => {
                debug!(line, %name, "variable declaration");
                self.declare(name, value, "The variable was not declared.", Memory::add_variable)
            },
            Statement::ConstantDeclaration { name, value, line } => {
                debug!(line, %name, "constant declaration");
                self.declare(name, value, "The constant was not declared.", Memory::add_constant)
            },
            Statement::Expression { expr, line } => {
                debug!(line, "expression statement");
                match self.eval(expr) {
                    Ok(value) => {
                        self.output.result(value);
                        Ok(())
                    },
                    Err(e) => self.report(e),
                }
            },
        }
    }

    fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        Evaluator::new(self.memory, self.functions).eval(expr)
    }

    fn declare(&mut self,
               name: &str,
               value: &Expr,
               not_declared: &str,
               bind: fn(&mut Memory, &str, f64) -> Result<(), RuntimeError>)
               -> Result<(), RuntimeError> {
        let value = match self.eval(value) {
            Ok(value) => value,
            Err(e) => {
                self.report(e)?;
                self.output.error(not_declared);
                return Ok(());
            },
        };

        match bind(self.memory, name, value) {
            Ok(()) => {
                debug!(name, value, "declared");
                Ok(())
            },
            Err(e) => self.report(e),
        }
    }

    fn declare_function(&mut self, def: &FunctionDef) -> Result<(), RuntimeError> {
        debug!(line = def.line, signature = %def.signature(), "function declaration");

        let result = CustomFunction::from_def(def).and_then(|custom| {
                                                       self.functions.add(Function::Custom(custom))
                                                   });
        match result {
            Ok(()) => Ok(()),
            Err(e) => self.report(e),
        }
    }

    fn command(&mut self, command: &Command) -> Result<(), RuntimeError> {
        debug!(?command, "command");

        match command {
            Command::Variables => self.output.print_variables(self.memory.variables()),
            Command::Constants => self.output.print_constants(self.memory.constants()),
            Command::Functions => {
                let signatures = self.functions
                                     .iter()
                                     .map(Function::signature)
                                     .collect::<Vec<_>>();
                self.output.print_functions(&signatures);
            },
            Command::Print(arguments) => {
                if arguments.is_empty() {
                    return self.report(RuntimeError::MissingPrintArguments);
                }
                for expr in arguments {
                    match self.eval(expr) {
                        Ok(value) => self.output.print_values(value),
                        Err(e) => return self.report(e),
                    }
                }
            },
        }

        Ok(())
    }

    /// Reports a statement that could not be parsed.
    pub fn syntax_error(&mut self, error: &ParseError) {
        self.output.error(&error.to_string());
    }

    fn report(&mut self, error: RuntimeError) -> Result<(), RuntimeError> {
        if error.is_fatal() {
            return Err(error);
        }
        warn!(%error, "statement rejected");
        self.output.error(&error.to_string());
        Ok(())
    }
}
