use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{function::registry::FunctionRegistry, memory::Memory},
};

/// Result type used by the evaluator.
///
/// Every evaluation step returns either a value of type `T` or the
/// `RuntimeError` describing why it failed. Errors are plain values; nothing
/// in evaluation panics or unwinds.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees for one calculator session.
///
/// The evaluator borrows the session's memory mutably, because custom
/// function calls push and pop scopes, and the function registry shared,
/// because evaluation never declares functions.
///
/// ## Usage
///
/// An `Evaluator` is cheap: build one around the session state whenever an
/// expression needs evaluating.
///
/// ```
/// use numscript::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         evaluator::core::Evaluator, function::registry::FunctionRegistry, memory::Memory,
///     },
/// };
///
/// let mut memory = Memory::new();
/// let functions = FunctionRegistry::with_builtins();
/// let mut evaluator = Evaluator::new(&mut memory, &functions);
///
/// let product = Expr::binary(Expr::Literal(2.0), BinaryOperator::Mul, Expr::Literal(3.0));
/// let sum = Expr::binary(product, BinaryOperator::Add, Expr::Literal(4.0));
///
/// assert_eq!(evaluator.eval(&sum).unwrap(), 10.0);
/// ```
pub struct Evaluator<'s> {
    pub(crate) memory:    &'s mut Memory,
    pub(crate) functions: &'s FunctionRegistry,
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator over a session's state.
    #[must_use]
    pub fn new(memory: &'s mut Memory, functions: &'s FunctionRegistry) -> Self {
        Self { memory, functions }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node kind: literals evaluate to themselves, names
    /// resolve through memory, binary operations evaluate left then right,
    /// and calls dispatch through the function registry.
    ///
    /// # Errors
    /// The first error raised anywhere in the tree, unchanged.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Variable(name) => self.memory.get_value(name),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }
}
