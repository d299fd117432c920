use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        function::core::{CustomFunction, FunctionIdentity},
        memory::Scope,
    },
};

impl Evaluator<'_> {
    /// Evaluates a function call expression.
    ///
    /// Arguments are evaluated left to right; the first failing argument
    /// ends the call with its error. The callee is then resolved by name and
    /// argument count, so `log(x)` and `log(x, b)` reach different functions.
    ///
    /// # Errors
    /// - the first argument error,
    /// - [`RuntimeError::UndefinedFunction`] if no function has that name and
    ///   arity,
    /// - any error raised by the function itself.
    pub(crate) fn eval_function_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        let identity = FunctionIdentity::new(name, args.len());
        let functions = self.functions;
        let function =
            functions.get(&identity)
                     .ok_or_else(|| RuntimeError::UndefinedFunction { name:  name.to_string(),
                                                                      arity: args.len(), })?;

        trace!(%identity, "calling function");
        function.call(self, args)
    }

    /// Executes a custom function body.
    ///
    /// Exactly one scope is pushed, holding the parameters bound positionally
    /// to `arguments`. The scope is popped again whether or not the body
    /// succeeded. A failure to pop is an interpreter defect and takes
    /// precedence over the body's result.
    pub(crate) fn call_custom(&mut self,
                              function: &CustomFunction,
                              arguments: Vec<f64>)
                              -> EvalResult<f64> {
        let bindings = function.params()
                               .iter()
                               .cloned()
                               .zip(arguments)
                               .collect::<Scope>();

        self.memory.enter_scope(bindings);
        let result = self.eval(function.body());
        self.memory.exit_scope()?;

        result
    }
}
