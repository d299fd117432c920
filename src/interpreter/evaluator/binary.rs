use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is evaluated first and an error there is returned
    /// without touching the right operand. The right operand is evaluated
    /// only after the left succeeded, and its error is returned before the
    /// operator is applied.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let lval = self.eval(left)?;
        let rval = self.eval(right)?;
        trace!(%op, lval, rval, "applying operator");

        Self::eval_binary(op, lval, rval)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by exactly zero
    /// (of either sign).
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 1.5, 2.0), Ok(-0.5));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left / right
            },
        })
    }
}
