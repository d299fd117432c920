use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::check_arity,
    },
};

/// Signature of a native builtin operation.
///
/// The slice always holds exactly as many arguments as the builtin's arity.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// The key functions are registered and looked up by.
///
/// Two functions with the same name but a different arity are distinct
/// (`log(x)` and `log(x, base)`); the same name and arity collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionIdentity {
    /// The function name.
    pub name:  String,
    /// The number of parameters.
    pub arity: usize,
}

impl FunctionIdentity {
    /// Creates an identity from a name and an arity.
    #[must_use]
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self { name: name.into(),
               arity }
    }
}

impl std::fmt::Display for FunctionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// A native math operation shipped with every session.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The function name.
    pub name:      &'static str,
    /// The number of parameters.
    pub arity:     usize,
    /// Human readable call shape, e.g. `log(number,base)`.
    pub signature: &'static str,
    /// The native implementation.
    pub operation: BuiltinFn,
}

/// A single-expression function declared by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFunction {
    name:      String,
    params:    Vec<String>,
    body:      Expr,
    signature: String,
}

impl CustomFunction {
    /// Builds a custom function from a parsed declaration.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DuplicateParameter`] naming the first repeated
    /// parameter and the declaration's signature.
    ///
    /// ## Example
    /// ```
    /// use numscript::{
    ///     ast::{Expr, FunctionDef},
    ///     error::RuntimeError,
    ///     interpreter::function::core::CustomFunction,
    /// };
    ///
    /// let def = FunctionDef { name:   "g".to_string(),
    ///                         params: vec!["a".to_string(), "a".to_string()],
    ///                         body:   Expr::Variable("a".to_string()),
    ///                         line:   1, };
    ///
    /// let err = CustomFunction::from_def(&def).unwrap_err();
    /// assert_eq!(err,
    ///            RuntimeError::DuplicateParameter { parameter: "a".to_string(),
    ///                                               signature: "g(a,a)".to_string(), });
    /// ```
    pub fn from_def(def: &FunctionDef) -> Result<Self, RuntimeError> {
        let signature = def.signature();

        for (i, param) in def.params.iter().enumerate() {
            if def.params[..i].contains(param) {
                return Err(RuntimeError::DuplicateParameter { parameter: param.clone(),
                                                              signature });
            }
        }

        Ok(Self { name: def.name.clone(),
                  params: def.params.clone(),
                  body: def.body.clone(),
                  signature })
    }

    /// The parameter names in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The body expression, exactly as declared.
    #[must_use]
    pub const fn body(&self) -> &Expr {
        &self.body
    }
}

/// A callable function: either a native builtin or a user declaration.
#[derive(Debug, Clone)]
pub enum Function {
    /// A predefined native math operation.
    Builtin(Builtin),
    /// A user-declared single-expression function.
    Custom(CustomFunction),
}

impl Function {
    /// The function name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(b) => b.name,
            Self::Custom(c) => &c.name,
        }
    }

    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Builtin(b) => b.arity,
            Self::Custom(c) => c.params.len(),
        }
    }

    /// The human readable call shape, used for introspection only.
    #[must_use]
    pub fn signature(&self) -> &str {
        match self {
            Self::Builtin(b) => b.signature,
            Self::Custom(c) => &c.signature,
        }
    }

    /// The `(name, arity)` key of the function.
    #[must_use]
    pub fn identity(&self) -> FunctionIdentity {
        FunctionIdentity::new(self.name(), self.arity())
    }

    /// Invokes the function with already evaluated arguments.
    ///
    /// Builtins run their native operation directly. Custom functions
    /// evaluate their body through `evaluator` inside a fresh scope holding
    /// the arguments bound to the parameter names.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ArityMismatch`] if `arguments` does not match
    /// the arity, or any error raised while evaluating a custom body.
    pub fn call(&self, evaluator: &mut Evaluator<'_>, arguments: Vec<f64>) -> EvalResult<f64> {
        check_arity(&arguments, self.arity(), self.signature())?;

        match self {
            Self::Builtin(builtin) => Ok((builtin.operation)(&arguments)),
            Self::Custom(custom) => evaluator.call_custom(custom, arguments),
        }
    }
}
