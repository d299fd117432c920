use thiserror::Error;

/// What kind of declaration collided with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A constant name that is already bound.
    Constant,
    /// A function whose `(name, arity)` is already registered.
    Function,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Function => write!(f, "Function"),
        }
    }
}

/// Represents all errors that can occur during evaluation and declaration.
///
/// The `Display` text of each variant is the message reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a name that is neither a constant nor a variable of the
    /// current scope.
    #[error("No variable with name '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not registered with that argument count.
    #[error("No such function '{name}' taking {arity} argument(s).")]
    UndefinedFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied by the call.
        arity: usize,
    },
    /// A constant or function with the same identity already exists.
    #[error("{kind} '{name}' already exists.")]
    DuplicateDeclaration {
        /// Which namespace the collision happened in.
        kind: DeclarationKind,
        /// The constant name or the function signature.
        name: String,
    },
    /// Tried to declare a variable whose name is bound as a constant.
    #[error("A constant with the name '{name}' already exists.")]
    ShadowsConstant {
        /// The name of the variable.
        name: String,
    },
    /// A function declaration lists the same parameter twice.
    #[error("Duplicate parameter '{parameter}' in function '{signature}'.")]
    DuplicateParameter {
        /// The repeated parameter name.
        parameter: String,
        /// The signature of the rejected declaration.
        signature: String,
    },
    /// A function was invoked with the wrong number of arguments.
    #[error("Function '{signature}' takes {expected} arguments, {found} provided.")]
    ArityMismatch {
        /// The signature of the called function.
        signature: String,
        /// The declared arity.
        expected:  usize,
        /// The number of arguments supplied.
        found:     usize,
    },
    /// Attempted division by zero.
    #[error("You cannot divide by 0.")]
    DivisionByZero,
    /// `print` was used without any argument.
    #[error("No arguments provided to print function.")]
    MissingPrintArguments,
    /// The scope stack was popped past the global frame.
    #[error("Attempted to exit global scope.")]
    CannotExitGlobalScope,
}

impl RuntimeError {
    /// Whether the error signals a broken interpreter invariant rather than
    /// a problem with the user's program.
    ///
    /// Fatal errors stop the whole program; all others only abandon the
    /// statement that raised them.
    ///
    /// ## Example
    /// ```
    /// use numscript::error::RuntimeError;
    ///
    /// assert!(RuntimeError::CannotExitGlobalScope.is_fatal());
    /// assert!(!RuntimeError::DivisionByZero.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CannotExitGlobalScope)
    }
}
