use crate::{ast::Command, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Keywords of the language.
pub const KEYWORDS: &[&str] = &["let", "const"];

/// Validates that the number of arguments matches the declared arity.
///
/// # Errors
/// Returns [`RuntimeError::ArityMismatch`] naming `signature` otherwise.
///
/// # Example
/// ```
/// use numscript::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity(&[1.0, 2.0], 2, "max(a,b)").is_ok());
/// assert!(check_arity(&[1.0], 2, "max(a,b)").is_err());
/// ```
pub fn check_arity<T>(args: &[T], expected: usize, signature: &str) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { signature: signature.to_string(),
                                          expected,
                                          found: args.len() })
    }
}

/// Returns whether `name` is reserved and cannot be declared.
///
/// Keywords and command names are reserved. Builtin function names are not:
/// a user may declare `sin(a, b)` next to the builtin `sin(a)`.
///
/// # Example
/// ```
/// use numscript::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("print"));
/// assert!(is_reserved_identifier("const"));
/// assert!(!is_reserved_identifier("sin"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    KEYWORDS.contains(&name) || Command::NAMES.contains(&name)
}
