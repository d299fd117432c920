/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. A parse error stops the current program; statements executed before
/// it keep their effects.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating expressions
/// or applying declarations to the session state.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{DeclarationKind, RuntimeError};
