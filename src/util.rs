/// Numeric helpers.
///
/// Rounding and sign conventions used by the builtin functions where the
/// language's semantics differ from the `f64` methods of the same name.
pub mod num;
