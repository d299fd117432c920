/// Built-in function table.
///
/// The fixed set of native math operations registered in every session.
pub mod builtin;

/// Function identity and the `Function` sum type.
///
/// Defines how builtin and user-declared functions are represented and
/// invoked.
pub mod core;

/// The function registry.
///
/// Stores callable functions keyed by `(name, arity)`.
pub mod registry;
