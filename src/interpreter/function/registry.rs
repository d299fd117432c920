use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::{DeclarationKind, RuntimeError},
    interpreter::function::{
        builtin::BUILTIN_TABLE,
        core::{Function, FunctionIdentity},
    },
};

/// Table of callable functions keyed by `(name, arity)`.
///
/// Functions are kept ordered by identity, so listing them is deterministic:
/// by name, then by arity.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<FunctionIdentity, Function>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every builtin function.
    ///
    /// ## Example
    /// ```
    /// use numscript::interpreter::function::{core::FunctionIdentity, registry::FunctionRegistry};
    ///
    /// let registry = FunctionRegistry::with_builtins();
    /// let log = registry.get(&FunctionIdentity::new("log", 2)).unwrap();
    /// assert_eq!(log.signature(), "log(number,base)");
    /// assert!(registry.get(&FunctionIdentity::new("log", 3)).is_none());
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let functions = BUILTIN_TABLE.iter()
                                     .map(|b| {
                                         let function = Function::Builtin(*b);
                                         (function.identity(), function)
                                     })
                                     .collect();
        Self { functions }
    }

    /// Registers a function.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DuplicateDeclaration`] naming the signature of
    /// the rejected function if its `(name, arity)` is already registered.
    /// The registered function is left unchanged.
    pub fn add(&mut self, function: Function) -> Result<(), RuntimeError> {
        let identity = function.identity();
        if self.functions.contains_key(&identity) {
            return Err(RuntimeError::DuplicateDeclaration { kind: DeclarationKind::Function,
                                                            name: function.signature()
                                                                          .to_string(), });
        }
        debug!(%identity, signature = function.signature(), "registered function");
        self.functions.insert(identity, function);
        Ok(())
    }

    /// Looks up a function by its exact identity.
    #[must_use]
    pub fn get(&self, identity: &FunctionIdentity) -> Option<&Function> {
        self.functions.get(identity)
    }

    /// Whether a function with this identity is registered.
    #[must_use]
    pub fn contains(&self, identity: &FunctionIdentity) -> bool {
        self.functions.contains_key(identity)
    }

    /// Iterates over every registered function, ordered by identity.
    ///
    /// The iterator is lazy and can be cloned to restart from the same point.
    pub fn iter(&self) -> impl Iterator<Item = &Function> + Clone {
        self.functions.values()
    }

    /// The number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
