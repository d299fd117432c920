use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::error::{DeclarationKind, RuntimeError};

/// One frame of variable bindings.
pub type Scope = HashMap<String, f64>;

/// Stores the variables and constants of a calculator session.
///
/// Variables live on a stack of scopes. The bottom frame is the global scope
/// and is never removed; every custom function call pushes one frame holding
/// its arguments and pops it when the call returns.
///
/// Constants live in a single flat table shared by every frame. They are
/// write-once and always win lookups, so a name bound as a constant can never
/// be declared as a variable.
///
/// Lookups only inspect the topmost frame: a function body sees its own
/// parameters and the constants, never the caller's variables.
#[derive(Debug, Clone)]
pub struct Memory {
    scope_stack: Vec<Scope>,
    constants:   BTreeMap<String, f64>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a memory with an empty global scope and no constants.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![Scope::new()],
               constants:   BTreeMap::new(), }
    }

    /// Creates a memory with an empty global scope and the given constants.
    ///
    /// If a name appears more than once, the first value is kept.
    ///
    /// ## Example
    /// ```
    /// use numscript::interpreter::memory::Memory;
    ///
    /// let memory = Memory::with_constants(&[("ONE", 1.0), ("TWO", 2.0)]);
    /// assert_eq!(memory.get_value("TWO").unwrap(), 2.0);
    /// assert!(memory.variables().is_empty());
    /// ```
    #[must_use]
    pub fn with_constants(constants: &[(&str, f64)]) -> Self {
        let mut memory = Self::new();
        for (name, value) in constants {
            memory.constants.entry((*name).to_string()).or_insert(*value);
        }
        memory
    }

    /// Binds a new constant.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DuplicateDeclaration`] if the name is already a
    /// constant. The existing value is left untouched.
    ///
    /// ## Example
    /// ```
    /// use numscript::interpreter::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.add_constant("TAU", std::f64::consts::TAU).unwrap();
    /// assert!(memory.add_constant("TAU", 6.0).is_err());
    /// assert_eq!(memory.get_value("TAU").unwrap(), std::f64::consts::TAU);
    /// ```
    pub fn add_constant(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        if self.constants.contains_key(name) {
            return Err(RuntimeError::DuplicateDeclaration { kind: DeclarationKind::Constant,
                                                            name: name.to_string(), });
        }
        self.constants.insert(name.to_string(), value);
        Ok(())
    }

    /// Binds or rebinds a variable in the current (topmost) scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ShadowsConstant`] if the name is a constant.
    pub fn add_variable(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        if self.constants.contains_key(name) {
            return Err(RuntimeError::ShadowsConstant { name: name.to_string() });
        }
        self.current_scope_mut().insert(name.to_string(), value);
        Ok(())
    }

    /// Looks up a name.
    ///
    /// Constants are checked first, then the topmost scope only.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if neither holds the name.
    ///
    /// ## Example
    /// ```
    /// use numscript::interpreter::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.add_variable("x", 5.0).unwrap();
    /// memory.enter_scope([("y".to_string(), 1.0)].into());
    ///
    /// assert_eq!(memory.get_value("y").unwrap(), 1.0);
    /// assert!(memory.get_value("x").is_err());
    ///
    /// memory.exit_scope().unwrap();
    /// assert_eq!(memory.get_value("x").unwrap(), 5.0);
    /// ```
    pub fn get_value(&self, name: &str) -> Result<f64, RuntimeError> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Whether [`Memory::get_value`] would succeed for `name`.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Pushes a new scope pre-populated with `bindings`.
    pub fn enter_scope(&mut self, bindings: Scope) {
        self.scope_stack.push(bindings);
        trace!(depth = self.scope_stack.len(), "entered scope");
    }

    /// Pops the topmost scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::CannotExitGlobalScope`] if only the global
    /// scope remains; the stack is left unchanged.
    pub fn exit_scope(&mut self) -> Result<(), RuntimeError> {
        if self.scope_stack.len() == 1 {
            return Err(RuntimeError::CannotExitGlobalScope);
        }
        self.scope_stack.pop();
        trace!(depth = self.scope_stack.len(), "exited scope");
        Ok(())
    }

    /// The number of frames on the scope stack; at least 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// The bindings of the current scope.
    #[must_use]
    pub fn variables(&self) -> &Scope {
        self.current_scope()
    }

    /// Every constant, ordered by name.
    #[must_use]
    pub const fn constants(&self) -> &BTreeMap<String, f64> {
        &self.constants
    }

    fn lookup(&self, name: &str) -> Option<f64> {
        self.constants
            .get(name)
            .or_else(|| self.current_scope().get(name))
            .copied()
    }

    // The global frame is never popped, so the stack is never empty.
    fn current_scope(&self) -> &Scope {
        let top = self.scope_stack.len() - 1;
        &self.scope_stack[top]
    }

    fn current_scope_mut(&mut self) -> &mut Scope {
        let top = self.scope_stack.len() - 1;
        &mut self.scope_stack[top]
    }
}
