use numscript::{
    ast::{Expr, FunctionDef},
    error::{DeclarationKind, RuntimeError},
    interpreter::{
        evaluator::core::Evaluator,
        function::{
            core::{CustomFunction, Function, FunctionIdentity},
            registry::FunctionRegistry,
        },
        memory::{Memory, Scope},
    },
};
use pretty_assertions::assert_eq;

#[test]
fn global_scope_cannot_be_exited() {
    let mut memory = Memory::new();
    assert_eq!(memory.exit_scope(), Err(RuntimeError::CannotExitGlobalScope));
    assert_eq!(memory.depth(), 1);

    memory.enter_scope(Scope::new());
    assert_eq!(memory.depth(), 2);
    assert_eq!(memory.exit_scope(), Ok(()));
    assert_eq!(memory.exit_scope(), Err(RuntimeError::CannotExitGlobalScope));
}

#[test]
fn constants_win_lookups_in_every_scope() {
    let mut memory = Memory::new();
    memory.add_constant("K", 1.0).unwrap();
    memory.enter_scope([("K".to_string(), 2.0)].into());

    assert_eq!(memory.get_value("K"), Ok(1.0));
    assert_eq!(memory.add_variable("K", 3.0),
               Err(RuntimeError::ShadowsConstant { name: "K".to_string() }));
}

#[test]
fn variables_are_added_to_the_top_scope() {
    let mut memory = Memory::new();
    memory.enter_scope(Scope::new());
    memory.add_variable("local", 1.0).unwrap();
    memory.exit_scope().unwrap();

    assert!(!memory.has_value("local"));
    assert_eq!(memory.get_value("local"),
               Err(RuntimeError::UndefinedVariable { name: "local".to_string() }));
}

#[test]
fn duplicate_constant_keeps_first_value() {
    let mut memory = Memory::new();
    memory.add_constant("C", 1.0).unwrap();

    assert_eq!(memory.add_constant("C", 2.0),
               Err(RuntimeError::DuplicateDeclaration { kind: DeclarationKind::Constant,
                                                        name: "C".to_string(), }));
    assert_eq!(memory.get_value("C"), Ok(1.0));
}

#[test]
fn registry_holds_every_builtin() {
    let registry = FunctionRegistry::with_builtins();
    assert_eq!(registry.len(), 28);
    assert!(registry.contains(&FunctionIdentity::new("random", 0)));
    assert!(registry.contains(&FunctionIdentity::new("round", 1)));
    assert!(registry.contains(&FunctionIdentity::new("round", 2)));
    assert!(!registry.contains(&FunctionIdentity::new("round", 3)));

    let listing = registry.iter();
    assert_eq!(listing.clone().count(), listing.count());
}

#[test]
fn registry_rejects_colliding_identity() {
    let mut registry = FunctionRegistry::with_builtins();
    let sqrt = registry.get(&FunctionIdentity::new("sqrt", 1))
                       .cloned()
                       .unwrap();

    assert_eq!(registry.add(sqrt),
               Err(RuntimeError::DuplicateDeclaration { kind: DeclarationKind::Function,
                                                        name: "sqrt(a)".to_string(), }));
    assert_eq!(registry.len(), 28);
}

#[test]
fn calling_with_wrong_argument_count_fails() {
    let mut memory = Memory::new();
    let registry = FunctionRegistry::with_builtins();
    let max = registry.get(&FunctionIdentity::new("max", 2)).unwrap();
    let mut evaluator = Evaluator::new(&mut memory, &registry);

    assert!(matches!(max, Function::Builtin(_)));
    assert_eq!(max.call(&mut evaluator, vec![1.0, 5.0]), Ok(5.0));
    assert_eq!(max.call(&mut evaluator, vec![1.0]),
               Err(RuntimeError::ArityMismatch { signature: "max(a,b)".to_string(),
                                                 expected:  2,
                                                 found:     1, }));
}

#[test]
fn seeded_constants_keep_first_value() {
    let memory = Memory::with_constants(&[("A", 1.0), ("B", 2.0), ("A", 3.0)]);

    assert_eq!(memory.get_value("A"), Ok(1.0));
    assert_eq!(memory.constants().len(), 2);
    assert_eq!(memory.depth(), 1);
}

#[test]
fn empty_registry_accepts_custom_functions() {
    let mut registry = FunctionRegistry::new();
    assert!(registry.is_empty());

    let def = FunctionDef { name:   "twice".to_string(),
                            params: vec!["x".to_string()],
                            body:   Expr::Variable("x".to_string()),
                            line:   1, };
    let twice = CustomFunction::from_def(&def).unwrap();
    registry.add(Function::Custom(twice)).unwrap();

    assert!(!registry.is_empty());
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.iter().map(Function::signature).collect::<Vec<_>>(), vec!["twice(x)"]);
}
