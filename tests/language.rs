use std::{
    f64::consts::{E, PI},
    fs,
};

use numscript::{
    Calculator,
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        output::{OutputEvent, RecordingOutput},
    },
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_corpus_runs_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let output = run(&content);
        let errors = output.errors();
        assert!(errors.is_empty(), "Script {path:?} reported errors: {errors:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> RecordingOutput {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();
    if let Err(e) = calculator.execute(src, &mut output) {
        panic!("Script failed fatally: {e}");
    }
    output
}

fn events(src: &str) -> Vec<OutputEvent> {
    run(src).events
}

fn assert_success(src: &str) {
    let output = run(src);
    let errors = output.errors();
    assert!(errors.is_empty(), "Script reported errors: {errors:?}");
}

fn assert_failure(src: &str) {
    assert!(!run(src).errors().is_empty(), "Script succeeded but was expected to fail");
}

fn single_result(src: &str) -> f64 {
    match events(src).as_slice() {
        [OutputEvent::Result(value)] => *value,
        other => panic!("Expected a single result for {src:?}, got {other:?}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12, "Expected {expected}, got {actual}");
}

#[test]
fn predefined_constants() {
    assert_eq!(events("PI\nE"), vec![OutputEvent::Result(PI), OutputEvent::Result(E)]);
}

#[test]
fn operator_precedence_and_associativity() {
    assert_eq!(single_result("2*3+4"), 10.0);
    assert_eq!(single_result("2+3*4"), 14.0);
    assert_eq!(single_result("(2+3)*4"), 20.0);
    assert_eq!(single_result("10-4-3"), 3.0);
    assert_eq!(single_result("8/4/2"), 1.0);
}

#[test]
fn unary_minus() {
    assert_eq!(single_result("-3+1"), -2.0);
    assert_eq!(single_result("-(2+3)"), -5.0);
    assert_eq!(single_result("2*-3"), -6.0);
    assert_eq!(single_result("let x = 4; -x"), -4.0);
}

#[test]
fn number_literals() {
    assert_eq!(single_result(".5"), 0.5);
    assert_eq!(single_result("2.5e2"), 250.0);
    assert_eq!(single_result("1E-1"), 0.1);
}

#[test]
fn division_by_zero_is_recoverable() {
    assert_eq!(events("1/0\n1+1"),
               vec![OutputEvent::Error("You cannot divide by 0.".to_string()),
                    OutputEvent::Result(2.0)]);
    assert_failure("let x = 0; 5 / x");
    assert_success("0 / 5");
}

#[test]
fn logarithms() {
    assert_eq!(single_result("log(8,2)"), 3.0);
    assert_close(single_result("log(E)"), 1.0);
    assert_close(single_result("log(100, 10)"), 2.0);
}

#[test]
fn builtin_functions() {
    assert_eq!(single_result("abs(-3)"), 3.0);
    assert_eq!(single_result("max(2, 7)"), 7.0);
    assert_eq!(single_result("min(2, 7)"), 2.0);
    assert_eq!(single_result("pow(2, 10)"), 1024.0);
    assert_eq!(single_result("sqrt(16)"), 4.0);
    assert_eq!(single_result("floor(2.7)"), 2.0);
    assert_eq!(single_result("ceil(2.2)"), 3.0);
    assert_eq!(single_result("round(2.5)"), 3.0);
    assert_eq!(single_result("round(-2.5)"), -2.0);
    assert_eq!(single_result("round(3.14159, 2)"), 3.14);
    assert_eq!(single_result("rint(2.5)"), 2.0);
    assert_eq!(single_result("signum(-4)"), -1.0);
    assert_eq!(single_result("signum(0)"), 0.0);
    assert_close(single_result("toDegrees(PI)"), 180.0);
    assert_close(single_result("root(27, 3)"), 3.0);
    assert_close(single_result("sin(PI / 2)"), 1.0);
    assert_close(single_result("toRadians(180)"), PI);

    let random = single_result("random()");
    assert!((0.0..1.0).contains(&random), "random() returned {random}");
}

#[test]
fn constant_redeclaration_is_rejected() {
    assert_eq!(events("const PI = 3\nPI"),
               vec![OutputEvent::Error("Constant 'PI' already exists.".to_string()),
                    OutputEvent::Result(PI)]);
}

#[test]
fn constants_cannot_be_shadowed() {
    assert_eq!(events("const K = 2\nlet K = 3\nK"),
               vec![OutputEvent::Error("A constant with the name 'K' already exists."
                                           .to_string()),
                    OutputEvent::Result(2.0)]);
}

#[test]
fn variables_can_be_rebound() {
    assert_eq!(single_result("let x = 1\nlet x = x + 1\nx"), 2.0);
}

#[test]
fn failed_declaration_leaves_memory_untouched() {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();
    calculator.execute("let y = nope + 1\nconst Z = 1 / 0", &mut output)
              .unwrap();

    assert_eq!(output.errors(),
               vec!["No variable with name 'nope'.",
                    "The variable was not declared.",
                    "You cannot divide by 0.",
                    "The constant was not declared."]);
    assert!(!calculator.memory().has_value("y"));
    assert!(!calculator.memory().has_value("Z"));
}

#[test]
fn custom_function_declaration_and_call() {
    let src = "circleArea(r) = PI * r * r\ncircleArea(2)";
    assert_eq!(single_result(src), 12.566370614359172);
}

#[test]
fn custom_function_cannot_see_caller_variables() {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();
    calculator.execute("let x = 5\nf(y) = x + y\nf(1)\nx", &mut output)
              .unwrap();

    assert_eq!(output.events,
               vec![OutputEvent::Error("No variable with name 'x'.".to_string()),
                    OutputEvent::Result(5.0)]);
    assert_eq!(calculator.memory().depth(), 1);
}

#[test]
fn nested_custom_calls() {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();
    calculator.execute("sq(x) = x * x\nsumsq(a, b) = sq(a) + sq(b)\nsumsq(3, 4)",
                       &mut output)
              .unwrap();

    assert_eq!(output.events, vec![OutputEvent::Result(25.0)]);
    assert_eq!(calculator.memory().depth(), 1);
    assert!(calculator.memory().variables().is_empty());
}

#[test]
fn duplicate_parameters_are_rejected() {
    assert_eq!(output_errors("g(a,a) = a\ng(1,1)"),
               vec!["Duplicate parameter 'a' in function 'g(a,a)'.",
                    "No such function 'g' taking 2 argument(s)."]);
}

#[test]
fn function_collisions_keep_the_registered_function() {
    assert_eq!(events("sin(x) = x + 1\nsin(0)"),
               vec![OutputEvent::Error("Function 'sin(x)' already exists.".to_string()),
                    OutputEvent::Result(0.0)]);
    assert_eq!(events("f(x) = x\nf(y) = 2 * y\nf(3)"),
               vec![OutputEvent::Error("Function 'f(y)' already exists.".to_string()),
                    OutputEvent::Result(3.0)]);
}

#[test]
fn functions_overload_by_arity() {
    assert_eq!(single_result("sin(a, b) = a + b\nsin(1, 2)"), 3.0);
    assert_eq!(events("f(x) = x\nf(x, y) = x * y\nf(3)\nf(3, 4)"),
               vec![OutputEvent::Result(3.0), OutputEvent::Result(12.0)]);
}

#[test]
fn undefined_function() {
    assert_eq!(output_errors("nope(1)\nlog(1, 2, 3)"),
               vec!["No such function 'nope' taking 1 argument(s).",
                    "No such function 'log' taking 3 argument(s)."]);
}

#[test]
fn print_stops_at_first_error() {
    assert_eq!(events("print(1, 1/0, 2)"),
               vec![OutputEvent::Value(1.0),
                    OutputEvent::Error("You cannot divide by 0.".to_string())]);
    assert_eq!(events("print(1, 2 * 3)"),
               vec![OutputEvent::Value(1.0), OutputEvent::Value(6.0)]);
}

#[test]
fn print_without_arguments() {
    assert_eq!(output_errors("print()"), vec!["No arguments provided to print function."]);
    assert_eq!(output_errors("print\nprint; 1"),
               vec!["No arguments provided to print function.",
                    "No arguments provided to print function."]);
}

#[test]
fn variables_command_lists_current_scope() {
    assert_eq!(events("let b = 2\nlet a = 1\nvariables"),
               vec![OutputEvent::Variables(vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)])]);
}

#[test]
fn constants_command() {
    assert_eq!(events("const TAU = 2 * PI\nconstants"),
               vec![OutputEvent::Constants(vec![("E".to_string(), E),
                                                ("PI".to_string(), PI),
                                                ("TAU".to_string(), 2.0 * PI)])]);
}

#[test]
fn functions_command() {
    let events = events("area(r) = r * r\nfunctions");
    let [OutputEvent::Functions(signatures)] = events.as_slice() else {
        panic!("Expected a function listing, got {events:?}");
    };

    assert_eq!(signatures.len(), 29);
    assert_eq!(signatures[0], "abs(a)");
    assert!(signatures.contains(&"area(r)".to_string()));
    assert!(signatures.contains(&"log(number)".to_string()));
    assert!(signatures.contains(&"log(number,base)".to_string()));
    assert!(signatures.contains(&"random()".to_string()));
}

#[test]
fn parse_error_keeps_earlier_statements() {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();
    calculator.execute("let a = 1\nlet b = (2\nlet c = 3", &mut output)
              .unwrap();

    assert_eq!(output.errors(),
               vec!["Error on line 2: Expected closing parenthesis ')' but none found."]);
    assert!(calculator.memory().has_value("a"));
    assert!(!calculator.memory().has_value("b"));
    assert!(!calculator.memory().has_value("c"));
}

#[test]
fn unexpected_end_of_input_reports_last_line() {
    assert_eq!(output_errors("let a = 1\nlet b = 2\n1 +"),
               vec!["Error on line 3: Unexpected end of input."]);
    assert_eq!(output_errors("\n\nprint(1,"), vec!["Error on line 3: Unexpected end of input."]);
    assert_eq!(output_errors("let x"), vec!["Error on line 1: Unexpected end of input."]);
}

#[test]
fn parse_errors_show_source_text() {
    assert_eq!(output_errors("1 +\n2"), vec!["Error on line 1: Unexpected token: end of line."]);
    assert_eq!(output_errors("1 x"),
               vec!["Error on line 1: Extra tokens after statement. Check your input: x"]);
    assert_eq!(output_errors("let y 2"),
               vec!["Error on line 1: Unexpected token: expected '=', found '2'."]);
    assert_eq!(output_errors("max(1 2)"),
               vec!["Error on line 1: Unexpected token: expected ',' or ')', found '2'."]);
}

#[test]
fn lexical_errors() {
    assert_eq!(output_errors("2 # 3"), vec!["Error on line 1: Unexpected token: #."]);
    assert_eq!(output_errors("1\n1e999"),
               vec!["Error on line 2: Invalid numeric literal '1e999'."]);

    let error = tokenize("1\n\n2 $").unwrap_err();
    assert_eq!(error, ParseError::UnexpectedToken { token: "$".to_string(),
                                                    line:  3, });
    assert_eq!(error.line(), 3);
}

#[test]
fn reserved_identifiers_cannot_be_declared() {
    assert_eq!(output_errors("let print = 1"),
               vec!["Error on line 1: Identifier print is reserved."]);
    assert_failure("const variables = 1");
    assert_failure("functions(x) = x");
    assert_failure("f(let) = 1");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_failure("1 2");
    assert_failure("let x = 1 )");
}

#[test]
fn statement_separators_and_comments() {
    assert_eq!(events("let a = 2; let b = 3 // both\n\n// nothing here\na * b;"),
               vec![OutputEvent::Result(6.0)]);
    assert_success("");
    assert_success("\n;\n// only a comment");
}

#[test]
fn declarations_persist_between_executions() {
    let mut calculator = Calculator::new();
    let mut output = RecordingOutput::default();

    calculator.execute("let x = 3", &mut output).unwrap();
    calculator.execute("double(n) = n * 2", &mut output).unwrap();
    calculator.execute("double(x)", &mut output).unwrap();
    assert_eq!(output.take(), vec![OutputEvent::Result(6.0)]);

    calculator.execute("let x = double(x)\nx", &mut output).unwrap();
    assert_eq!(output.take(), vec![OutputEvent::Result(6.0)]);
    assert!(output.events.is_empty());
}

#[test]
fn sessions_are_independent() {
    let mut first = Calculator::new();
    let mut second = Calculator::new();
    let mut output = RecordingOutput::default();

    first.execute("let x = 1\nconst K = 2\nf(a) = a", &mut output)
         .unwrap();
    second.execute("x\nK\nf(1)", &mut output).unwrap();

    assert_eq!(output.errors(),
               vec!["No variable with name 'x'.",
                    "No variable with name 'K'.",
                    "No such function 'f' taking 1 argument(s)."]);
}

fn output_errors(src: &str) -> Vec<String> {
    run(src).errors().into_iter().map(ToString::to_string).collect()
}
