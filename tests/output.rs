use numscript::{
    Calculator,
    interpreter::output::{CalculatorOutput, ConsoleOutput},
};
use pretty_assertions::assert_eq;

fn render(src: &str, color: bool) -> String {
    let mut calculator = Calculator::new();
    let mut output = ConsoleOutput::new(Vec::new(), color);
    if let Err(e) = calculator.execute(src, &mut output) {
        panic!("Script failed fatally: {e}");
    }
    String::from_utf8(output.into_inner()).expect("console output is UTF-8")
}

#[test]
fn plain_results_and_errors() {
    assert_eq!(render("2 * 3\n1 / 0\nprint(1.5, -2)", false),
               "6\nYou cannot divide by 0.\n1.5\n-2\n");
}

#[test]
fn variables_are_listed_sorted_by_name() {
    assert_eq!(render("let b = 2\nlet c = 0.5\nlet a = 1\nvariables", false),
               "Variables:\n    a = 1\n    b = 2\n    c = 0.5\n");
}

#[test]
fn constants_are_listed_sorted_by_name() {
    assert_eq!(render("const G = 9.81\nconstants", false),
               "Constants:\n    E = 2.718281828459045\n    G = 9.81\n    PI = \
                3.141592653589793\n");
}

#[test]
fn functions_are_listed_by_signature() {
    let text = render("area(w, h) = w * h\nfunctions", false);
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("Functions:"));
    assert_eq!(lines.next(), Some("    abs(a)"));
    assert_eq!(lines.next(), Some("    acos(a)"));
    assert_eq!(lines.next(), Some("    area(w,h)"));
    assert!(text.contains("\n    log(number)\n    log(number,base)\n"));
    assert_eq!(text.lines().count(), 30);
}

#[test]
fn empty_listing_prints_only_the_header() {
    assert_eq!(render("variables", false), "Variables:\n");
}

#[test]
fn colored_output_wraps_text_in_escape_codes() {
    colored::control::set_override(true);

    let mut output = ConsoleOutput::new(Vec::new(), true);
    output.error("bad");
    output.result(4.0);
    let text = String::from_utf8(output.into_inner()).expect("console output is UTF-8");

    colored::control::unset_override();

    assert!(text.contains("\u{1b}["), "expected ANSI escapes in {text:?}");
    assert!(text.contains("bad") && text.contains('4'));
    assert_ne!(text, "bad\n4\n");
}
