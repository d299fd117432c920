use std::{
    collections::{BTreeMap, HashMap},
    io::{self, Write},
};

use colored::Colorize;

/// Receives everything a calculator session reports.
///
/// The session only ever calls into the sink; a sink never calls back into
/// the session.
pub trait CalculatorOutput {
    /// A statement failed, or a note about a failure.
    fn error(&mut self, message: &str);

    /// An expression statement produced a value.
    fn result(&mut self, value: f64);

    /// The `functions` command: one signature per registered function.
    fn print_functions(&mut self, signatures: &[&str]);

    /// The `variables` command: the bindings of the current scope.
    fn print_variables(&mut self, variables: &HashMap<String, f64>);

    /// The `constants` command: every constant.
    fn print_constants(&mut self, constants: &BTreeMap<String, f64>);

    /// One successfully evaluated argument of the `print` command.
    fn print_values(&mut self, value: f64);
}

/// One call made on a [`RecordingOutput`].
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    /// See [`CalculatorOutput::error`].
    Error(String),
    /// See [`CalculatorOutput::result`].
    Result(f64),
    /// See [`CalculatorOutput::print_functions`].
    Functions(Vec<String>),
    /// See [`CalculatorOutput::print_variables`], sorted by name.
    Variables(Vec<(String, f64)>),
    /// See [`CalculatorOutput::print_constants`].
    Constants(Vec<(String, f64)>),
    /// See [`CalculatorOutput::print_values`].
    Value(f64),
}

/// A sink that records every call, for embedding and tests.
///
/// ## Example
/// ```
/// use numscript::interpreter::{
///     output::{OutputEvent, RecordingOutput},
///     session::Calculator,
/// };
///
/// let mut calculator = Calculator::new();
/// let mut output = RecordingOutput::default();
/// calculator.execute("2 * 3 + 4", &mut output).unwrap();
///
/// assert_eq!(output.events, vec![OutputEvent::Result(10.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    /// Recorded calls, oldest first.
    pub events: Vec<OutputEvent>,
}

impl RecordingOutput {
    /// The recorded error messages, oldest first.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<OutputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl CalculatorOutput for RecordingOutput {
    fn error(&mut self, message: &str) {
        self.events.push(OutputEvent::Error(message.to_string()));
    }

    fn result(&mut self, value: f64) {
        self.events.push(OutputEvent::Result(value));
    }

    fn print_functions(&mut self, signatures: &[&str]) {
        self.events
            .push(OutputEvent::Functions(signatures.iter().map(ToString::to_string).collect()));
    }

    fn print_variables(&mut self, variables: &HashMap<String, f64>) {
        self.events.push(OutputEvent::Variables(sorted(variables.iter())));
    }

    fn print_constants(&mut self, constants: &BTreeMap<String, f64>) {
        self.events.push(OutputEvent::Constants(sorted(constants.iter())));
    }

    fn print_values(&mut self, value: f64) {
        self.events.push(OutputEvent::Value(value));
    }
}

/// Renders session output to a terminal.
///
/// Errors are red, values green and listings cyan, unless colouring is
/// disabled. Listings are sorted by name.
pub struct ConsoleOutput<W: Write = io::Stdout> {
    writer: W,
    color:  bool,
}

impl ConsoleOutput {
    /// A console sink writing to standard output.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// A console sink writing to `writer`.
    pub const fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) {
        // Write failures are logged, never fatal.
        if let Err(e) = writeln!(self.writer, "{text}") {
            tracing::warn!("failed to write output: {e}");
        }
    }

    fn paint(&self, text: &str, paint: fn(&str) -> colored::ColoredString) -> String {
        if self.color { paint(text).to_string() } else { text.to_string() }
    }

    fn listing(&mut self, header: &str, lines: Vec<String>) {
        let header = self.paint(header, |s| s.cyan());
        self.line(&header);
        for line in lines {
            let line = self.paint(&format!("    {line}"), |s| s.cyan());
            self.line(&line);
        }
    }
}

impl<W: Write> CalculatorOutput for ConsoleOutput<W> {
    fn error(&mut self, message: &str) {
        let text = self.paint(message, |s| s.red());
        self.line(&text);
    }

    fn result(&mut self, value: f64) {
        let text = self.paint(&value.to_string(), |s| s.green());
        self.line(&text);
    }

    fn print_functions(&mut self, signatures: &[&str]) {
        self.listing("Functions:", signatures.iter().map(ToString::to_string).collect());
    }

    fn print_variables(&mut self, variables: &HashMap<String, f64>) {
        let lines = sorted(variables.iter()).into_iter()
                                            .map(|(name, value)| format!("{name} = {value}"))
                                            .collect();
        self.listing("Variables:", lines);
    }

    fn print_constants(&mut self, constants: &BTreeMap<String, f64>) {
        let lines = constants.iter()
                             .map(|(name, value)| format!("{name} = {value}"))
                             .collect();
        self.listing("Constants:", lines);
    }

    fn print_values(&mut self, value: f64) {
        self.result(value);
    }
}

fn sorted<'a>(bindings: impl Iterator<Item = (&'a String, &'a f64)>) -> Vec<(String, f64)> {
    let mut bindings = bindings.map(|(name, value)| (name.clone(), *value))
                               .collect::<Vec<_>>();
    bindings.sort_by(|a, b| a.0.cmp(&b.0));
    bindings
}
