use std::{fs, process::ExitCode};

use clap::Parser;
use numscript::{Calculator, error::RuntimeError, interpreter::output::ConsoleOutput};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// numscript is a small arithmetic scripting language with variables,
/// constants and user-defined functions.
///
/// Without any contents, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Disables coloured output.
    #[arg(long)]
    no_color: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();
    let mut output = ConsoleOutput::stdout(!args.no_color);
    let mut calculator = Calculator::new();

    let Some(contents) = args.contents else {
        return repl(&mut calculator, &mut output);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does \
                           not exist? ({e})");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match calculator.execute(&script, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(&e),
    }
}

fn repl(calculator: &mut Calculator, output: &mut ConsoleOutput) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };

    println!("Ready.");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("failed to add history entry: {e}");
                }
                if let Err(e) = calculator.execute(&line, &mut *output) {
                    return fatal(&e);
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

fn fatal(error: &RuntimeError) -> ExitCode {
    eprintln!("Fatal: {error}");
    ExitCode::FAILURE
}
