use std::{
    fs,
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use quill::{get_result, interpreter::environment::Environment, repl};
use tracing_subscriber::EnvFilter;

/// quill is a small expression-oriented scripting language with first-class
/// functions and closures.
///
/// Without a script argument quill starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the last statement of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Writes parser and evaluator trace output to stderr.
    #[arg(short, long)]
    trace: bool,

    contents: Option<String>,
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("quill=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_ansi(io::stderr().is_terminal())
                             .without_time()
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.trace);

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), io::stdout()) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                           exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match get_result(&script, &Environment::new()) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
