use std::{fs, process::ExitCode};

use clap::Parser;
use dartish::{SAMPLE_PROGRAM, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// dartish runs tiny programs of `var` declarations and `print` calls over
/// integer arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells dartish to read the program from a file instead of an inline
    /// script.
    #[arg(short, long)]
    file: bool,

    /// The program, or its path with `--file`. Runs a built-in sample program
    /// when omitted.
    contents: Option<String>,
}

/// Installs the log subscriber when `RUST_LOG` is set. Logs go to stderr.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match args.contents {
        Some(path) if args.file => match fs::read_to_string(&path) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        },
        Some(script) => script,
        None => SAMPLE_PROGRAM.to_string(),
    };

    if let Err(e) = run(&script) {
        println!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
