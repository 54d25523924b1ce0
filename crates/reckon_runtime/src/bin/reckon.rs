//! Reckon CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use reckon_runtime::{Repl, serialize};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    snapshot: Option<PathBuf>,
    eval: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("--eval requires an expression".into());
                }
                config.eval.push(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.snapshot.is_some() {
                    return Err("only one snapshot file may be given".into());
                }
                config.snapshot = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("reckon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?;

    if let Some(path) = &config.snapshot {
        let snapshot = serialize::load_from_file(path)?;
        snapshot.restore(repl.sheet_mut());
        repl.sheet_mut().recalc();
    }

    for expr in &config.eval {
        repl.handle_line(expr)?;
    }

    if config.batch_mode || !config.eval.is_empty() {
        return Ok(());
    }

    if config.snapshot.is_some() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mReckon\x1b[0m - List-style formula calculator

\x1b[1mUSAGE:\x1b[0m
    reckon [OPTIONS] [SNAPSHOT]

\x1b[1mARGUMENTS:\x1b[0m
    [SNAPSHOT]    Snapshot file to load before starting

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -e, --eval EXPR  Evaluate an expression and exit (repeatable)
    -b, --batch      Load the snapshot and exit (no REPL)

\x1b[1mEXAMPLES:\x1b[0m
    reckon                       Start the interactive list
    reckon work.rck              Load a saved sheet, then go interactive
    reckon -e 'gcd(12, 18)'      Evaluate one expression and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    :list :del :clear :radix :save :load :help :quit
    Ctrl+D exits; a line of bare operators folds the entries above it.

For more information, visit https://github.com/reckon-calc/reckon"
    );
}
