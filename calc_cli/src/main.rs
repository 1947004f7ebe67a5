//! # SciCalc CLI Application
//!
//! Terminal front end for the calculator engine.
//!
//! ## Usage
//!
//! ```bash
//! calc_cli                              # Interactive keypad (same as `calc_cli tui`)
//! calc_cli run 3 + 4 x 2 =              # Prints 14
//! calc_cli run --trace 2 power 10 =     # Prints "2 ^ 10 =" then 1024
//! calc_cli run --degrees --json 30 sin  # Full state as JSON
//! ```

mod keymap;
mod script;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::preferences::{default_preferences_path, load_or_default};
use calc_core::{AngleMode, CalcError, CalculatorEngine};

/// Scientific calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter, e.g. "debug" or "calc_core=trace" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive terminal keypad
    Tui(TuiArgs),
    /// Feed tokens to the calculator and print the display
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct TuiArgs {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy drawing the keypad)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Numbers, operators (+ - x / ^ =) and action names (sin, clear-entry, pi, ...)
    #[arg(required = true, allow_negative_numbers = true)]
    tokens: Vec<String>,

    /// Also print the expression trace
    #[arg(long)]
    trace: bool,

    /// Print the full calculator state as JSON
    #[arg(long, conflicts_with = "trace")]
    json: bool,

    /// Interpret trigonometric input/output in degrees
    #[arg(long)]
    degrees: bool,
}

/// Errors that end the CLI with a non-zero exit code
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => {
            init_logging(cli.log_level.as_deref(), None)?;
            run_script(&args)
        }
        Some(Commands::Tui(args)) => run_tui(args, cli.log_level.as_deref()),
        None => run_tui(TuiArgs::default(), cli.log_level.as_deref()),
    }
}

fn run_script(args: &RunArgs) -> CliResult<()> {
    let actions = script::parse_tokens(args.tokens.as_slice())?;
    debug!(count = actions.len(), "parsed script");

    let angle_mode = if args.degrees { AngleMode::Degrees } else { AngleMode::Radians };
    let mut engine = CalculatorEngine::with_angle_mode(angle_mode);
    for action in actions {
        engine.dispatch(action);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    } else {
        if args.trace && !engine.expression().is_empty() {
            println!("{}", engine.expression());
        }
        println!("{}", engine.display());
    }
    Ok(())
}

fn run_tui(args: TuiArgs, log_level: Option<&str>) -> CliResult<()> {
    if let Some(path) = &args.log_file {
        init_logging(log_level, Some(path.as_path()))?;
    }

    let prefs_path = args.preferences.or_else(default_preferences_path);
    let prefs = match &prefs_path {
        Some(path) => load_or_default(path),
        None => Default::default(),
    };

    tui::TuiApp::new(prefs, prefs_path).run()?;
    Ok(())
}

/// Install the tracing subscriber; logs go to stderr unless a file is given.
fn init_logging(level: Option<&str>, log_file: Option<&Path>) -> CliResult<()> {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_arguments() {
        let cli = Cli::parse_from(["calc_cli", "run", "--trace", "3", "+", "4", "="]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.trace);
                assert_eq!(args.tokens, vec!["3", "+", "4", "="]);
            }
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_token_reaches_script_parser() {
        let cli = Cli::try_parse_from(["calc_cli", "run", "-4", "+", "1"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.tokens, vec!["-4", "+", "1"]);
                assert!(script::parse_tokens(args.tokens.as_slice()).is_err());
            }
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_tui() {
        let cli = Cli::parse_from(["calc_cli"]);
        assert!(cli.command.is_none());
    }
}
