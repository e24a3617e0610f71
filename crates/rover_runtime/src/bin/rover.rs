//! Rover CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rover_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
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

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("rover {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Create the REPL
    let mut repl = Repl::new()?;

    // Run any specified scripts
    for script in &config.scripts {
        repl.run_script(script)?;
    }

    // If batch mode, exit now
    if config.batch_mode {
        return Ok(());
    }

    // Run the interactive REPL
    // If scripts ran, suppress the banner since context is established
    if !config.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mRover\x1b[0m - Command-line rover simulator

\x1b[1mUSAGE:\x1b[0m
    rover [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run scripts and exit (no REPL)

\x1b[1mEXAMPLES:\x1b[0m
    rover                    Start the interactive REPL
    rover tour.rover         Run tour.rover, then start the REPL
    rover -b tour.rover      Run tour.rover and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    Type HELP at the rover> prompt for the command reference.
    Ctrl+D exits; Ctrl+C cancels the current line."
    );
}
