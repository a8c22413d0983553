use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::debug;
use rdcheck::driver::{check_source, load_source, render_report, render_summary};

/// Checks programs for syntax, declaration and type errors.
#[derive(Parser, Debug)]
#[command(name = "rdcheck", version, about)]
struct Cli {
    /// Source files to check, each independently
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Raise the log level (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print the error count for each file
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let mut total = 0;

    for path in cli.files.iter() {
        let source = load_source(path)?;
        let file_name = path.to_string_lossy();

        let diagnostics = check_source(&source, &file_name);
        total += diagnostics.count();

        if cli.quiet {
            print!("{}: {}", file_name, render_summary(&diagnostics));
        } else {
            println!("{}", file_name);
            print!("{}", render_report(&diagnostics, &source));
        }
    }

    Ok(if total == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
