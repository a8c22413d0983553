//! Glue between source files, the checker and the terminal.

use std::{fs, path::Path, rc::Rc, time::Instant};

use anyhow::{Context, Result};
use log::info;

use crate::{
    errors::diagnostics::Diagnostics, lexer::lexer::tokenize, parser::parser::parse,
    render_diagnostic,
};

/// Reads a source file. Failing to open it is fatal for that run.
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to open source file `{}`", path.display()))
}

/// Tokenizes and parses a program, returning every error found.
///
/// A lexical error stops checking and is returned as the only diagnostic.
pub fn check_source(source: &str, file_name: &str) -> Diagnostics {
    let start = Instant::now();

    let tokens = match tokenize(source.to_string(), Some(file_name.to_string())) {
        Ok(tokens) => tokens,
        Err(error) => {
            let mut diagnostics = Diagnostics::new();
            diagnostics.append(error);
            return diagnostics;
        }
    };

    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    let parse_start = Instant::now();
    let diagnostics = parse(tokens, Rc::new(file_name.to_string()));

    info!("Parsed {} in {:?}", file_name, parse_start.elapsed());

    diagnostics
}

/// Renders every diagnostic followed by the total count.
pub fn render_report(diagnostics: &Diagnostics, source: &str) -> String {
    let mut report = String::new();

    for error in diagnostics {
        report.push_str(&render_diagnostic(error, source));
        report.push('\n');
    }

    report.push_str(&render_summary(diagnostics));
    report
}

pub fn render_summary(diagnostics: &Diagnostics) -> String {
    format!("{} errors found.\n", diagnostics.count())
}
