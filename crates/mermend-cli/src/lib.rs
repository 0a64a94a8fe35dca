//! CLI logic for the mermend diagram fixer.
//!
//! This module contains the core CLI logic: reading input, running the
//! fixer or the reporter, and writing results.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, ExtractArgs, FixArgs, ReportArgs};

use std::{
    fs,
    io::{self, Read},
};

use log::{info, warn};
use serde_json::json;

use mermend::{
    Fixer, MermendError, Reporter,
    config::AppConfig,
    extract::{extract_diagram, extract_tagged},
    fix_or_passthrough,
    links::RepoLinks,
};

/// Run the mermend CLI application
///
/// # Errors
///
/// Returns `MermendError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Responses without a diagram
/// - Invalid diagrams (the `report` subcommand)
pub fn run(args: &Args) -> Result<(), MermendError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Fix(fix_args) => run_fix(fix_args, &app_config),
        Command::Report(report_args) => run_report(report_args, &app_config),
        Command::Extract(extract_args) => run_extract(extract_args, &app_config),
    }
}

fn run_fix(args: &FixArgs, config: &AppConfig) -> Result<(), MermendError> {
    info!(input_path = args.input; "Fixing diagram");

    let source = read_input(&args.input)?;
    let fixer = Fixer::new(config.fixer().clone());
    let fixed = fix_or_passthrough(&fixer, &source);

    for entry in fixed.record().entries() {
        info!(code = entry.code().as_str(); "{entry}");
    }

    if args.json {
        let body = json!({
            "fixed": fixed.text(),
            "fixesApplied": fixed.record().messages(),
        });
        println!("{}", to_json(&body)?);
    } else {
        write_output(args.output.as_deref(), fixed.text())?;
    }

    info!(fixes = fixed.record().fixes().count(); "Diagram fixed");
    Ok(())
}

fn run_report(args: &ReportArgs, config: &AppConfig) -> Result<(), MermendError> {
    info!(input_path = args.input; "Checking diagram");

    let source = read_input(&args.input)?;
    let report = Reporter::new(config.report().clone()).report(&source);

    if args.json {
        println!("{}", to_json(&report)?);
    } else {
        for finding in report.findings() {
            println!("{finding}");
        }
        println!(
            "{} issue(s), {} warning(s)",
            report.issue_count(),
            report.warning_count()
        );
    }

    if !report.valid() {
        return Err(MermendError::new_lint_error(report, source));
    }

    info!(warnings = report.warning_count(); "Diagram is valid");
    Ok(())
}

fn run_extract(args: &ExtractArgs, config: &AppConfig) -> Result<(), MermendError> {
    info!(input_path = args.input; "Extracting diagram from response");

    let response = read_input(&args.input)?;

    if let Some(tag) = &args.section {
        let section = extract_tagged(&response, tag)
            .ok_or_else(|| MermendError::Extract(format!("no <{tag}> section in response")))?;
        return write_output(args.output.as_deref(), section);
    }

    let diagram = extract_diagram(&response)
        .ok_or_else(|| MermendError::Extract("no fenced diagram in response".to_string()))?;

    let diagram = match (&args.username, &args.repo) {
        (Some(username), Some(repo)) => RepoLinks::new(username.as_str(), repo.as_str())
            .with_branch(args.branch.as_str())
            .apply(diagram),
        _ => diagram.to_string(),
    };

    if args.no_fix {
        return write_output(args.output.as_deref(), &diagram);
    }

    let fixer = Fixer::new(config.fixer().clone());
    let fixed = fix_or_passthrough(&fixer, &diagram);
    if fixed.changed() {
        info!(fixes = fixed.record().fixes().count(); "Repaired extracted diagram");
    }
    write_output(args.output.as_deref(), fixed.text())
}

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String, MermendError> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

/// Write to a file, or stdout when no path is given.
fn write_output(path: Option<&str>, text: &str) -> Result<(), MermendError> {
    match path {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Output written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, MermendError> {
    serde_json::to_string_pretty(value).map_err(|err| {
        warn!(err:%; "JSON serialization failed");
        MermendError::Serialize(err.to_string())
    })
}
