//! Command-line argument definitions for the mermend CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each subcommand reads a diagram (or a model response),
//! and the global flags select the configuration file and log verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the mermend diagram fixer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// The operation to perform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repair a diagram and write the corrected source
    Fix(FixArgs),

    /// Check a diagram without modifying it
    Report(ReportArgs),

    /// Pull the diagram out of a model response, then repair it
    Extract(ExtractArgs),
}

#[derive(clap::Args, Debug)]
pub struct FixArgs {
    /// Path to the input diagram, or `-` for stdin
    pub input: String,

    /// Path to write the corrected diagram (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the corrected text and applied fixes as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Path to the input diagram, or `-` for stdin
    pub input: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Path to the model response, or `-` for stdin
    pub input: String,

    /// Path to write the diagram (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the contents of `<TAG>...</TAG>` instead of the diagram
    #[arg(long, value_name = "TAG")]
    pub section: Option<String>,

    /// Repository owner substituted for `[username]`
    #[arg(long, requires = "repo")]
    pub username: Option<String>,

    /// Repository name substituted for `[repo]`
    #[arg(long, requires = "username")]
    pub repo: Option<String>,

    /// Branch substituted for `[branch]`
    #[arg(long, default_value = mermend::links::DEFAULT_BRANCH)]
    pub branch: String,

    /// Skip the repair pass
    #[arg(long)]
    pub no_fix: bool,
}
