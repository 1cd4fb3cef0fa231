//! CLI argument definitions for the lung screening toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lungcare",
    version,
    about = "LungCare screening toolkit - questionnaire scoring and simulated image analysis",
    long_about = "Score a lung-disease screening questionnaire and run the simulated\n\
                  chest X-ray analysis.\n\n\
                  Educational demo only: the image analysis returns canned outcome\n\
                  templates selected by file name, never a real diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a patient questionnaire from a JSON file.
    Assess(AssessArgs),

    /// Run the simulated analysis on a chest X-ray file.
    Analyze(AnalyzeArgs),

    /// Print a starter questionnaire JSON document.
    Template,
}

#[derive(Parser)]
pub struct AssessArgs {
    /// Path to the patient questionnaire JSON file.
    #[arg(value_name = "PATIENT_JSON")]
    pub patient_file: PathBuf,

    /// Print the raw result as JSON instead of a summary.
    #[arg(long = "json")]
    pub json: bool,

    /// Write a timestamped JSON report to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the image file. Only its name and byte size are read.
    #[arg(value_name = "IMAGE_PATH")]
    pub image_file: PathBuf,

    /// Seed for the fallback outcome selection (reproducible runs).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the raw result as JSON instead of a summary.
    #[arg(long = "json")]
    pub json: bool,

    /// Write a timestamped JSON report to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
