use crate::utils::parser::{parse_orientation, parse_temperature_range};
use clap::{Args, Parser, Subcommand};
use primerfit::core::models::sequence::Orientation;
use primerfit::core::scoring::loss::TemperatureRange;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "primerfit - greedy PCR primer selection by melting temperature and genome-occurrence probability.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of threads used to process a batch of inputs.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select one primer per input sequence by greedy stepwise extension.
    Select(SelectArgs),
    /// Print the melting temperature and occurrence probability of sequences.
    Score(ScoreArgs),
    /// Print or export the per-prefix loss curve of a sequence for plotting.
    Curve(CurveArgs),
}

/// Overrides for the scoring model, shared by several subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// Genome size, in bases, used for the chance-occurrence probability.
    #[arg(short = 'g', long, value_name = "BASES")]
    pub genome_length: Option<u64>,

    /// Weight applied to the occurrence probability in the loss.
    #[arg(short = 'p', long, value_name = "FLOAT")]
    pub probability_scale: Option<f64>,

    /// Target melting temperature window; the loss is measured from its midpoint.
    #[arg(short = 't', long, value_name = "LOW,HIGH", value_parser = parse_temperature_range)]
    pub target_tm: Option<TemperatureRange>,
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    // --- Inputs ---
    /// Sequence to extend along the forward strand. May be repeated.
    #[arg(short = 'f', long = "forward", value_name = "SEQ")]
    pub forward: Vec<String>,

    /// Sequence to extend from its 3' end (reversed before extension). May be repeated.
    #[arg(short = 'b', long = "backward", value_name = "SEQ")]
    pub backward: Vec<String>,

    /// CSV file with `sequence` and `orientation` columns.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Prompt for sequence/orientation pairs on the terminal until a blank sequence.
    #[arg(long)]
    pub interactive: bool,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Override `orientation.complement-backward` from the config file.
    #[command(flatten)]
    pub complement: ComplementBackward,

    // --- Reporting ---
    /// Write one loss-curve CSV per input into this directory.
    #[arg(long, value_name = "DIR")]
    pub trace_dir: Option<PathBuf>,

    /// Do not print the per-primer summary.
    #[arg(long)]
    pub no_summary: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scoring.genome-length=4600000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive switches for complementing Backward inputs.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ComplementBackward {
    /// Complement Backward inputs before reversing them (extend along the reverse complement).
    #[arg(long)]
    pub complement_backward: bool,
    /// Only reverse Backward inputs, even if the config file enables complementing.
    #[arg(long)]
    pub no_complement_backward: bool,
}

impl ComplementBackward {
    /// `None` when neither switch was given.
    pub fn resolve(&self) -> Option<bool> {
        match (self.complement_backward, self.no_complement_backward) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Sequences to score.
    #[arg(required = true, value_name = "SEQ")]
    pub sequences: Vec<String>,

    /// Genome size, in bases, used for the chance-occurrence probability.
    #[arg(short = 'g', long, value_name = "BASES")]
    pub genome_length: Option<u64>,
}

/// Arguments for the `curve` subcommand.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Sequence whose prefixes are evaluated.
    #[arg(required = true, value_name = "SEQ")]
    pub sequence: String,

    /// Strand to read; Backward sequences are reversed first.
    #[arg(short = 'r', long, value_name = "ORIENTATION", default_value = "forward", value_parser = parse_orientation)]
    pub orientation: Orientation,

    /// Complement Backward sequences before reversing them.
    #[arg(long)]
    pub complement_backward: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Write the curve as CSV to this file instead of printing a table.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
