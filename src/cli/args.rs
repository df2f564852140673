//! Command line argument parsing for the respell CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// respell - spelling correction for short search-query strings
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(about = "Best-effort spelling correction for short search-query strings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Path to the typo dataset file
    #[arg(long, env = "RESPELL_DATASET", default_value = "data/typo.txt")]
    pub dataset: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RespellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a single text
    Correct(CorrectArgs),

    /// Run the canned demo queries
    Demo,

    /// Correct a file line by line
    File(FileArgs),

    /// Show dataset statistics
    Stats,

    /// Draw random scored samples from the dataset
    Samples(SamplesArgs),

    /// Measure correction accuracy against the dataset
    Accuracy(AccuracyArgs),

    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Show which correction backend is active
    Info,
}

/// Arguments for correcting a single text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for file correction
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Input file, one query per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for corrected lines
    #[arg(short, long, default_value = "corrected_typos.txt")]
    pub out: PathBuf,
}

/// Arguments for sampling the dataset
#[derive(Parser, Debug, Clone)]
pub struct SamplesArgs {
    /// Number of samples to draw
    #[arg(short, long, default_value = "10")]
    pub count: usize,
}

/// Arguments for accuracy measurement
#[derive(Parser, Debug, Clone)]
pub struct AccuracyArgs {
    /// Number of dataset entries to test
    #[arg(short, long, default_value = "50")]
    pub sample_size: usize,
}

/// Arguments for the HTTP server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
