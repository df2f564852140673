//! Command implementations for the respell CLI.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::correction::engine::CorrectionEngine;
use crate::correction::map::CorrectionMap;
use crate::dataset::parser::load_dataset;
use crate::dataset::stats::{compute_stats, draw_samples, measure_accuracy};
use crate::error::Result;
use crate::server::{serve, AppContext};

/// Sample search queries used by the demo command.
const SAMPLE_QUERIES: &[&str] = &[
    "metal plate cover gcfi",
    "artric air portable",
    "roll roofing lap cemet",
    "basemetnt window",
    "vynal grip strip",
    "lawn mower- electic",
    "cieling fan",
    "flourescent light bulbs",
    "dewalt cordless drill",
];

/// Execute a CLI command.
pub fn execute_command(args: RespellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_text(correct_args.clone(), &args),
        Command::Demo => run_demo(&args),
        Command::File(file_args) => correct_file(file_args.clone(), &args),
        Command::Stats => show_stats(&args),
        Command::Samples(samples_args) => show_samples(samples_args.clone(), &args),
        Command::Accuracy(accuracy_args) => run_accuracy(accuracy_args.clone(), &args),
        Command::Serve(serve_args) => run_server(serve_args.clone(), &args),
        Command::Info => show_info(&args),
    }
}

/// Build the correction engine.
///
/// The engine always corrects from the built-in mapping; the dataset named
/// on the command line is the analyzer's ground truth, not the engine's
/// dictionary.
fn build_engine() -> CorrectionEngine {
    CorrectionEngine::with_map(CorrectionMap::builtin())
}

/// Correct a single text.
fn correct_text(args: CorrectArgs, cli_args: &RespellArgs) -> Result<()> {
    let engine = build_engine();
    let correction = engine.correct_with_info(&args.text);

    output_result("", &correction, cli_args)
}

/// Run the canned demo queries.
fn run_demo(cli_args: &RespellArgs) -> Result<()> {
    let engine = build_engine();
    let info = engine.backend_info();

    let corrections: Vec<_> = SAMPLE_QUERIES
        .iter()
        .map(|query| engine.correct_with_info(query))
        .collect();

    output_result(
        &format!("Spell correction demo (backend: {})", info.backend),
        &corrections,
        cli_args,
    )
}

/// Correct a file line by line.
fn correct_file(args: FileArgs, cli_args: &RespellArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Correcting file: {}", args.input.display());
    }

    let engine = build_engine();

    let file = File::open(&args.input)?;
    let reader = BufReader::new(file);
    let mut out = File::create(&args.out)?;

    let mut lines_processed = 0;
    let mut lines_changed = 0;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        let corrected = engine.correct(trimmed);

        if corrected != trimmed {
            lines_changed += 1;
        }
        lines_processed += 1;

        writeln!(out, "{corrected}")?;
    }

    output_result(
        "File corrected",
        &FileReport {
            lines_processed,
            lines_changed,
            output_path: args.out.to_string_lossy().to_string(),
        },
        cli_args,
    )
}

/// Show dataset statistics.
fn show_stats(cli_args: &RespellArgs) -> Result<()> {
    let dataset = load_dataset(&cli_args.dataset);
    let stats = compute_stats(&dataset);

    output_result("Dataset statistics", &stats, cli_args)
}

/// Draw random scored samples from the dataset.
fn show_samples(args: SamplesArgs, cli_args: &RespellArgs) -> Result<()> {
    let dataset = load_dataset(&cli_args.dataset);
    let engine = build_engine();

    let samples = draw_samples(&dataset, &engine, args.count, &mut rand::rng());

    output_result(
        &format!("{} dataset samples", samples.len()),
        &samples,
        cli_args,
    )
}

/// Measure correction accuracy against the dataset.
fn run_accuracy(args: AccuracyArgs, cli_args: &RespellArgs) -> Result<()> {
    let dataset = load_dataset(&cli_args.dataset);
    let engine = build_engine();

    let report = measure_accuracy(&dataset, &engine, args.sample_size, &mut rand::rng());

    output_result("Correction accuracy", &report, cli_args)
}

/// Run the HTTP API server.
fn run_server(args: ServeArgs, cli_args: &RespellArgs) -> Result<()> {
    let dataset = load_dataset(&cli_args.dataset);
    let dataset_name = cli_args
        .dataset
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| cli_args.dataset.to_string_lossy().to_string());

    let ctx = Arc::new(AppContext::new(build_engine(), dataset, dataset_name));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(ctx, args.addr))
}

/// Show which correction backend is active.
fn show_info(cli_args: &RespellArgs) -> Result<()> {
    let engine = build_engine();
    output_result("", &engine.backend_info(), cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as IoWrite;
    use tempfile::TempDir;

    fn args_for(argv: &[&str]) -> RespellArgs {
        RespellArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_correct_command_executes() {
        let args = args_for(&["respell", "--quiet", "correct", "cieling"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_file_command_corrects_lines() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("typos.txt");
        let output = dir.path().join("fixed.txt");

        let mut file = File::create(&input).unwrap();
        writeln!(file, "cieling fan").unwrap();
        writeln!(file, "artric air portable").unwrap();
        writeln!(file, "plain text").unwrap();

        let args = args_for(&[
            "respell",
            "--quiet",
            "file",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
        ]);
        execute_command(args).unwrap();

        let corrected = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = corrected.lines().collect();
        assert_eq!(lines[0], "ceiling fan");
        assert_eq!(lines[1], "arctic air portable");
        assert_eq!(lines[2], "plain text");
    }

    #[test]
    fn test_stats_command_with_missing_dataset() {
        // Unreadable dataset degrades to empty stats, not an error
        let args = args_for(&[
            "respell",
            "--quiet",
            "--dataset",
            "/nonexistent/typo.txt",
            "stats",
        ]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_accuracy_command_with_dataset_file() {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("typo.txt");
        let mut file = File::create(&dataset).unwrap();
        writeln!(file, "'cieling': 'ceiling',").unwrap();
        writeln!(file, "'tolet': 'toilet',").unwrap();

        let args = args_for(&[
            "respell",
            "--quiet",
            "--dataset",
            dataset.to_str().unwrap(),
            "accuracy",
            "--sample-size",
            "2",
        ]);
        assert!(execute_command(args).is_ok());
    }
}
