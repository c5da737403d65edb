//! Lino to Markdown Converter
//!
//! A simple CLI tool to convert Links Notation run reports to Markdown format.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use clap::Parser;
use log::{error, info};
use sort_visualizer::lino_report::parse_lino_report;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "lino2md", version, about = "Convert a Links Notation run report to Markdown")]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Optional output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let content = match fs::read_to_string(&args.input) {
        Ok(c) => c,
        Err(e) => {
            error!("Error reading {}: {}", args.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let report = match parse_lino_report(&content) {
        Some(r) => r,
        None => {
            error!("Could not parse the Links Notation report");
            error!("Make sure the file contains a results section");
            return ExitCode::FAILURE;
        }
    };

    let markdown = report.to_markdown_table();

    match args.output {
        Some(path) => match fs::write(&path, &markdown) {
            Ok(()) => {
                info!("Markdown report written to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Error writing {}: {}", path.display(), e);
                ExitCode::FAILURE
            }
        },
        None => {
            print!("{}", markdown);
            ExitCode::SUCCESS
        }
    }
}
