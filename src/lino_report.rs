//! Links Notation (Lino) Run Report
//!
//! Summarizes how each procedure behaves on one dataset: how many steps it
//! reports, how many of them pause the host, and how many comparisons and
//! moves it performs. Reports are written in Links Notation and can be
//! converted to a Markdown table.
//!
//! Format example:
//! ```text
//! run_report:
//!   timestamp '2024-01-01T00:00:00Z'
//!   description 'Default dataset'
//!   dataset 45 20 35 10 60 80 55 15
//!
//! results:
//!   bubble:
//!     steps 40
//!     paced_steps 12
//!     ...
//! ```

use crate::algorithm::Algorithm;
use crate::config::Config;
use crate::error::Result;
use crate::player::RunStats;
use crate::step::{is_sorted, Step};
use log::debug;
use rayon::prelude::*;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Outcome of tracing one algorithm over the report dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub steps: usize,
    pub paced_steps: usize,
    pub comparisons: usize,
    pub moves: usize,
    /// Final array after the run
    pub output: Vec<i32>,
    /// Whether the output is sorted and a permutation of the input
    pub verified: bool,
}

impl RunResult {
    /// Trace `algorithm` over `dataset` with no pacing and tally the steps.
    pub fn measure(algorithm: Algorithm, dataset: &[i32], config: &Config) -> Result<Self> {
        let mut output = dataset.to_vec();
        let mut steps: Vec<Step> = Vec::new();
        algorithm.run(&mut output, config, &mut steps)?;
        let stats = RunStats::from_steps(&steps);

        let mut expected = dataset.to_vec();
        expected.sort_unstable();
        let verified = is_sorted(&output) && output == expected;

        Ok(RunResult {
            algorithm,
            steps: stats.steps,
            paced_steps: stats.paced_steps,
            comparisons: stats.comparisons,
            moves: stats.moves,
            output,
            verified,
        })
    }
}

/// Results of all algorithms over one dataset.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Timestamp of when the report was generated (ISO 8601 format)
    pub timestamp: String,
    pub description: String,
    pub dataset: Vec<i32>,
    pub results: Vec<RunResult>,
}

impl RunReport {
    /// Create an empty report for `dataset`.
    pub fn new(description: &str, dataset: &[i32]) -> Self {
        RunReport {
            timestamp: lite_timestamp(),
            description: description.to_string(),
            dataset: dataset.to_vec(),
            results: Vec::new(),
        }
    }

    /// Trace every algorithm over `config.dataset` in parallel.
    pub fn collect(description: &str, config: &Config) -> Result<Self> {
        let mut report = RunReport::new(description, &config.dataset);
        report.results = Algorithm::ALL
            .par_iter()
            .map(|&algorithm| RunResult::measure(algorithm, &config.dataset, config))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "collected {} results over {} values",
            report.results.len(),
            report.dataset.len()
        );
        Ok(report)
    }

    pub fn add_result(&mut self, result: RunResult) {
        self.results.push(result);
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        writeln!(output, "run_report:").unwrap();
        writeln!(output, "  timestamp '{}'", self.timestamp).unwrap();
        writeln!(output, "  description '{}'", escape_lino_string(&self.description)).unwrap();
        writeln!(output, "  dataset {}", join_values(&self.dataset)).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "results:").unwrap();
        for result in &self.results {
            writeln!(output, "  {}:", result.algorithm.name()).unwrap();
            writeln!(output, "    steps {}", result.steps).unwrap();
            writeln!(output, "    paced_steps {}", result.paced_steps).unwrap();
            writeln!(output, "    comparisons {}", result.comparisons).unwrap();
            writeln!(output, "    moves {}", result.moves).unwrap();
            writeln!(output, "    output {}", join_values(&result.output)).unwrap();
            writeln!(output, "    verified {}", result.verified).unwrap();
        }

        // Derived rankings, skipped by the parser
        if let (Some(fewest_steps), Some(fewest_moves)) = (
            self.results.iter().min_by_key(|r| r.paced_steps),
            self.results.iter().min_by_key(|r| r.moves),
        ) {
            writeln!(output).unwrap();
            writeln!(output, "rankings:").unwrap();
            writeln!(output, "  fewest_paced_steps {}", fewest_steps.algorithm.name()).unwrap();
            writeln!(output, "  fewest_moves {}", fewest_moves.algorithm.name()).unwrap();
        }

        output
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_lino())?;
        Ok(())
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Visualizer Run Report").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output, "**Description:** {}", self.description).unwrap();
        writeln!(output, "**Dataset:** `[{}]`", self.dataset_csv()).unwrap();
        writeln!(output).unwrap();

        writeln!(
            output,
            "| Algorithm | Complexity | Stable | Steps | Paced Steps | Comparisons | Moves | Verified |"
        )
        .unwrap();
        writeln!(
            output,
            "|-----------|------------|--------|-------|-------------|-------------|-------|----------|"
        )
        .unwrap();

        for result in &self.results {
            let algorithm = result.algorithm;
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                algorithm.title(),
                algorithm.complexity(),
                if algorithm.is_stable() { "yes" } else { "no" },
                result.steps,
                result.paced_steps,
                result.comparisons,
                result.moves,
                if result.verified { "OK" } else { "FAILED" }
            )
            .unwrap();
        }

        writeln!(output).unwrap();
        writeln!(output, "---").unwrap();
        writeln!(output, "*Report generated by sort-visualizer*").unwrap();

        output
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_markdown_table())?;
        Ok(())
    }

    fn dataset_csv(&self) -> String {
        self.dataset
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_values(raw: &str) -> Option<Vec<i32>> {
    raw.split_whitespace().map(|v| v.parse().ok()).collect()
}

/// UTC timestamp computed from the system clock, without a date library.
fn lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut days = (secs / 86_400) as i64;
    let time_of_day = secs % 86_400;

    let mut year = 1970i64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let february = if is_leap_year(year) { 29 } else { 28 };
    let month_lengths = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month = 1;
    for length in month_lengths {
        if days < length {
            break;
        }
        days -= length;
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        days + 1,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Parse a Links Notation run report.
///
/// Returns `None` when the content has no recognizable results.
pub fn parse_lino_report(content: &str) -> Option<RunReport> {
    let mut report = RunReport::new("Parsed report", &[]);
    let mut current: Option<RunResult> = None;
    let mut in_results = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed == "results:" {
            in_results = true;
            continue;
        }
        if !line.starts_with(' ') && trimmed.ends_with(':') {
            // Any other top-level section ends the results block
            if let Some(result) = current.take() {
                report.results.push(result);
            }
            in_results = false;
            continue;
        }

        if !in_results {
            if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                report.timestamp = ts;
            } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                report.description = desc;
            } else if let Some(raw) = trimmed.strip_prefix("dataset") {
                report.dataset = parse_values(raw)?;
            }
            continue;
        }

        if trimmed.ends_with(':') && !trimmed.contains(' ') {
            if let Some(result) = current.take() {
                report.results.push(result);
            }
            let algorithm = trimmed.trim_end_matches(':').parse().ok()?;
            current = Some(RunResult {
                algorithm,
                steps: 0,
                paced_steps: 0,
                comparisons: 0,
                moves: 0,
                output: Vec::new(),
                verified: false,
            });
            continue;
        }

        if let Some(ref mut result) = current {
            let (key, value) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
            match key {
                "steps" => result.steps = value.parse().ok()?,
                "paced_steps" => result.paced_steps = value.parse().ok()?,
                "comparisons" => result.comparisons = value.parse().ok()?,
                "moves" => result.moves = value.parse().ok()?,
                "output" => result.output = parse_values(value)?,
                "verified" => result.verified = value == "true",
                _ => {}
            }
        }
    }

    if let Some(result) = current {
        report.results.push(result);
    }

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let after_prefix = line.strip_prefix(prefix)?.trim();
    if after_prefix.len() >= 2 && after_prefix.starts_with('\'') && after_prefix.ends_with('\'') {
        Some(after_prefix[1..after_prefix.len() - 1].replace("\\'", "'"))
    } else {
        None
    }
}
