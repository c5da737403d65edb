//! Sorting Visualizer CLI
//!
//! Animates one (or all) of the instrumented sorting procedures in the
//! terminal, or streams their steps as JSON lines for another renderer.
//!
//! ```bash
//! # Watch merge sort on the default dataset
//! sort-visualizer --algorithm merge
//!
//! # Every algorithm, no pauses, then a Lino + Markdown report
//! sort-visualizer --all --delay-ms 0 --report run.lino --markdown run.md
//! ```

use clap::Parser;
use log::{error, info};
use sort_visualizer::lino_report::RunReport;
use sort_visualizer::render::{JsonLines, TerminalRenderer};
use sort_visualizer::{Algorithm, Config, Player, Result, Session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sort-visualizer", version, about = "Step-by-step sorting algorithm visualizer")]
struct Args {
    /// Algorithm to animate (bubble, insertion, selection, merge, quick, heap, counting)
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Animate every algorithm in turn
    #[arg(long)]
    all: bool,

    /// Comma separated dataset, e.g. "5,3,8,1"
    #[arg(short, long)]
    data: Option<String>,

    /// Pause after each paced step, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Emit steps as JSON lines instead of drawing bars
    #[arg(long)]
    json: bool,

    /// Write a Links Notation run report for all algorithms
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the run report as Markdown
    #[arg(long)]
    markdown: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(raw) = &args.data {
        config.dataset = Config::parse_dataset(raw)?;
    }
    if args.delay_ms.is_some() {
        config.delay_ms = args.delay_ms;
    }
    config.validate()?;

    let algorithms: Vec<Algorithm> = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm]
    };

    for algorithm in algorithms {
        animate(algorithm, &config, args.json)?;
    }

    if args.report.is_some() || args.markdown.is_some() {
        let report = RunReport::collect("sort-visualizer run", &config)?;
        if let Some(path) = &args.report {
            report.save_lino(path)?;
            info!("Lino report written to: {}", path.display());
        }
        if let Some(path) = &args.markdown {
            report.save_markdown(path)?;
            info!("Markdown report written to: {}", path.display());
        }
    }

    Ok(())
}

fn animate(algorithm: Algorithm, config: &Config, json: bool) -> Result<()> {
    let mut session = Session::new(algorithm, config.clone());
    let player = Player::from_config(config, algorithm);
    let stdout = io::stdout();

    let stats = if json {
        player.run(&mut session, &mut JsonLines::new(stdout.lock()))?
    } else {
        println!("{} - {}", algorithm.title(), algorithm.complexity());
        println!("{}", algorithm.summary());
        println!();
        player.run(&mut session, &mut TerminalRenderer::new(stdout.lock(), algorithm.title()))?
    };

    info!(
        "{}: {} steps, {} comparisons, {} moves",
        algorithm.title(),
        stats.steps,
        stats.comparisons,
        stats.moves
    );
    Ok(())
}
