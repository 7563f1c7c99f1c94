mod engine;
mod input;
mod model;
mod report;
mod trace;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::engine::{ScoreEngine, ScoreError};
use crate::input::InputError;
use crate::model::record::Record;
use crate::model::scores::InsightSpec;
use crate::model::weights::WeightTable;

#[derive(Debug, Parser)]
#[command(name = "fieldscore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank the fielding roster, then write the report artifacts.
    Run {
        /// Roster CSV; the built-in sample roster is used when omitted or
        /// unavailable.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output directory for the report artifacts.
        #[arg(long, default_value = "fielding_analysis")]
        out: PathBuf,
    },
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    trace::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let Command::Run { input, out } = cli.command;

    let engine = ScoreEngine::new(WeightTable::match_day_default());
    let insight_spec = InsightSpec::match_day_default();

    let (records, used_sample) = load_records(input.as_deref(), engine.weights())?;

    let ranked = engine.rank(&records)?;
    let insights = engine.summarize(&ranked, &insight_spec);

    print_banner("FIELDING PERFORMANCE ANALYSIS");
    print!("{}", report::text::render_rankings(&ranked, engine.weights()));
    print_banner("SUMMARY TABLE");
    print!("{}", report::text::render_summary_table(&ranked));

    report::write_reports(&ranked, engine.weights(), insights.as_ref(), &out)?;

    if used_sample {
        let sample_csv = input::sample::render_sample_csv(&records, engine.weights());
        let sample_path = out.join("sample_roster.csv");
        report::write_text(&sample_path, &sample_csv)?;
        tracing::info!("wrote {}", sample_path.display());
    }

    Ok(())
}

fn load_records(
    path: Option<&Path>,
    weights: &WeightTable,
) -> Result<(Vec<Record>, bool), InputError> {
    let Some(path) = path else {
        tracing::info!("no roster file supplied; using the built-in sample roster");
        return Ok((input::sample::sample_records(weights), true));
    };
    match input::load_roster(path, weights) {
        Ok(records) => Ok((records, false)),
        Err(InputError::SourceUnavailable(reason)) => {
            tracing::warn!("{}; falling back to the built-in sample roster", reason);
            Ok((input::sample::sample_records(weights), true))
        }
        Err(err) => Err(err),
    }
}

fn print_banner(title: &str) {
    let rule = "=".repeat(80);
    println!("{rule}");
    println!("{title}");
    println!("{rule}");
    println!();
}
