//! Run plans for every scenario in a CSV file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use retirement_goal::inputs::load_scenarios;
use retirement_goal::report::{write_summaries_csv, SummaryRow};
use retirement_goal::ScenarioRunner;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Run retirement plans for a CSV of scenarios in parallel")]
struct Args {
    /// Scenario CSV, one InputParameters row per line
    scenarios: PathBuf,

    /// Where to write the summary CSV
    #[arg(short, long, default_value = "batch_summary.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("failed to load {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Plans complete in {:?}", proj_start.elapsed());

    let mut rows = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (index, (inputs, result)) in scenarios.iter().zip(&results).enumerate() {
        match result {
            Ok(plan) => rows.push(SummaryRow::new(index + 1, inputs, &plan.summary())),
            Err(err) => {
                failed += 1;
                log::warn!("scenario {} skipped: {}", index + 1, err);
            }
        }
    }

    write_summaries_csv(&args.output, &rows)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Output written to {}", args.output.display());
    println!("  Succeeded: {}", rows.len());
    println!("  Failed:    {}", failed);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
