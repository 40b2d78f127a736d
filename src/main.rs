//! Retirement Goal CLI
//!
//! Command-line interface for sizing one retirement plan

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use retirement_goal::inputs::load_inputs_json;
use retirement_goal::projection::DeficitHandling;
use retirement_goal::report;
use retirement_goal::tvm::PaymentTiming;
use retirement_goal::{InputParameters, PlanConfig, PlanEngine};

/// Flags that describe the plan and so cannot be combined with `--input`
const INPUT_FLAGS: [&str; 9] = [
    "current_age",
    "retire_age",
    "life_expectancy",
    "monthly_expenses",
    "existing_savings",
    "emergency_months",
    "inflation_pct",
    "pre_return_pct",
    "post_return_pct",
];

#[derive(Parser, Debug)]
#[command(name = "retirement_goal")]
#[command(about = "Size a retirement corpus and the monthly SIP that reaches it")]
struct Args {
    /// Load inputs from a JSON file instead of the flags below
    #[arg(long, conflicts_with_all = INPUT_FLAGS)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 31)]
    current_age: u32,

    #[arg(long, default_value_t = 35)]
    retire_age: u32,

    #[arg(long, default_value_t = 85)]
    life_expectancy: u32,

    /// Monthly expenses in today's money
    #[arg(long, default_value_t = 135_000.0)]
    monthly_expenses: f64,

    #[arg(long, default_value_t = 36_000_000.0)]
    existing_savings: f64,

    #[arg(long, default_value_t = 6)]
    emergency_months: u32,

    /// Expected inflation, percent per year
    #[arg(long, default_value_t = 6.5, allow_negative_numbers = true)]
    inflation_pct: f64,

    /// Return before retirement, percent per year
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    pre_return_pct: f64,

    /// Return after retirement, percent per year
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    post_return_pct: f64,

    /// Withdrawals and contributions at the end of each month
    #[arg(long)]
    end_of_period: bool,

    /// Clamp the drawdown balance at zero instead of carrying a deficit
    #[arg(long)]
    floor_drawdown: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Write accumulation, drawdown and timeline CSVs to this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl Args {
    fn inputs(&self) -> anyhow::Result<InputParameters> {
        match &self.input {
            Some(path) => load_inputs_json(path)
                .with_context(|| format!("failed to load inputs from {}", path.display())),
            None => Ok(InputParameters {
                current_age: self.current_age,
                retire_age: self.retire_age,
                life_expectancy: self.life_expectancy,
                monthly_expenses: self.monthly_expenses,
                existing_savings: self.existing_savings,
                emergency_months: self.emergency_months,
                inflation_rate: self.inflation_pct / 100.0,
                pre_retirement_return_rate: self.pre_return_pct / 100.0,
                post_retirement_return_rate: self.post_return_pct / 100.0,
            }),
        }
    }

    fn config(&self) -> PlanConfig {
        PlanConfig {
            timing: if self.end_of_period {
                PaymentTiming::End
            } else {
                PaymentTiming::Begin
            },
            deficit_handling: if self.floor_drawdown {
                DeficitHandling::FloorAtZero
            } else {
                DeficitHandling::Carry
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let inputs = args.inputs()?;
    let result = PlanEngine::new(args.config())
        .run(&inputs)
        .context("plan could not be computed")?;

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        report::write_accumulation_csv(dir.join("accumulation.csv"), &result.accumulation)?;
        report::write_decumulation_csv(dir.join("decumulation.csv"), &result.decumulation)?;
        report::write_timeline_csv(dir.join("timeline.csv"), &result.corpus_timeline())?;
        log::info!("series written to {}", dir.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = result.summary();
    println!("Retirement Goal");
    println!("===============\n");
    println!("  Retirement corpus needed:      {:>18.2}", summary.corpus_needed);
    println!(
        "  Monthly SIP required:          {:>18.2}  (for {} years)",
        summary.required_monthly_contribution, summary.years_to_grow
    );
    println!("  Monthly expenses @ retirement: {:>18.2}", summary.future_monthly_expenses);
    println!(
        "  Emergency fund:                {:>18.2}  ({} months)",
        summary.emergency_fund, inputs.emergency_months
    );
    println!("  Existing savings grown:        {:>18.2}", summary.existing_savings_grown);
    println!("  Shortfall:                     {:>18.2}", summary.shortfall);
    println!("  Retirement duration:           {:>18} years", summary.retire_duration);

    println!("\nAccumulation:");
    println!("{:>5} {:>18} {:>18}", "Age", "Total Value", "Invested");
    println!("{}", "-".repeat(43));
    for point in &result.accumulation {
        println!("{:>5} {:>18.2} {:>18.2}", point.age, point.total_value, point.invested_amount);
    }

    println!("\nDrawdown:");
    println!("{:>5} {:>18} {:>18}", "Age", "Remaining Corpus", "Withdrawal");
    println!("{}", "-".repeat(43));
    for point in &result.decumulation {
        println!(
            "{:>5} {:>18.2} {:>18.2}",
            point.age, point.remaining_corpus, point.annual_withdrawal
        );
    }

    match summary.depletion_age {
        Some(age) => println!("\nCorpus runs out at age {}", age),
        None => println!("\nCorpus lasts to age {}", inputs.life_expectancy),
    }

    Ok(())
}
