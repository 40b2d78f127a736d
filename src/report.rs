//! CSV export of plan series and batch summaries

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::inputs::InputParameters;
use crate::projection::{AccumulationPoint, DecumulationPoint, PlanSummary, TimelinePoint};

/// One row of a batch summary: the inputs next to the headline figures
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub scenario: usize,
    pub current_age: u32,
    pub retire_age: u32,
    pub life_expectancy: u32,
    pub monthly_expenses: f64,
    pub existing_savings: f64,
    pub inflation_rate: f64,
    pub pre_retirement_return_rate: f64,
    pub post_retirement_return_rate: f64,
    pub corpus_needed: f64,
    pub required_monthly_contribution: f64,
    pub future_monthly_expenses: f64,
    pub emergency_fund: f64,
    pub shortfall: f64,
    pub projected_at_retirement: f64,
    pub depletion_age: Option<u32>,
    pub terminal_balance: f64,
}

impl SummaryRow {
    pub fn new(scenario: usize, inputs: &InputParameters, summary: &PlanSummary) -> Self {
        Self {
            scenario,
            current_age: inputs.current_age,
            retire_age: inputs.retire_age,
            life_expectancy: inputs.life_expectancy,
            monthly_expenses: inputs.monthly_expenses,
            existing_savings: inputs.existing_savings,
            inflation_rate: inputs.inflation_rate,
            pre_retirement_return_rate: inputs.pre_retirement_return_rate,
            post_retirement_return_rate: inputs.post_retirement_return_rate,
            corpus_needed: summary.corpus_needed,
            required_monthly_contribution: summary.required_monthly_contribution,
            future_monthly_expenses: summary.future_monthly_expenses,
            emergency_fund: summary.emergency_fund,
            shortfall: summary.shortfall,
            projected_at_retirement: summary.projected_at_retirement,
            depletion_age: summary.depletion_age,
            terminal_balance: summary.terminal_balance,
        }
    }
}

/// Write any rows with a header taken from their field names
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_rows_to_path<T: Serialize>(path: &Path, rows: &[T]) -> csv::Result<()> {
    let file = File::create(path)?;
    write_rows(file, rows)
}

/// Write the accumulation series, one row per age
pub fn write_accumulation_csv<P: AsRef<Path>>(path: P, points: &[AccumulationPoint]) -> csv::Result<()> {
    write_rows_to_path(path.as_ref(), points)
}

/// Write the drawdown series, one row per age
pub fn write_decumulation_csv<P: AsRef<Path>>(path: P, points: &[DecumulationPoint]) -> csv::Result<()> {
    write_rows_to_path(path.as_ref(), points)
}

/// Write the accumulation series alongside the target corpus
pub fn write_timeline_csv<P: AsRef<Path>>(path: P, points: &[TimelinePoint]) -> csv::Result<()> {
    write_rows_to_path(path.as_ref(), points)
}

/// Write one summary row per scenario
pub fn write_summaries_csv<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> csv::Result<()> {
    write_rows_to_path(path.as_ref(), rows)
}
