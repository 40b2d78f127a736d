//! Full plan pipeline: goal, contribution, and both simulations

use serde::{Deserialize, Serialize};

use super::accumulation::simulate_accumulation;
use super::decumulation::{depletion_age, simulate_drawdown, total_withdrawn};
use super::points::{AccumulationPoint, DecumulationPoint, TimelinePoint};
use super::state::DeficitHandling;
use crate::contribution::{solve_contribution_with_timing, ContributionPlan};
use crate::error::Result;
use crate::goal::{compute_goal_with_timing, DerivedGoal};
use crate::inputs::InputParameters;
use crate::tvm::PaymentTiming;

/// Configuration for a plan run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// When monthly withdrawals and contributions fall
    #[serde(default)]
    pub timing: PaymentTiming,

    /// Whether the drawdown balance may run negative
    #[serde(default)]
    pub deficit_handling: DeficitHandling,
}

/// Main plan engine
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    config: PlanConfig,
}

impl PlanEngine {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Run the whole plan; the first error aborts it
    pub fn run(&self, inputs: &InputParameters) -> Result<PlanResult> {
        let goal = compute_goal_with_timing(inputs, self.config.timing)?;
        let contribution = solve_contribution_with_timing(inputs, &goal, self.config.timing)?;

        let accumulation = simulate_accumulation(inputs, &contribution);
        let drawdown = simulate_drawdown(inputs, &goal, self.config.deficit_handling);

        Ok(PlanResult {
            inputs: inputs.clone(),
            goal,
            contribution,
            accumulation,
            decumulation: drawdown.points,
            terminal_balance: drawdown.terminal_balance,
        })
    }
}

/// Complete plan result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub inputs: InputParameters,
    pub goal: DerivedGoal,
    pub contribution: ContributionPlan,
    pub accumulation: Vec<AccumulationPoint>,
    pub decumulation: Vec<DecumulationPoint>,
    /// Unfloored drawdown balance at life expectancy
    pub terminal_balance: f64,
}

impl PlanResult {
    pub fn years_to_grow(&self) -> u32 {
        self.goal.years_to_grow
    }

    pub fn retire_duration(&self) -> u32 {
        self.goal.retire_duration
    }

    /// Accumulation series against the target corpus
    pub fn corpus_timeline(&self) -> Vec<TimelinePoint> {
        self.accumulation
            .iter()
            .map(|p| TimelinePoint {
                age: p.age,
                total_value: p.total_value,
                target_corpus: self.goal.corpus_needed,
            })
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> PlanSummary {
        let last = self.accumulation.last();
        let projected_at_retirement = last.map(|p| p.total_value).unwrap_or(0.0);
        let total_invested = last.map(|p| p.invested_amount).unwrap_or(0.0);

        PlanSummary {
            corpus_needed: self.goal.corpus_needed,
            required_monthly_contribution: self.contribution.required_monthly_contribution,
            future_monthly_expenses: self.goal.future_monthly_expenses,
            emergency_fund: self.goal.emergency_fund,
            years_to_grow: self.goal.years_to_grow,
            retire_duration: self.goal.retire_duration,
            existing_savings_grown: self.contribution.existing_savings_grown,
            shortfall: self.contribution.shortfall,
            projected_at_retirement,
            total_invested,
            total_growth: projected_at_retirement - total_invested,
            depletion_age: depletion_age(&self.decumulation),
            total_withdrawn: total_withdrawn(&self.decumulation),
            final_corpus: self.decumulation.last().map(|p| p.remaining_corpus).unwrap_or(0.0),
            terminal_balance: self.terminal_balance,
        }
    }
}

/// Headline figures for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub corpus_needed: f64,
    pub required_monthly_contribution: f64,
    /// Monthly spending at retirement, inflation adjusted
    pub future_monthly_expenses: f64,
    pub emergency_fund: f64,
    pub years_to_grow: u32,
    pub retire_duration: u32,
    pub existing_savings_grown: f64,
    /// Negative when existing savings already beat the goal
    pub shortfall: f64,

    /// Portfolio value on retirement day from the yearly simulation
    pub projected_at_retirement: f64,
    /// Principal paid in by retirement, existing savings included
    pub total_invested: f64,
    /// Projected value less principal
    pub total_growth: f64,

    /// First age with a withdrawal due and no corpus left
    pub depletion_age: Option<u32>,
    /// Withdrawals taken from retirement up to life expectancy
    pub total_withdrawn: f64,
    /// Floored corpus at life expectancy
    pub final_corpus: f64,
    /// Unfloored balance at life expectancy
    pub terminal_balance: f64,
}
