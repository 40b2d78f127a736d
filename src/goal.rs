//! Retirement goal sizing
//!
//! Turns today's spending into the spending level at retirement, then prices
//! the corpus that funds that spending, withdrawn monthly and growing with
//! inflation, until life expectancy.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inputs::InputParameters;
use crate::tvm::PaymentTiming;

/// Targets derived once per run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedGoal {
    pub years_to_grow: u32,
    pub retire_duration: u32,

    /// Monthly spending at retirement, in that day's money
    pub future_monthly_expenses: f64,

    /// Post-retirement return net of inflation, per month
    pub real_monthly_rate: f64,

    /// Balance needed on retirement day
    pub corpus_needed: f64,

    pub emergency_fund: f64,
}

impl DerivedGoal {
    /// First year's drawdown
    pub fn initial_annual_withdrawal(&self) -> f64 {
        self.future_monthly_expenses * 12.0
    }
}

/// Fisher real rate: nominal return with inflation removed
pub fn real_rate(nominal_rate: f64, inflation_rate: f64) -> f64 {
    (1.0 + nominal_rate) / (1.0 + inflation_rate) - 1.0
}

/// Size the goal with start-of-month withdrawals
pub fn compute_goal(inputs: &InputParameters) -> Result<DerivedGoal> {
    compute_goal_with_timing(inputs, PaymentTiming::Begin)
}

/// Size the goal with withdrawals at the given point of each month
pub fn compute_goal_with_timing(inputs: &InputParameters, timing: PaymentTiming) -> Result<DerivedGoal> {
    inputs.validate()?;

    let years_to_grow = inputs.years_to_grow();
    let retire_duration = inputs.retire_duration();

    let future_monthly_expenses =
        timing.future_value(inputs.inflation_rate, years_to_grow as i32, 0.0, inputs.monthly_expenses)?;

    let real_monthly_rate = real_rate(inputs.post_retirement_return_rate, inputs.inflation_rate) / 12.0;
    if real_monthly_rate < 0.0 {
        log::warn!(
            "post-retirement return {:.4} is below inflation {:.4}; real return is negative",
            inputs.post_retirement_return_rate,
            inputs.inflation_rate
        );
    }

    // Withdrawals leave the corpus, so they enter as negative payments
    let corpus_needed = timing.present_value(
        real_monthly_rate,
        (retire_duration * 12) as i32,
        -future_monthly_expenses,
        0.0,
    )?;

    let emergency_fund = inputs.monthly_expenses * inputs.emergency_months as f64;

    log::debug!(
        "goal: future monthly expenses {:.2}, corpus needed {:.2}, emergency fund {:.2}",
        future_monthly_expenses,
        corpus_needed,
        emergency_fund
    );

    Ok(DerivedGoal {
        years_to_grow,
        retire_duration,
        future_monthly_expenses,
        real_monthly_rate,
        corpus_needed,
        emergency_fund,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_goal() {
        let goal = compute_goal(&InputParameters::default()).unwrap();

        assert_eq!(goal.years_to_grow, 4);
        assert_eq!(goal.retire_duration, 50);
        assert_relative_eq!(goal.future_monthly_expenses, 173672.95733437498, max_relative = 1e-9);
        assert_relative_eq!(goal.real_monthly_rate, 0.0011737089201878104, max_relative = 1e-9);
        assert_relative_eq!(goal.corpus_needed, 74857307.32324697, max_relative = 1e-6);
        assert_eq!(goal.emergency_fund, 810_000.0);
    }

    #[test]
    fn test_zero_rates_are_linear() {
        let inputs = InputParameters {
            inflation_rate: 0.0,
            post_retirement_return_rate: 0.0,
            monthly_expenses: 1_000.0,
            ..Default::default()
        };
        let goal = compute_goal(&inputs).unwrap();

        assert_eq!(goal.future_monthly_expenses, 1_000.0);
        assert_eq!(goal.real_monthly_rate, 0.0);
        assert_eq!(goal.corpus_needed, 1_000.0 * 12.0 * 50.0);
    }

    #[test]
    fn test_zero_retire_duration() {
        let inputs = InputParameters {
            retire_age: 85,
            life_expectancy: 85,
            ..Default::default()
        };
        let goal = compute_goal(&inputs).unwrap();
        assert_eq!(goal.retire_duration, 0);
        assert_eq!(goal.corpus_needed, 0.0);
    }

    #[test]
    fn test_negative_real_rate_is_not_an_error() {
        let inputs = InputParameters {
            inflation_rate: 0.10,
            post_retirement_return_rate: 0.04,
            ..Default::default()
        };
        let goal = compute_goal(&inputs).unwrap();
        assert!(goal.real_monthly_rate < 0.0);

        // Spending power erodes, so more than the undiscounted total is needed
        let undiscounted = goal.future_monthly_expenses * 12.0 * goal.retire_duration as f64;
        assert!(goal.corpus_needed > undiscounted);
    }

    #[test]
    fn test_end_of_month_needs_less() {
        let inputs = InputParameters::default();
        let begin = compute_goal(&inputs).unwrap();
        let end = compute_goal_with_timing(&inputs, PaymentTiming::End).unwrap();
        assert!(end.corpus_needed < begin.corpus_needed);
        assert_relative_eq!(
            begin.corpus_needed,
            end.corpus_needed * (1.0 + begin.real_monthly_rate),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_rejects_total_loss_inflation() {
        let inputs = InputParameters {
            inflation_rate: -1.0,
            ..Default::default()
        };
        assert_eq!(compute_goal(&inputs), Err(PlanError::InvalidRate { rate: -1.0 }));
    }

    #[test]
    fn test_real_rate() {
        assert_relative_eq!(real_rate(0.08, 0.065), 1.08 / 1.065 - 1.0);
        assert_eq!(real_rate(0.05, 0.05), 0.0);
    }
}
