//! Monthly contribution (SIP) solver

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::goal::DerivedGoal;
use crate::inputs::InputParameters;
use crate::tvm::PaymentTiming;

/// How the gap between existing savings and the goal gets closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// Existing savings compounded annually to retirement
    pub existing_savings_grown: f64,

    /// Corpus needed minus grown savings; negative means a surplus
    pub shortfall: f64,

    pub required_monthly_contribution: f64,
}

impl ContributionPlan {
    /// Twelve monthly contributions
    pub fn annual_contribution(&self) -> f64 {
        self.required_monthly_contribution * 12.0
    }

    /// Existing savings alone meet or beat the goal
    pub fn is_surplus(&self) -> bool {
        self.shortfall <= 0.0
    }

    /// Amount by which grown savings exceed the goal, zero when short
    pub fn surplus(&self) -> f64 {
        (-self.shortfall).max(0.0)
    }
}

/// Solve for start-of-month contributions
pub fn solve_contribution(inputs: &InputParameters, goal: &DerivedGoal) -> Result<ContributionPlan> {
    solve_contribution_with_timing(inputs, goal, PaymentTiming::Begin)
}

/// Solve for contributions paid at the given point of each month
pub fn solve_contribution_with_timing(
    inputs: &InputParameters,
    goal: &DerivedGoal,
    timing: PaymentTiming,
) -> Result<ContributionPlan> {
    let years_to_grow = inputs.years_to_grow();

    let existing_savings_grown = timing.future_value(
        inputs.pre_retirement_return_rate,
        years_to_grow as i32,
        0.0,
        inputs.existing_savings,
    )?;
    let shortfall = goal.corpus_needed - existing_savings_grown;

    let required_monthly_contribution = if shortfall <= 0.0 {
        log::info!("existing savings cover the goal with {:.2} to spare", -shortfall);
        0.0
    } else if years_to_grow == 0 {
        return Err(PlanError::UnreachableGoal { shortfall });
    } else {
        timing.payment(
            inputs.pre_retirement_return_rate / 12.0,
            (years_to_grow * 12) as i32,
            0.0,
            shortfall,
        )?
    };

    log::debug!(
        "contribution: savings grown {:.2}, shortfall {:.2}, monthly {:.2}",
        existing_savings_grown,
        shortfall,
        required_monthly_contribution
    );

    Ok(ContributionPlan {
        existing_savings_grown,
        shortfall,
        required_monthly_contribution,
    })
}
