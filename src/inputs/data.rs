//! Planning inputs for one projection run

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::tvm::check_rate;

/// Oldest age any of the three ages may take
pub const MAX_AGE: u32 = 150;

fn default_current_age() -> u32 {
    31
}
fn default_retire_age() -> u32 {
    35
}
fn default_life_expectancy() -> u32 {
    85
}
fn default_monthly_expenses() -> f64 {
    135_000.0
}
fn default_existing_savings() -> f64 {
    36_000_000.0
}
fn default_emergency_months() -> u32 {
    6
}
fn default_inflation_rate() -> f64 {
    0.065
}
fn default_return_rate() -> f64 {
    0.08
}

/// Inputs to a single plan, immutable for the run
///
/// Rates are annual fractions (0.065 for 6.5%). Monetary amounts are in
/// today's terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    #[serde(default = "default_current_age")]
    pub current_age: u32,
    #[serde(default = "default_retire_age")]
    pub retire_age: u32,
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,

    /// Monthly spending today
    #[serde(default = "default_monthly_expenses")]
    pub monthly_expenses: f64,
    /// Balance already invested
    #[serde(default = "default_existing_savings")]
    pub existing_savings: f64,
    /// Months of spending to hold as an emergency fund
    #[serde(default = "default_emergency_months")]
    pub emergency_months: u32,

    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,
    #[serde(default = "default_return_rate")]
    pub pre_retirement_return_rate: f64,
    #[serde(default = "default_return_rate")]
    pub post_retirement_return_rate: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            current_age: default_current_age(),
            retire_age: default_retire_age(),
            life_expectancy: default_life_expectancy(),
            monthly_expenses: default_monthly_expenses(),
            existing_savings: default_existing_savings(),
            emergency_months: default_emergency_months(),
            inflation_rate: default_inflation_rate(),
            pre_retirement_return_rate: default_return_rate(),
            post_retirement_return_rate: default_return_rate(),
        }
    }
}

impl InputParameters {
    /// Years of accumulation before retirement
    pub fn years_to_grow(&self) -> u32 {
        self.retire_age.saturating_sub(self.current_age)
    }

    /// Years of drawdown from retirement to life expectancy
    pub fn retire_duration(&self) -> u32 {
        self.life_expectancy.saturating_sub(self.retire_age)
    }

    /// Check the ordering and rate invariants the engine relies on
    ///
    /// Equal ages are accepted: retiring today and dying at retirement are
    /// degenerate but well-defined cases for the calculators.
    pub fn validate(&self) -> Result<()> {
        if self.current_age > self.retire_age
            || self.retire_age > self.life_expectancy
            || self.life_expectancy > MAX_AGE
        {
            return Err(PlanError::InvalidAges {
                current_age: self.current_age,
                retire_age: self.retire_age,
                life_expectancy: self.life_expectancy,
            });
        }

        check_amount("monthly_expenses", self.monthly_expenses)?;
        check_amount("existing_savings", self.existing_savings)?;

        check_rate(self.inflation_rate)?;
        check_rate(self.pre_retirement_return_rate)?;
        check_rate(self.post_retirement_return_rate)?;

        Ok(())
    }

    /// Copy of these inputs under different rate assumptions
    pub fn with_rates(&self, rates: &RateAssumptions) -> Self {
        Self {
            inflation_rate: rates.inflation_rate,
            pre_retirement_return_rate: rates.pre_retirement_return_rate,
            post_retirement_return_rate: rates.post_retirement_return_rate,
            ..self.clone()
        }
    }

    pub fn rates(&self) -> RateAssumptions {
        RateAssumptions {
            inflation_rate: self.inflation_rate,
            pre_retirement_return_rate: self.pre_retirement_return_rate,
            post_retirement_return_rate: self.post_retirement_return_rate,
        }
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidAmount { field, value })
    }
}

/// The three annual rate assumptions of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAssumptions {
    pub inflation_rate: f64,
    pub pre_retirement_return_rate: f64,
    pub post_retirement_return_rate: f64,
}

impl RateAssumptions {
    pub fn new(inflation_rate: f64, pre_retirement_return_rate: f64, post_retirement_return_rate: f64) -> Self {
        Self {
            inflation_rate,
            pre_retirement_return_rate,
            post_retirement_return_rate,
        }
    }
}
