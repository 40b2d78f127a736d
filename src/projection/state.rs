//! Running balances carried from one simulated year to the next

use super::points::{AccumulationPoint, DecumulationPoint};

/// How the drawdown balance behaves once withdrawals exhaust it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum DeficitHandling {
    /// Keep the negative balance; growth and withdrawals keep applying to it.
    /// Only the emitted value is floored at zero.
    #[default]
    Carry,
    /// Clamp the running balance itself at zero
    FloorAtZero,
}

/// Balance during the accumulation years
#[derive(Debug, Clone)]
pub struct AccumulationState {
    pub age: u32,
    pub balance: f64,
    pub invested: f64,
}

impl AccumulationState {
    pub fn new(age: u32, existing_savings: f64) -> Self {
        Self {
            age,
            balance: existing_savings,
            invested: existing_savings,
        }
    }

    pub fn point(&self) -> AccumulationPoint {
        AccumulationPoint {
            age: self.age,
            total_value: self.balance,
            invested_amount: self.invested,
        }
    }

    /// Grow for one year, then add the year's contributions as one lump sum
    pub fn advance_year(&mut self, return_rate: f64, annual_contribution: f64) {
        self.balance = self.balance * (1.0 + return_rate) + annual_contribution;
        self.invested += annual_contribution;
        self.age += 1;
    }
}

/// Balance during the drawdown years
#[derive(Debug, Clone)]
pub struct DrawdownState {
    pub age: u32,
    pub balance: f64,
    pub annual_withdrawal: f64,
}

impl DrawdownState {
    pub fn new(age: u32, corpus: f64, annual_withdrawal: f64) -> Self {
        Self {
            age,
            balance: corpus,
            annual_withdrawal,
        }
    }

    pub fn point(&self) -> DecumulationPoint {
        DecumulationPoint {
            age: self.age,
            remaining_corpus: self.balance.max(0.0),
            annual_withdrawal: self.annual_withdrawal,
        }
    }

    /// Grow the balance, take this year's withdrawal, inflate next year's
    pub fn advance_year(&mut self, return_rate: f64, inflation_rate: f64, deficit: DeficitHandling) {
        let growth = self.balance * return_rate;
        self.balance = self.balance + growth - self.annual_withdrawal;
        if deficit == DeficitHandling::FloorAtZero {
            self.balance = self.balance.max(0.0);
        }

        self.annual_withdrawal *= 1.0 + inflation_rate;
        self.age += 1;
    }
}
