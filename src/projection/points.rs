//! Yearly output rows for the accumulation and drawdown series

use serde::{Deserialize, Serialize};

/// Portfolio at the start of one age before retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccumulationPoint {
    pub age: u32,
    pub total_value: f64,
    /// Principal paid in so far, excluding growth
    pub invested_amount: f64,
}

impl AccumulationPoint {
    pub fn growth(&self) -> f64 {
        self.total_value - self.invested_amount
    }
}

/// Corpus at the start of one age in retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecumulationPoint {
    pub age: u32,
    /// Never negative; a spent corpus shows as zero
    pub remaining_corpus: f64,
    pub annual_withdrawal: f64,
}

/// Projected portfolio against the goal, one row per age to retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub age: u32,
    pub total_value: f64,
    pub target_corpus: f64,
}
