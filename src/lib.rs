//! Retirement Goal - deterministic projection engine for retirement planning
//!
//! This library provides:
//! - Time value of money primitives (annuity-due by default)
//! - Retirement corpus sizing from today's expenses and inflation
//! - Monthly contribution (SIP) solving against a corpus shortfall
//! - Year-by-year accumulation and drawdown simulation
//! - Batch and rate-sensitivity runs, CSV export

pub mod error;
pub mod tvm;
pub mod inputs;
pub mod goal;
pub mod contribution;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{PlanError, Result};
pub use inputs::{InputParameters, RateAssumptions};
pub use goal::{compute_goal, DerivedGoal};
pub use contribution::{solve_contribution, ContributionPlan};
pub use projection::{
    simulate_accumulation, simulate_decumulation, AccumulationPoint, DecumulationPoint,
    PlanConfig, PlanEngine, PlanResult,
};
pub use scenario::ScenarioRunner;
