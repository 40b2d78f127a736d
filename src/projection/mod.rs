//! Plan engine and the accumulation and drawdown simulators

mod state;
mod points;
mod accumulation;
mod decumulation;
mod engine;

pub use state::{AccumulationState, DeficitHandling, DrawdownState};
pub use points::{AccumulationPoint, DecumulationPoint, TimelinePoint};
pub use accumulation::simulate_accumulation;
pub use decumulation::{depletion_age, simulate_decumulation, simulate_drawdown, total_withdrawn, Drawdown};
pub use engine::{PlanConfig, PlanEngine, PlanResult, PlanSummary};
