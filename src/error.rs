//! Error types for the projection engine

/// Errors raised while sizing a goal or solving a contribution plan
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("invalid rate {rate}: rates must be greater than -100%")]
    InvalidRate { rate: f64 },

    #[error("invalid period count {periods}")]
    InvalidPeriods { periods: i32 },

    #[error("goal unreachable: shortfall of {shortfall:.2} with no months left to contribute")]
    UnreachableGoal { shortfall: f64 },

    #[error(
        "invalid ages: current {current_age}, retirement {retire_age}, life expectancy {life_expectancy}"
    )]
    InvalidAges {
        current_age: u32,
        retire_age: u32,
        life_expectancy: u32,
    },

    #[error("invalid {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, PlanError>;
