//! Year-by-year growth of savings until retirement

use super::points::AccumulationPoint;
use super::state::AccumulationState;
use crate::contribution::ContributionPlan;
use crate::inputs::InputParameters;

/// One point per age from current age to retirement age, inclusive
///
/// Each point is the balance at the start of that age. Contributions are
/// added once a year, after growth, as twelve months' worth in one sum.
pub fn simulate_accumulation(inputs: &InputParameters, plan: &ContributionPlan) -> Vec<AccumulationPoint> {
    let annual_contribution = plan.annual_contribution();
    let mut state = AccumulationState::new(inputs.current_age, inputs.existing_savings);
    let mut points = Vec::with_capacity(inputs.years_to_grow() as usize + 1);

    while state.age < inputs.retire_age {
        points.push(state.point());
        state.advance_year(inputs.pre_retirement_return_rate, annual_contribution);
    }
    points.push(state.point());

    points
}
