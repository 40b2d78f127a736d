//! Year-by-year drawdown of the corpus from retirement to life expectancy

use serde::{Deserialize, Serialize};

use super::points::DecumulationPoint;
use super::state::{DeficitHandling, DrawdownState};
use crate::goal::DerivedGoal;
use crate::inputs::InputParameters;

/// Drawdown series plus the running balance behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawdown {
    pub points: Vec<DecumulationPoint>,
    /// Unfloored balance at life expectancy; negative is an unfunded deficit
    pub terminal_balance: f64,
}

impl Drawdown {
    /// First age at which the emitted corpus is exhausted
    pub fn depletion_age(&self) -> Option<u32> {
        depletion_age(&self.points)
    }

    /// Sum of the withdrawals taken before life expectancy
    pub fn total_withdrawn(&self) -> f64 {
        total_withdrawn(&self.points)
    }
}

/// First age with a withdrawal still due but nothing left to pay it
///
/// The final point is life expectancy itself and takes no withdrawal, so a
/// corpus that lands on zero there, or a plan with nothing to spend, never
/// counts as depleted.
pub fn depletion_age(points: &[DecumulationPoint]) -> Option<u32> {
    let due = points.len().saturating_sub(1);
    points[..due]
        .iter()
        .find(|p| p.annual_withdrawal > 0.0 && p.remaining_corpus <= 0.0)
        .map(|p| p.age)
}

/// Sum of the withdrawals taken before life expectancy
pub fn total_withdrawn(points: &[DecumulationPoint]) -> f64 {
    let due = points.len().saturating_sub(1);
    points[..due].iter().map(|p| p.annual_withdrawal).sum()
}

/// One point per age from retirement age to life expectancy, inclusive
pub fn simulate_decumulation(inputs: &InputParameters, goal: &DerivedGoal) -> Vec<DecumulationPoint> {
    simulate_drawdown(inputs, goal, DeficitHandling::Carry).points
}

/// Run the drawdown from the sized corpus and the first year's withdrawal
///
/// Each year the balance earns the nominal post-retirement return, pays that
/// year's withdrawal, and the withdrawal grows with inflation. Emitted
/// corpus values are floored at zero whatever `deficit` says; `deficit`
/// only decides whether the running balance may stay negative.
pub fn simulate_drawdown(inputs: &InputParameters, goal: &DerivedGoal, deficit: DeficitHandling) -> Drawdown {
    let mut state = DrawdownState::new(
        inputs.retire_age,
        goal.corpus_needed,
        goal.initial_annual_withdrawal(),
    );
    let mut points = Vec::with_capacity(inputs.retire_duration() as usize + 1);

    loop {
        points.push(state.point());
        if state.age >= inputs.life_expectancy {
            break;
        }
        state.advance_year(inputs.post_retirement_return_rate, inputs.inflation_rate, deficit);
    }

    let drawdown = Drawdown {
        points,
        terminal_balance: state.balance,
    };

    if let Some(age) = drawdown.depletion_age() {
        log::warn!(
            "corpus runs out at age {}, before life expectancy {}",
            age,
            inputs.life_expectancy
        );
    }

    drawdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::compute_goal;
    use approx::assert_relative_eq;

    fn goal(corpus: f64, monthly: f64) -> DerivedGoal {
        DerivedGoal {
            years_to_grow: 4,
            retire_duration: 50,
            future_monthly_expenses: monthly,
            real_monthly_rate: 0.0,
            corpus_needed: corpus,
            emergency_fund: 0.0,
        }
    }

    fn short_retirement() -> InputParameters {
        InputParameters {
            retire_age: 60,
            life_expectancy: 65,
            inflation_rate: 0.0,
            post_retirement_return_rate: 0.10,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_drawdown() {
        let inputs = InputParameters::default();
        let goal = compute_goal(&inputs).unwrap();
        let points = simulate_decumulation(&inputs, &goal);

        assert_eq!(points.len(), 51);
        assert_eq!(points[0].age, 35);
        assert_eq!(points[50].age, 85);
        assert_eq!(points[0].remaining_corpus, goal.corpus_needed);
        assert_relative_eq!(points[0].annual_withdrawal, 2084075.4880124996, max_relative = 1e-9);
        assert_relative_eq!(points[1].remaining_corpus, 78761816.42109424, max_relative = 1e-6);
        assert_relative_eq!(points[50].remaining_corpus, 232686872.1370473, max_relative = 1e-6);
        assert_relative_eq!(points[50].annual_withdrawal, 48572877.741259076, max_relative = 1e-9);
    }

    #[test]
    fn test_withdrawal_inflates() {
        let inputs = InputParameters::default();
        let points = simulate_decumulation(&inputs, &goal(1e9, 10_000.0));
        for pair in points.windows(2) {
            assert_relative_eq!(
                pair[1].annual_withdrawal,
                pair[0].annual_withdrawal * 1.065,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_emitted_corpus_is_floored() {
        // 100 earns 10 then pays 120: 100 -> -10 -> -131 -> -264.1 -> ...
        let drawdown = simulate_drawdown(&short_retirement(), &goal(100.0, 10.0), DeficitHandling::Carry);

        assert_eq!(drawdown.points.len(), 6);
        assert_eq!(drawdown.points[0].remaining_corpus, 100.0);
        assert!(drawdown.points[1..].iter().all(|p| p.remaining_corpus == 0.0));
        assert_eq!(drawdown.depletion_age(), Some(61));
    }

    #[test]
    fn test_carried_deficit_keeps_compounding() {
        let drawdown = simulate_drawdown(&short_retirement(), &goal(100.0, 10.0), DeficitHandling::Carry);

        let mut expected: f64 = 100.0;
        for _ in 0..5 {
            expected = expected + expected * 0.10 - 120.0;
        }
        assert_relative_eq!(drawdown.terminal_balance, expected, max_relative = 1e-12);
        assert!(drawdown.terminal_balance < -500.0);
    }

    #[test]
    fn test_floored_state_diverges_only_internally() {
        let inputs = short_retirement();
        let carried = simulate_drawdown(&inputs, &goal(100.0, 10.0), DeficitHandling::Carry);
        let floored = simulate_drawdown(&inputs, &goal(100.0, 10.0), DeficitHandling::FloorAtZero);

        assert_eq!(carried.points, floored.points);
        assert!(carried.terminal_balance < 0.0);
        assert_eq!(floored.terminal_balance, 0.0);
    }

    #[test]
    fn test_total_withdrawn() {
        let drawdown = simulate_drawdown(&short_retirement(), &goal(1e6, 10.0), DeficitHandling::Carry);
        assert_eq!(drawdown.total_withdrawn(), 120.0 * 5.0);
        assert_eq!(drawdown.depletion_age(), None);
    }

    #[test]
    fn test_zero_duration() {
        let inputs = InputParameters {
            retire_age: 85,
            life_expectancy: 85,
            ..Default::default()
        };
        let drawdown = simulate_drawdown(&inputs, &goal(0.0, 1_000.0), DeficitHandling::Carry);
        assert_eq!(drawdown.points.len(), 1);
        assert_eq!(drawdown.points[0].age, 85);
        assert_eq!(drawdown.points[0].remaining_corpus, 0.0);
        assert_eq!(drawdown.total_withdrawn(), 0.0);
        assert_eq!(drawdown.depletion_age(), None);
    }

    #[test]
    fn test_nothing_to_spend_is_not_depletion() {
        let drawdown = simulate_drawdown(&short_retirement(), &goal(0.0, 0.0), DeficitHandling::Carry);
        assert!(drawdown.points.iter().all(|p| p.remaining_corpus == 0.0));
        assert_eq!(drawdown.depletion_age(), None);
    }

    #[test]
    fn test_corpus_spent_exactly_at_life_expectancy() {
        // 600 at zero return pays 120 a year for five years, reaching zero at 65
        let inputs = InputParameters {
            post_retirement_return_rate: 0.0,
            ..short_retirement()
        };
        let drawdown = simulate_drawdown(&inputs, &goal(600.0, 10.0), DeficitHandling::Carry);
        assert_eq!(drawdown.points.last().unwrap().remaining_corpus, 0.0);
        assert_eq!(drawdown.depletion_age(), None);

        let short = simulate_drawdown(&inputs, &goal(480.0, 10.0), DeficitHandling::Carry);
        assert_eq!(short.depletion_age(), Some(64));
    }
}
