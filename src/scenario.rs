//! Scenario runner for batch and sensitivity runs
//!
//! Every plan is an independent pure computation, so batches fan out across
//! threads with rayon and come back in input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::inputs::{InputParameters, RateAssumptions};
use crate::projection::{PlanConfig, PlanEngine, PlanResult};

/// Runs many plans under one engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let base = InputParameters::default();
///
/// let stresses = [
///     RateAssumptions::new(0.06, 0.10, 0.08),
///     RateAssumptions::new(0.08, 0.06, 0.05),
/// ];
/// for result in runner.run_rate_scenarios(&base, &stresses) {
///     println!("{:.0}", result?.goal.corpus_needed);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: PlanEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlanConfig) -> Self {
        Self {
            engine: PlanEngine::new(config),
        }
    }

    pub fn config(&self) -> &PlanConfig {
        self.engine.config()
    }

    /// Run a single plan
    pub fn run(&self, inputs: &InputParameters) -> Result<PlanResult> {
        self.engine.run(inputs)
    }

    /// Run plans for many people; one failure does not stop the others
    pub fn run_batch(&self, scenarios: &[InputParameters]) -> Vec<Result<PlanResult>> {
        log::debug!("running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|inputs| self.engine.run(inputs)).collect()
    }

    /// Run one person's plan under several rate assumptions
    pub fn run_rate_scenarios(
        &self,
        base: &InputParameters,
        rates: &[RateAssumptions],
    ) -> Vec<Result<PlanResult>> {
        log::debug!("running {} rate scenarios", rates.len());
        rates
            .par_iter()
            .map(|r| self.engine.run(&base.with_rates(r)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = (25..35)
            .map(|age| InputParameters {
                current_age: age,
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 10);
        for (inputs, result) in scenarios.iter().zip(&results) {
            let result = result.as_ref().unwrap();
            assert_eq!(result.inputs.current_age, inputs.current_age);
            assert_eq!(result.accumulation.len() as u32, inputs.years_to_grow() + 1);
        }
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            InputParameters::default(),
            InputParameters {
                existing_savings: 0.0,
                ..Default::default()
            },
        ];
        let results = runner.run_batch(&scenarios);
        for (inputs, batched) in scenarios.iter().zip(results) {
            assert_eq!(batched.unwrap(), runner.run(inputs).unwrap());
        }
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            InputParameters::default(),
            InputParameters {
                current_age: 35,
                retire_age: 35,
                existing_savings: 0.0,
                ..Default::default()
            },
            InputParameters::default(),
        ];

        let results = runner.run_batch(&scenarios);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(PlanError::UnreachableGoal { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_rate_scenarios() {
        let runner = ScenarioRunner::new();
        let base = InputParameters::default();
        let rates: Vec<_> = [0.04, 0.06, 0.08]
            .iter()
            .map(|&post| RateAssumptions::new(0.065, 0.08, post))
            .collect();

        let results: Vec<_> = runner
            .run_rate_scenarios(&base, &rates)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        // Higher post-retirement return needs a smaller corpus
        assert!(results[0].goal.corpus_needed > results[1].goal.corpus_needed);
        assert!(results[1].goal.corpus_needed > results[2].goal.corpus_needed);
        assert_eq!(results[2].goal.corpus_needed, runner.run(&base).unwrap().goal.corpus_needed);
    }
}
