//! Planning inputs and loaders

mod data;
mod loader;

pub use data::{InputParameters, RateAssumptions, MAX_AGE};
pub use loader::{load_inputs_json, load_scenarios, load_scenarios_from_reader, LoadError};
