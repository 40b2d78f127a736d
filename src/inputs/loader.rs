//! Load planning inputs from JSON and CSV files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;

use super::InputParameters;
use crate::error::PlanError;

/// Errors raised while reading inputs from disk
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario {row}: {source}")]
    Invalid { row: usize, source: PlanError },
}

/// Load one set of inputs from a JSON object; missing fields take defaults
pub fn load_inputs_json<P: AsRef<Path>>(path: P) -> Result<InputParameters, LoadError> {
    let file = File::open(path)?;
    let inputs: InputParameters = serde_json::from_reader(BufReader::new(file))?;
    inputs
        .validate()
        .map_err(|source| LoadError::Invalid { row: 1, source })?;
    Ok(inputs)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<InputParameters>, LoadError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
///
/// The header row names the `InputParameters` fields. Rows are numbered
/// from 1 in validation errors.
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<InputParameters>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let inputs: InputParameters = result?;
        inputs
            .validate()
            .map_err(|source| LoadError::Invalid { row: index + 1, source })?;
        scenarios.push(inputs);
    }

    Ok(scenarios)
}
