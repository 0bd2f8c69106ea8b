//! Assembling the per-trial record reported to an external search controller.

use std::collections::BTreeMap;
use serde_json::{Map, Number, Value};
use crate::error::TrialError;
use crate::fitness::{FitnessResult, ObservedRates};


/// The flat result record for one completed trial, merging the optimizer's
/// input parameter values with the observed per-population rates and the
/// scored loss
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Parameter values the optimizer assigned to this trial, keyed by
    /// dotted configuration path
    pub inputs: BTreeMap<String, f64>,
    /// Observed mean firing rate (Hz) per population
    pub rates: BTreeMap<String, f32>,
    /// Scored loss for the trial
    pub loss: f32,
}

impl TrialRecord {
    /// Assembles the record for one scored run
    pub fn new(
        inputs: BTreeMap<String, f64>,
        observed: &ObservedRates,
        result: &FitnessResult,
    ) -> Self {
        let rates: BTreeMap<String, f32> = observed.iter()
            .map(|(population, rate)| (population.clone(), *rate))
            .collect();

        TrialRecord {
            inputs: inputs,
            rates: rates,
            loss: result.loss,
        }
    }

    /// Serializes the record as a single line JSON object with the inputs
    /// first, then the rates, then the loss, later keys winning on collision,
    /// errors if any value is not finite since the record format has no way
    /// to express one
    pub fn to_json_line(&self) -> Result<String, TrialError> {
        let mut record: Map<String, Value> = Map::new();

        for (path, value) in self.inputs.iter() {
            record.insert(path.clone(), json_number(*value, path)?);
        }
        for (population, rate) in self.rates.iter() {
            record.insert(population.clone(), json_number(*rate as f64, population)?);
        }
        record.insert(String::from("loss"), json_number(self.loss as f64, "loss")?);

        match serde_json::to_string(&Value::Object(record)) {
            Ok(line) => Ok(line),
            Err(e) => Err(TrialError::Serialization(e.to_string())),
        }
    }
}

fn json_number(value: f64, key: &str) -> Result<Value, TrialError> {
    match Number::from_f64(value) {
        Some(number) => Ok(Value::Number(number)),
        None => Err(TrialError::NonFiniteValue(key.to_string())),
    }
}
