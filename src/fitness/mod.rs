//! A tool to reduce observed per-population firing rates into a scalar tuning loss.

use std::collections::HashMap;
use crate::constraints::RateConstraint;
use crate::error::FitnessError;


/// Observed mean firing rates (Hz) keyed by population name for one completed run
pub type ObservedRates = HashMap<String, f32>;

/// Looks up the observed rate of the given population
pub fn observed_rate(observed: &ObservedRates, population: &str) -> Result<f32, FitnessError> {
    match observed.get(population) {
        Some(rate) => Ok(*rate),
        None => Err(FitnessError::MissingPopulation(population.to_string())),
    }
}

/// Target activity for a single population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationTuningSpec {
    /// Desired mean firing rate (Hz)
    pub target: f32,
    /// Tolerance scale controlling how sharply deviation from the target is penalized,
    /// must be strictly positive
    pub width: f32,
    /// Rate at or below which the population counts as silent and is assigned
    /// the maximum penalty
    pub floor: f32,
}

/// Penalty assigned to a single population for one run
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationPenalty {
    /// Population name
    pub population: String,
    /// Observed mean firing rate (Hz)
    pub rate: f32,
    /// Penalty value, between 0 and the maximum penalty
    pub penalty: f32,
}

/// Result of scoring one run against the tuning table
#[derive(Debug, Clone)]
pub struct FitnessResult {
    /// Arithmetic mean of the per-population penalties
    pub loss: f32,
    /// Per-population penalties sorted by population name
    pub penalties: Vec<PopulationPenalty>,
}

impl FitnessResult {
    /// Returns a one line summary of each population's observed rate and penalty
    pub fn summary(&self) -> String {
        self.penalties.iter()
            .map(|penalty| format!(
                "{} rate={:.1} fit={:.0}", penalty.population, penalty.rate, penalty.penalty
            ))
            .collect::<Vec<String>>()
            .join("; ")
    }
}

/// Scores the per-population firing rates of a completed simulation run against
/// a table of target rates, producing a scalar loss for an external optimizer
/// to minimize
///
/// Each population firing above its silence floor is penalized with
/// `exp(factor * |target - rate| / width)` clipped at `max_penalty`, so a
/// population exactly on target scores 1 and the penalty grows with distance
/// from the target. A population at or below its floor is pathological and
/// always scores `max_penalty` no matter how close its rate is to the target.
/// The loss is the mean penalty across all populations
///
/// `factor` is 1 unless ordering checks are present and at least one of them
/// fails, in which case every exponential penalty in the run is scaled by
/// `constraint_penalty_factor`
pub struct RateFitnessScorer {
    /// Target activity per population name
    pub specs: HashMap<String, PopulationTuningSpec>,
    /// Penalty ceiling, must be a finite positive number
    pub max_penalty: f32,
    /// Qualitative ordering checks the tuned network is expected to satisfy
    pub constraints: Vec<RateConstraint>,
    /// Factor applied to every penalty when any ordering check fails, must be at least 1
    pub constraint_penalty_factor: f32,
}

impl Default for RateFitnessScorer {
    fn default() -> Self {
        RateFitnessScorer {
            specs: HashMap::new(),
            max_penalty: 1000.,
            constraints: Vec::new(),
            constraint_penalty_factor: 1.5,
        }
    }
}

impl RateFitnessScorer {
    /// Checks that the tuning table and penalty parameters are usable,
    /// errors on an empty table, a non-positive or non-finite penalty ceiling,
    /// any non-positive tolerance width, or a constraint penalty factor below 1
    pub fn validate(&self) -> Result<(), FitnessError> {
        if self.specs.is_empty() {
            return Err(FitnessError::NoPopulations);
        }
        if !self.max_penalty.is_finite() || self.max_penalty <= 0. {
            return Err(FitnessError::NonPositiveMaxPenalty);
        }
        if self.constraint_penalty_factor < 1. {
            return Err(FitnessError::ConstraintFactorBelowOne);
        }

        for (population, spec) in self.specs.iter() {
            if spec.width <= 0. {
                return Err(FitnessError::NonPositiveWidth(population.clone()));
            }
        }

        Ok(())
    }

    /// Scores one run, errors if the tuning parameters are malformed or if any
    /// population in the tuning table or an ordering check has no observed rate
    pub fn score(&self, observed: &ObservedRates) -> Result<FitnessResult, FitnessError> {
        self.validate()?;

        let factor = if self.all_constraints_hold(observed)? {
            1.
        } else {
            self.constraint_penalty_factor
        };

        let mut populations: Vec<&String> = self.specs.keys().collect();
        populations.sort();

        let mut penalties: Vec<PopulationPenalty> = Vec::with_capacity(populations.len());
        for population in populations {
            let spec = &self.specs[population];
            let rate = observed_rate(observed, population)?;

            // silent populations are worst case regardless of distance to target
            let penalty = if rate > spec.floor {
                (factor * (spec.target - rate).abs() / spec.width).exp().min(self.max_penalty)
            } else {
                self.max_penalty
            };

            penalties.push(
                PopulationPenalty {
                    population: population.clone(),
                    rate: rate,
                    penalty: penalty,
                }
            );
        }

        let loss = penalties.iter()
            .map(|penalty| penalty.penalty)
            .sum::<f32>() / penalties.len() as f32;

        Ok(FitnessResult { loss: loss, penalties: penalties })
    }

    // every check is evaluated, a missing population in any check surfaces
    // even when an earlier check already failed
    fn all_constraints_hold(&self, observed: &ObservedRates) -> Result<bool, FitnessError> {
        let mut all_hold = true;
        for constraint in self.constraints.iter() {
            if !constraint.evaluate(observed)? {
                all_hold = false;
            }
        }

        Ok(all_hold)
    }
}
