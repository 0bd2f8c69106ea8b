//! Qualitative ordering checks between observed population rates.

use std::fmt::{Debug, Formatter};
use crate::error::FitnessError;
use crate::fitness::{observed_rate, ObservedRates};


/// A named check over the observed rates expressing a relationship the tuned
/// network is expected to satisfy, such as an inhibitory population firing
/// faster than the excitatory population in the same layer
///
/// Checks return an error rather than a verdict when a population they
/// reference has no observed rate
pub struct RateConstraint {
    /// Human readable description of the relationship
    pub name: String,
    check: Box<dyn Fn(&ObservedRates) -> Result<bool, FitnessError> + Send + Sync>,
}

impl Debug for RateConstraint {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "RateConstraint({})", self.name)
    }
}

impl RateConstraint {
    /// Creates a constraint from a name and a check over the observed rates
    pub fn new<F>(name: &str, check: F) -> Self
    where
        F: Fn(&ObservedRates) -> Result<bool, FitnessError> + Send + Sync + 'static,
    {
        RateConstraint {
            name: name.to_string(),
            check: Box::new(check),
        }
    }

    /// Constraint that holds when `faster` fires at a strictly higher rate than `slower`
    pub fn exceeds(faster: &str, slower: &str) -> Self {
        let name = format!("{} > {}", faster, slower);
        let (faster, slower) = (faster.to_string(), slower.to_string());

        RateConstraint::new(&name, move |observed| {
            Ok(observed_rate(observed, &faster)? > observed_rate(observed, &slower)?)
        })
    }

    /// Constraint that holds when the mean rate of the `faster` group strictly
    /// exceeds the mean rate of the `slower` group
    pub fn mean_exceeds(faster: &[&str], slower: &[&str]) -> Self {
        let name = format!("mean({}) > mean({})", faster.join(", "), slower.join(", "));
        let faster: Vec<String> = faster.iter().map(|population| population.to_string()).collect();
        let slower: Vec<String> = slower.iter().map(|population| population.to_string()).collect();

        RateConstraint::new(&name, move |observed| {
            Ok(mean_rate(observed, &faster)? > mean_rate(observed, &slower)?)
        })
    }

    /// Evaluates the check against the observed rates
    pub fn evaluate(&self, observed: &ObservedRates) -> Result<bool, FitnessError> {
        (self.check)(observed)
    }
}

fn mean_rate(observed: &ObservedRates, populations: &[String]) -> Result<f32, FitnessError> {
    let mut total = 0.;
    for population in populations.iter() {
        total += observed_rate(observed, population)?;
    }

    Ok(total / populations.len() as f32) // an empty group means nan and the check fails
}
