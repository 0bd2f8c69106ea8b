//! Tuning targets and ordering checks for a layered cortical column model.

use std::collections::HashMap;
use crate::constraints::RateConstraint;
use crate::fitness::{PopulationTuningSpec, RateFitnessScorer};


/// Excitatory populations of the column across layers 2/3 through 6
pub const EXCITATORY_POPULATIONS: [&str; 7] = [
    "IT2", "IT4", "IT5A", "IT5B", "PT5B", "IT6", "CT6",
];

/// Inhibitory populations of the column across layers 2/3 through 6
pub const INHIBITORY_POPULATIONS: [&str; 10] = [
    "PV2", "SOM2",
    "PV4", "SOM4",
    "PV5A", "SOM5A",
    "PV5B", "SOM5B",
    "PV6", "SOM6",
];

/// Excitatory populations of layer 5
const L5_EXCITATORY: [&str; 3] = ["IT5A", "IT5B", "PT5B"];

/// Excitatory populations of layer 6
const L6_EXCITATORY: [&str; 2] = ["IT6", "CT6"];

/// Tuning used for every excitatory population
pub fn excitatory_tuning() -> PopulationTuningSpec {
    PopulationTuningSpec {
        target: 5.,
        width: 5.,
        floor: 0.5,
    }
}

/// Tuning used for every inhibitory population
pub fn inhibitory_tuning() -> PopulationTuningSpec {
    PopulationTuningSpec {
        target: 10.,
        width: 15.,
        floor: 0.25,
    }
}

/// Generates the tuning table for the full column
pub fn column_tuning_specs() -> HashMap<String, PopulationTuningSpec> {
    let mut specs: HashMap<String, PopulationTuningSpec> = HashMap::new();

    for population in EXCITATORY_POPULATIONS.iter() {
        specs.insert(population.to_string(), excitatory_tuning());
    }
    for population in INHIBITORY_POPULATIONS.iter() {
        specs.insert(population.to_string(), inhibitory_tuning());
    }

    specs
}

/// Generates the ordering checks a well tuned column is expected to satisfy,
/// within each layer interneurons should outpace the intratelencephalic cells
/// and parvalbumin cells should outpace somatostatin cells, while excitatory
/// activity should fall off from layer 5 to layer 6 to layer 2/3
pub fn column_ordering_constraints() -> Vec<RateConstraint> {
    let mut constraints: Vec<RateConstraint> = Vec::new();

    // layer 4 interneurons are left unconstrained
    for (pv, som, it) in [
        ("PV2", "SOM2", "IT2"),
        ("PV5A", "SOM5A", "IT5A"),
        ("PV5B", "SOM5B", "IT5B"),
        ("PV6", "SOM6", "IT6"),
    ] {
        constraints.push(RateConstraint::exceeds(pv, it));
        constraints.push(RateConstraint::exceeds(som, it));
        constraints.push(RateConstraint::exceeds(pv, som));
    }

    constraints.push(RateConstraint::mean_exceeds(&L5_EXCITATORY, &L6_EXCITATORY));
    constraints.push(RateConstraint::mean_exceeds(&L6_EXCITATORY, &["IT2"]));

    constraints
}

/// Assembles a scorer for the full column with the stock penalty ceiling,
/// use `ordering_checks` to scale penalties when the qualitative layer
/// relationships are violated
pub fn column_scorer(ordering_checks: bool) -> RateFitnessScorer {
    let constraints = if ordering_checks {
        column_ordering_constraints()
    } else {
        Vec::new()
    };

    RateFitnessScorer {
        specs: column_tuning_specs(),
        constraints: constraints,
        ..Default::default()
    }
}
