//! # Rate Tuning
//!
//! `rate_tuning` is a package for tuning the population firing rates of
//! biologically detailed neural network simulations against target activity
//! levels. A simulation engine runs a network of named populations and reports
//! the mean firing rate of each one, this package reduces those rates into a
//! single scalar loss that an external parameter search minimizes across many
//! simulation trials. Populations firing near their target rate score well,
//! populations that have gone silent are always treated as worst case, and an
//! optional set of qualitative ordering checks (such as inhibitory cells
//! firing faster than excitatory cells in the same layer) scales every penalty
//! when the network looks qualitatively wrong.
//!
//! The package also carries the tuning table and ordering checks for a layered
//! cortical column model, the per-trial result record reported back to the
//! search controller, and declarative descriptions of the search space and the
//! batch systems trials are dispatched through. The search itself, the
//! simulation, and all job submission are performed by external tools, nothing
//! in this package runs a simulation or submits a job.
//!
//! ## Example Code
//!
//! ### Scoring a run against target rates
//!
//! ```rust
//! use std::collections::HashMap;
//! use rate_tuning::{
//!     fitness::{ObservedRates, PopulationTuningSpec, RateFitnessScorer},
//!     constraints::RateConstraint,
//! };
//!
//! let mut specs: HashMap<String, PopulationTuningSpec> = HashMap::new();
//! specs.insert(
//!     String::from("E"),
//!     PopulationTuningSpec { target: 5., width: 5., floor: 0.5 },
//! );
//! specs.insert(
//!     String::from("I"),
//!     PopulationTuningSpec { target: 10., width: 15., floor: 0.25 },
//! );
//!
//! let scorer = RateFitnessScorer {
//!     specs: specs,
//!     constraints: vec![RateConstraint::exceeds("I", "E")],
//!     ..Default::default()
//! };
//!
//! let mut observed: ObservedRates = HashMap::new();
//! observed.insert(String::from("E"), 5.);
//! observed.insert(String::from("I"), 10.);
//!
//! let result = scorer.score(&observed).expect("Could not score run");
//!
//! // both populations are exactly on target and the ordering check holds
//! assert_eq!(result.loss, 1.);
//! println!("{}", result.summary());
//! ```
//!
//! ### Scoring a cortical column and reporting the trial
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use rate_tuning::{
//!     column::{column_scorer, EXCITATORY_POPULATIONS, INHIBITORY_POPULATIONS},
//!     fitness::ObservedRates,
//!     trial::TrialRecord,
//! };
//!
//! // rates as reported by the simulation engine for one run
//! let mut observed: ObservedRates = ObservedRates::new();
//! for population in EXCITATORY_POPULATIONS.iter() {
//!     observed.insert(population.to_string(), 4.2);
//! }
//! for population in INHIBITORY_POPULATIONS.iter() {
//!     observed.insert(population.to_string(), 11.5);
//! }
//!
//! let scorer = column_scorer(false);
//! let result = scorer.score(&observed).expect("Could not score run");
//!
//! // parameter values the optimizer assigned to this trial
//! let mut inputs: BTreeMap<String, f64> = BTreeMap::new();
//! inputs.insert(String::from("EEGain"), 0.35);
//!
//! let record = TrialRecord::new(inputs, &observed, &result);
//! let line = record.to_json_line().expect("Could not serialize record");
//! assert!(line.contains("\"loss\""));
//! ```
//!
//! ### Declaring a parameter search
//!
//! ```rust
//! use rate_tuning::search::{
//!     Direction, JobSubmission, SearchAlgorithm, SearchSpace, SearchSpec, SgeSubmission,
//! };
//!
//! let space = SearchSpace::new()
//!     .with_continuous("EEGain", 0.2, 0.5)
//!     .with_continuous("IEweights.0", 0.4, 0.6)
//!     .with_continuous("IEweights.1", 0.4, 0.6);
//!
//! let spec = SearchSpec {
//!     label: String::from("column_rates"),
//!     space: space,
//!     algorithm: SearchAlgorithm::Bayesian,
//!     direction: Direction::Minimize,
//!     num_trials: 100,
//!     max_concurrent: 9,
//!     ..Default::default()
//! };
//!
//! spec.validate().expect("Invalid search declaration");
//!
//! let submission = JobSubmission::Sge(
//!     SgeSubmission {
//!         queue: String::from("cpu.q"),
//!         cores: 64,
//!         vmem: String::from("120G"),
//!         realtime: String::from("15:00:00"),
//!         command: String::from("mpiexec -n $NSLOTS column_sim run_trial"),
//!     }
//! );
//!
//! // both halves of the declaration are handed to the external search library
//! let _ = serde_json::to_string(&submission).expect("Could not serialize submission");
//! ```

pub mod column;
pub mod constraints;
pub mod error;
pub mod fitness;
pub mod search;
pub mod trial;
