//! Declarative descriptions of a parameter search and how its trials are
//! dispatched, consumed by an external search and batch submission library.
//!
//! Nothing here samples parameter values, generates grids, or submits jobs,
//! the types only describe the search for the library that does.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::error::SearchConfigError;


/// Range of values a single parameter is searched over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterRange {
    /// Continuous range between a low and high bound
    Continuous { low: f64, high: f64 },
    /// Explicit set of candidate values
    Categorical { values: Vec<f64> },
}

/// The set of tunable parameters, keyed by dotted configuration path
/// (for example `IEweights.0` for the first layer's inhibitory to
/// excitatory gain)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    /// Range per parameter path
    pub parameters: BTreeMap<String, ParameterRange>,
}

impl SearchSpace {
    pub fn new() -> Self {
        SearchSpace {
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a continuous parameter searched between `low` and `high`
    pub fn with_continuous(mut self, path: &str, low: f64, high: f64) -> Self {
        self.parameters.insert(
            path.to_string(),
            ParameterRange::Continuous { low: low, high: high },
        );

        self
    }

    /// Adds a parameter searched over an explicit set of values
    pub fn with_categorical(mut self, path: &str, values: Vec<f64>) -> Self {
        self.parameters.insert(
            path.to_string(),
            ParameterRange::Categorical { values: values },
        );

        self
    }

    /// Checks that the space has at least one parameter, every continuous
    /// range has finite bounds with low below high, and every categorical
    /// set is non-empty
    pub fn validate(&self) -> Result<(), SearchConfigError> {
        if self.parameters.is_empty() {
            return Err(SearchConfigError::EmptyParameterSpace);
        }

        for (path, range) in self.parameters.iter() {
            match range {
                ParameterRange::Continuous { low, high } => {
                    if !low.is_finite() || !high.is_finite() || low >= high {
                        return Err(SearchConfigError::InvalidBounds(path.clone()));
                    }
                },
                ParameterRange::Categorical { values } => {
                    if values.is_empty() {
                        return Err(SearchConfigError::EmptyCategorical(path.clone()));
                    }
                },
            }
        }

        Ok(())
    }
}

/// Direction the external optimizer moves the metric in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// Which of the external library's search strategies to run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// Exhaustive sweep over a grid of parameter values
    Grid,
    /// Uniform random sampling of the space
    Random,
    /// Model based sampling that concentrates trials in promising regions
    Bayesian,
}

/// A full search declaration, everything the external library needs besides
/// the job submission descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Label prefixed to trial names and output files
    pub label: String,
    /// The tunable parameters
    pub space: SearchSpace,
    /// Name of the metric each trial reports back
    pub metric: String,
    /// Whether the metric is minimized or maximized
    pub direction: Direction,
    /// Search strategy to run
    pub algorithm: SearchAlgorithm,
    /// Total number of trials to run
    pub num_trials: usize,
    /// Upper bound on concurrently running trials
    pub max_concurrent: usize,
    /// How often the controller polls running trials for completion (seconds),
    /// long simulations warrant long intervals
    pub poll_interval_secs: u64,
    /// Directory receiving per-trial result files
    pub output_path: String,
    /// Directory holding controller checkpoints so an interrupted search can resume
    pub checkpoint_path: String,
}

impl Default for SearchSpec {
    fn default() -> Self {
        SearchSpec {
            label: String::from("search"),
            space: SearchSpace::new(),
            metric: String::from("loss"),
            direction: Direction::Minimize,
            algorithm: SearchAlgorithm::Grid,
            num_trials: 1,
            max_concurrent: 1,
            poll_interval_secs: 30,
            output_path: String::from("../search_output"),
            checkpoint_path: String::from("../search_checkpoint"),
        }
    }
}

impl SearchSpec {
    /// Checks the declaration is complete enough to hand to the external library
    pub fn validate(&self) -> Result<(), SearchConfigError> {
        self.space.validate()?;

        if self.metric.is_empty() {
            return Err(SearchConfigError::MissingMetric);
        }
        if self.num_trials == 0 {
            return Err(SearchConfigError::NoTrials);
        }
        if self.max_concurrent == 0 {
            return Err(SearchConfigError::NoWorkers);
        }

        Ok(())
    }
}

/// Resource request for a Sun Grid Engine queue submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgeSubmission {
    /// Queue name
    pub queue: String,
    /// Cores per trial
    pub cores: usize,
    /// Virtual memory request, for example `120G`
    pub vmem: String,
    /// Wall clock limit, for example `15:00:00`
    pub realtime: String,
    /// Command launching one trial
    pub command: String,
}

/// Resource request for a SLURM submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlurmSubmission {
    /// Allocation the job is charged to
    pub allocation: String,
    /// Wall clock limit, for example `10:30:00`
    pub realtime: String,
    /// Nodes per trial
    pub nodes: usize,
    /// Cores per node
    pub cores_per_node: usize,
    /// Memory request, for example `128G`
    pub mem: String,
    /// Address notified on job state changes
    pub email: Option<String>,
    /// Command launching one trial
    pub command: String,
}

/// A remote submission host reached over SSH, trial files are staged over SFTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteHost {
    /// Host name as configured for SSH
    pub host: String,
    /// Identifier of the key used to authenticate, never the key itself
    pub key: String,
    /// Directory on the remote host the project is staged into
    pub remote_dir: String,
}

/// How each trial is submitted for execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JobSubmission {
    /// Run each trial as a local shell process
    Local { command: String },
    /// Submit through a Sun Grid Engine queue
    Sge(SgeSubmission),
    /// Submit through SLURM on the current host
    Slurm(SlurmSubmission),
    /// Submit through SLURM on a remote host over SSH
    SshSlurm { host: RemoteHost, job: SlurmSubmission },
}
