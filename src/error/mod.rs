use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential fitness scoring errors
pub enum FitnessError {
    /// A tuned or constrained population has no observed rate (population name)
    MissingPopulation(String),
    /// A population's tolerance width is zero or negative (population name)
    NonPositiveWidth(String),
    /// Maximum penalty is not a finite positive number
    NonPositiveMaxPenalty,
    /// Constraint penalty factor is below one
    ConstraintFactorBelowOne,
    /// There are no populations to score
    NoPopulations,
}

impl Display for FitnessError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            FitnessError::MissingPopulation(population) => write!(
                f, "Population {} has no observed rate", population
            ),
            FitnessError::NonPositiveWidth(population) => write!(
                f, "Population {} has a non-positive tuning width", population
            ),
            FitnessError::NonPositiveMaxPenalty => write!(
                f, "Maximum penalty must be a finite positive number"
            ),
            FitnessError::ConstraintFactorBelowOne => write!(
                f, "Constraint penalty factor must be at least 1"
            ),
            FitnessError::NoPopulations => write!(
                f, "No populations to score"
            ),
        }
    }
}

impl Debug for FitnessError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential search declaration errors
pub enum SearchConfigError {
    /// Search space has no parameters
    EmptyParameterSpace,
    /// Continuous bounds are not finite or low is not below high (parameter path)
    InvalidBounds(String),
    /// Categorical parameter has no values to choose from (parameter path)
    EmptyCategorical(String),
    /// Number of trials must be at least one
    NoTrials,
    /// Number of concurrent workers must be at least one
    NoWorkers,
    /// Metric name is empty
    MissingMetric,
}

impl Display for SearchConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SearchConfigError::EmptyParameterSpace => write!(
                f, "Search space has no parameters"
            ),
            SearchConfigError::InvalidBounds(path) => write!(
                f, "Parameter {} must have finite bounds with low below high", path
            ),
            SearchConfigError::EmptyCategorical(path) => write!(
                f, "Parameter {} has no values to choose from", path
            ),
            SearchConfigError::NoTrials => write!(
                f, "Number of trials must be at least 1"
            ),
            SearchConfigError::NoWorkers => write!(
                f, "Number of concurrent workers must be at least 1"
            ),
            SearchConfigError::MissingMetric => write!(
                f, "Metric name cannot be empty"
            ),
        }
    }
}

impl Debug for SearchConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential trial record errors
pub enum TrialError {
    /// Record value is not representable in JSON (key name)
    NonFiniteValue(String),
    /// Record could not be serialized
    Serialization(String),
}

impl Display for TrialError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            TrialError::NonFiniteValue(key) => write!(
                f, "Value for {} is not finite and cannot be reported", key
            ),
            TrialError::Serialization(reason) => write!(
                f, "Record could not be serialized: {}", reason
            ),
        }
    }
}

impl Debug for TrialError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum RateTuningError {
    /// Errors related to fitness scoring
    FitnessRelatedError(FitnessError),
    /// Errors related to search declarations
    SearchRelatedError(SearchConfigError),
    /// Errors related to trial records
    TrialRelatedError(TrialError),
}

impl Display for RateTuningError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RateTuningError::FitnessRelatedError(err) => write!(f, "{}", err),
            RateTuningError::SearchRelatedError(err) => write!(f, "{}", err),
            RateTuningError::TrialRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for RateTuningError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<FitnessError> for RateTuningError {
    fn from(err: FitnessError) -> RateTuningError {
        RateTuningError::FitnessRelatedError(err)
    }
}

impl From<SearchConfigError> for RateTuningError {
    fn from(err: SearchConfigError) -> RateTuningError {
        RateTuningError::SearchRelatedError(err)
    }
}

impl From<TrialError> for RateTuningError {
    fn from(err: TrialError) -> RateTuningError {
        RateTuningError::TrialRelatedError(err)
    }
}
