use serde::{Deserialize, Serialize};

use crate::utils::{
    OptimizerError, DEFAULT_CROSSOVER_ETA, DEFAULT_CROSSOVER_GENE_PROBABILITY,
    DEFAULT_CROSSOVER_PROBABILITY, DEFAULT_MUTATION_ETA, DEFAULT_MUTATION_GENE_PROBABILITY,
};

/// Simulated binary crossover settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossoverConfig {
    /// Chance that a mating pair is recombined at all
    pub probability: f64,
    /// Chance that each gene of a recombined pair is exchanged
    pub gene_probability: f64,
    /// Distribution index, larger keeps children closer to their parents
    pub distribution_index: f64,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            probability: DEFAULT_CROSSOVER_PROBABILITY,
            gene_probability: DEFAULT_CROSSOVER_GENE_PROBABILITY,
            distribution_index: DEFAULT_CROSSOVER_ETA,
        }
    }
}

/// Polynomial mutation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Chance that each gene is perturbed
    pub gene_probability: f64,
    pub distribution_index: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            gene_probability: DEFAULT_MUTATION_GENE_PROBABILITY,
            distribution_index: DEFAULT_MUTATION_ETA,
        }
    }
}

pub(crate) fn validate_probability(name: &str, value: f64) -> Result<(), OptimizerError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimizerError::InvalidConfig(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )))
    }
}

pub(crate) fn validate_distribution_index(name: &str, value: f64) -> Result<(), OptimizerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OptimizerError::InvalidConfig(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}

impl CrossoverConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        validate_probability("crossover.probability", self.probability)?;
        validate_probability("crossover.gene_probability", self.gene_probability)?;
        validate_distribution_index("crossover.distribution_index", self.distribution_index)
    }
}

impl MutationConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        validate_probability("mutation.gene_probability", self.gene_probability)?;
        validate_distribution_index("mutation.distribution_index", self.distribution_index)
    }
}
