use serde::{Deserialize, Serialize};
use std::path::Path;

use super::operators::{CrossoverConfig, MutationConfig};
use crate::components::ParameterBounds;
use crate::utils::{OptimizerError, DEFAULT_GENERATIONS, DEFAULT_POPULATION_SIZE, DEFAULT_SEED};

/// Everything the NSGA-II engine needs to run reproducibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of parents kept each generation.
    pub population_size: usize,
    /// Generation budget, the initial population counts as the first generation.
    pub generations: usize,
    /// Master seed for every random stream.
    pub seed: u64,
    pub bounds: ParameterBounds,
    pub crossover: CrossoverConfig,
    pub mutation: MutationConfig,
    /// Evaluate individuals on the rayon thread pool.
    pub parallel_evaluation: bool,
    /// Stop early once this many fitness evaluations have been spent.
    pub max_evaluations: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            seed: DEFAULT_SEED,
            bounds: ParameterBounds::default(),
            crossover: CrossoverConfig::default(),
            mutation: MutationConfig::default(),
            parallel_evaluation: false,
            max_evaluations: None,
        }
    }
}

impl OptimizerConfig {
    /// Checks every setting, must pass before any generation runs.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.population_size < 2 {
            return Err(OptimizerError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.generations < 1 {
            return Err(OptimizerError::InvalidConfig(
                "generations must be at least 1".to_string(),
            ));
        }
        if let Some(max_evaluations) = self.max_evaluations {
            if max_evaluations < self.population_size {
                return Err(OptimizerError::InvalidConfig(format!(
                    "max_evaluations {} cannot cover the initial population of {}",
                    max_evaluations, self.population_size
                )));
            }
        }
        self.bounds.validate()?;
        self.crossover.validate()?;
        self.mutation.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, OptimizerError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OptimizerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OptimizerError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
