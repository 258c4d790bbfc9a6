use serde_json::Value;
use tracing::info;

use super::operators::{CrossoverConfig, MutationConfig};
use super::optimizer::OptimizerConfig;
use crate::components::{GeneBounds, ParameterBounds};
use crate::utils::OptimizerError;

/// Incrementally assembles an [`OptimizerConfig`], leaving unset fields at their defaults.
#[derive(Default, Debug, Clone)]
pub struct OptimizerConfigBuilder {
    pub population_size: Option<usize>,
    pub generations: Option<usize>,
    pub seed: Option<u64>,
    pub bounds: Option<ParameterBounds>,
    pub crossover: Option<CrossoverConfig>,
    pub mutation: Option<MutationConfig>,
    pub parallel_evaluation: Option<bool>,
    pub max_evaluations: Option<usize>,
}

fn parse_gene_bounds(value: &Value, default: GeneBounds) -> GeneBounds {
    GeneBounds {
        lower: value
            .get("lower")
            .and_then(|v| v.as_f64())
            .unwrap_or(default.lower),
        upper: value
            .get("upper")
            .and_then(|v| v.as_f64())
            .unwrap_or(default.upper),
    }
}

impl OptimizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(value: &Value) -> Result<Self, OptimizerError> {
        let mut builder = Self::new();

        builder.population_size = value
            .get("population_size")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize);
        builder.generations = value
            .get("generations")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize);
        builder.seed = value.get("seed").and_then(|v| v.as_u64());
        builder.parallel_evaluation = value.get("parallel_evaluation").and_then(|v| v.as_bool());
        builder.max_evaluations = value
            .get("max_evaluations")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize);

        if let Some(bounds) = value.get("bounds") {
            let defaults = ParameterBounds::default();
            builder.bounds = Some(ParameterBounds {
                k: bounds
                    .get("k")
                    .map_or(defaults.k, |b| parse_gene_bounds(b, defaults.k)),
                c: bounds
                    .get("c")
                    .map_or(defaults.c, |b| parse_gene_bounds(b, defaults.c)),
                zeta: bounds
                    .get("zeta")
                    .map_or(defaults.zeta, |b| parse_gene_bounds(b, defaults.zeta)),
                omega_n: bounds
                    .get("omega_n")
                    .map_or(defaults.omega_n, |b| parse_gene_bounds(b, defaults.omega_n)),
            });
        }

        // Operator sections are plain data, let serde fill the missing fields
        if let Some(crossover) = value.get("crossover") {
            builder.crossover = Some(serde_json::from_value(crossover.clone())?);
        }
        if let Some(mutation) = value.get("mutation") {
            builder.mutation = Some(serde_json::from_value(mutation.clone())?);
        }

        Ok(builder)
    }

    pub fn population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }

    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bounds(mut self, bounds: ParameterBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn crossover(mut self, crossover: CrossoverConfig) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn mutation(mut self, mutation: MutationConfig) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn parallel_evaluation(mut self, parallel: bool) -> Self {
        self.parallel_evaluation = Some(parallel);
        self
    }

    pub fn max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = Some(max_evaluations);
        self
    }

    /// Fills unset fields with defaults and validates the result.
    pub fn build(&self) -> Result<OptimizerConfig, OptimizerError> {
        let defaults = OptimizerConfig::default();
        let config = OptimizerConfig {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            seed: self.seed.unwrap_or(defaults.seed),
            bounds: self.bounds.unwrap_or(defaults.bounds),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            mutation: self.mutation.unwrap_or(defaults.mutation),
            parallel_evaluation: self
                .parallel_evaluation
                .unwrap_or(defaults.parallel_evaluation),
            max_evaluations: self.max_evaluations.or(defaults.max_evaluations),
        };
        config.validate()?;

        info!(
            "Building OptimizerConfig with seed: {}, population: {}, generations: {}",
            config.seed, config.population_size, config.generations
        );
        Ok(config)
    }
}
