use serde::{Deserialize, Serialize};

use crate::components::{FitnessVector, ParameterVector, Population};
use crate::utils::OptimizerError;

/// A rank-0 member of the final population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParetoSolution {
    pub parameters: ParameterVector,
    pub fitness: FitnessVector,
}

/// Non-dominated trade-off set handed to reporting and plotting.
///
/// Ordered by the first objective (mean natural frequency) ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParetoFront {
    solutions: Vec<ParetoSolution>,
}

impl ParetoFront {
    /// Collects the rank-0 members of a ranked population.
    ///
    /// Penalized members never make the front, even when the whole
    /// population is degenerate and they share rank 0.
    pub fn extract(population: &Population) -> Self {
        let mut solutions: Vec<ParetoSolution> = population
            .iter()
            .filter(|individual| individual.rank == Some(0))
            .filter_map(|individual| {
                individual.fitness().map(|fitness| ParetoSolution {
                    parameters: *individual.parameters(),
                    fitness: *fitness,
                })
            })
            .filter(|solution| !solution.fitness.is_penalty())
            .collect();

        solutions.sort_by(|a, b| a.fitness.objective(0).total_cmp(&b.fitness.objective(0)));
        Self { solutions }
    }

    pub fn solutions(&self) -> &[ParetoSolution] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParetoSolution> {
        self.solutions.iter()
    }

    pub fn to_json(&self) -> Result<String, OptimizerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a ParetoFront {
    type Item = &'a ParetoSolution;
    type IntoIter = std::slice::Iter<'a, ParetoSolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
