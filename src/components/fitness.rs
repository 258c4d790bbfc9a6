use serde::{Deserialize, Serialize};

use crate::utils::OBJECTIVE_COUNT;

/// Objective values of one individual, both minimized.
///
/// The first objective is the mean natural frequency of the poles, the second
/// is the negated mean damping ratio so that damping is maximized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessVector {
    objectives: [f64; OBJECTIVE_COUNT],
}

impl FitnessVector {
    /// Builds the fitness from the pole averages.
    pub fn new(avg_natural_freq: f64, avg_damping_ratio: f64) -> Self {
        Self {
            objectives: [avg_natural_freq, -avg_damping_ratio],
        }
    }

    pub fn from_objectives(objectives: [f64; OBJECTIVE_COUNT]) -> Self {
        Self { objectives }
    }

    /// Worst possible fitness, dominated by every finite fitness.
    pub fn penalty() -> Self {
        Self {
            objectives: [f64::INFINITY; OBJECTIVE_COUNT],
        }
    }

    pub fn objectives(&self) -> &[f64; OBJECTIVE_COUNT] {
        &self.objectives
    }

    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    pub fn avg_natural_freq(&self) -> f64 {
        self.objectives[0]
    }

    pub fn avg_damping_ratio(&self) -> f64 {
        -self.objectives[1]
    }

    pub fn is_penalty(&self) -> bool {
        self.objectives.iter().all(|v| *v == f64::INFINITY)
    }

    pub fn is_finite(&self) -> bool {
        self.objectives.iter().all(|v| v.is_finite())
    }

    /// Pareto dominance under minimization: no worse in every objective and
    /// strictly better in at least one.
    pub fn dominates(&self, other: &FitnessVector) -> bool {
        let mut strictly_better = false;
        for (a, b) in self.objectives.iter().zip(other.objectives.iter()) {
            if a > b {
                return false;
            }
            if a < b {
                strictly_better = true;
            }
        }
        strictly_better
    }
}
