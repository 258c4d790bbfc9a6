use crate::components::{FitnessVector, ParameterVector};

/// One candidate solution together with its cached evaluation and the
/// per-generation ranking annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    parameters: ParameterVector,
    fitness: Option<FitnessVector>,
    /// Non-domination rank, 0 is the best front. `None` until ranked.
    pub rank: Option<usize>,
    /// Crowding distance within the rank, higher is more isolated.
    pub crowding_distance: f64,
}

impl Individual {
    pub fn new(parameters: ParameterVector) -> Self {
        Self {
            parameters,
            fitness: None,
            rank: None,
            crowding_distance: 0.0,
        }
    }

    pub fn with_fitness(parameters: ParameterVector, fitness: FitnessVector) -> Self {
        Self {
            fitness: Some(fitness),
            ..Self::new(parameters)
        }
    }

    pub fn parameters(&self) -> &ParameterVector {
        &self.parameters
    }

    /// Replaces the genome, invalidating the cached fitness and annotations.
    pub fn set_parameters(&mut self, parameters: ParameterVector) {
        self.parameters = parameters;
        self.fitness = None;
        self.clear_annotations();
    }

    pub fn fitness(&self) -> Option<&FitnessVector> {
        self.fitness.as_ref()
    }

    pub fn set_fitness(&mut self, fitness: FitnessVector) {
        self.fitness = Some(fitness);
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn clear_annotations(&mut self) {
        self.rank = None;
        self.crowding_distance = 0.0;
    }

    /// Crowded comparison: lower rank wins, ties go to the larger crowding distance.
    /// Unranked individuals lose to ranked ones.
    pub fn is_better_than(&self, other: &Individual) -> bool {
        let rank = self.rank.unwrap_or(usize::MAX);
        let other_rank = other.rank.unwrap_or(usize::MAX);
        rank < other_rank || (rank == other_rank && self.crowding_distance > other.crowding_distance)
    }
}
