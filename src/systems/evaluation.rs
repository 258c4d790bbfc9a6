use argmin::core::{CostFunction, Error as ArgminError};
use rayon::prelude::*;
use tracing::warn;

use crate::components::{
    analyze, FitnessVector, Individual, ParameterVector, PoleAnalysis, Population,
};
use crate::utils::{mean, DynamicsError};

/// Maps tuning parameters to the stability/maneuverability objectives.
///
/// Builds the longitudinal transfer function, analyses its poles and returns
/// `(mean natural frequency, -mean damping ratio)`. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessEvaluator;

impl FitnessEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Per-pole analysis for reporting on a single solution.
    pub fn analyze(&self, params: &ParameterVector) -> Result<Vec<PoleAnalysis>, DynamicsError> {
        analyze(params)
    }

    /// # Errors
    /// `Degenerate` when a pole has no defined damping ratio (a pole at the
    /// origin) or the averages are not finite.
    pub fn evaluate(&self, params: &ParameterVector) -> Result<FitnessVector, DynamicsError> {
        let poles = self.analyze(params)?;

        if let Some(pole) = poles.iter().find(|p| !p.is_defined()) {
            return Err(DynamicsError::Degenerate(format!(
                "pole {} has undefined damping ratio",
                pole.pole
            )));
        }

        let avg_natural_freq = mean(poles.iter().map(|p| p.natural_freq))
            .ok_or_else(|| DynamicsError::Degenerate("system has no poles".to_string()))?;
        let avg_damping_ratio = mean(poles.iter().map(|p| p.damping_ratio))
            .ok_or_else(|| DynamicsError::Degenerate("system has no poles".to_string()))?;

        let fitness = FitnessVector::new(avg_natural_freq, avg_damping_ratio);
        if !fitness.is_finite() {
            return Err(DynamicsError::Degenerate(format!(
                "non-finite fitness {:?}",
                fitness.objectives()
            )));
        }
        Ok(fitness)
    }
}

impl CostFunction for FitnessEvaluator {
    type Param = ParameterVector;
    type Output = FitnessVector;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok(self.evaluate(param)?)
    }
}

/// Counts from one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub evaluated: usize,
    pub penalized: usize,
}

/// Evaluates one individual, replacing failures and NaN objectives with the
/// penalty fitness. Returns whether the individual was penalized.
fn evaluate_individual<P>(problem: &P, individual: &mut Individual) -> bool
where
    P: CostFunction<Param = ParameterVector, Output = FitnessVector>,
{
    match problem.cost(individual.parameters()) {
        Ok(fitness) if !fitness.objectives().iter().any(|v| v.is_nan()) => {
            individual.set_fitness(fitness);
            false
        }
        Ok(fitness) => {
            warn!(
                "Penalizing {:?}: NaN objectives {:?}",
                individual.parameters(),
                fitness.objectives()
            );
            individual.set_fitness(FitnessVector::penalty());
            true
        }
        Err(e) => {
            warn!("Penalizing {:?}: {}", individual.parameters(), e);
            individual.set_fitness(FitnessVector::penalty());
            true
        }
    }
}

/// Evaluates every individual that lacks a fitness.
///
/// With `parallel` set the work is spread over the rayon pool; the call only
/// returns once every individual is evaluated.
pub fn evaluate_population<P>(
    problem: &P,
    population: &mut Population,
    parallel: bool,
) -> EvaluationOutcome
where
    P: CostFunction<Param = ParameterVector, Output = FitnessVector> + Sync,
{
    let penalties: Vec<bool> = if parallel {
        population
            .as_mut_slice()
            .par_iter_mut()
            .filter(|individual| !individual.is_evaluated())
            .map(|individual| evaluate_individual(problem, individual))
            .collect()
    } else {
        population
            .iter_mut()
            .filter(|individual| !individual.is_evaluated())
            .map(|individual| evaluate_individual(problem, individual))
            .collect()
    };

    EvaluationOutcome {
        evaluated: penalties.len(),
        penalized: penalties.iter().filter(|p| **p).count(),
    }
}
