use argmin::core::CostFunction;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::components::{FitnessVector, ParameterVector, Population};
use crate::resources::OptimizerConfig;
use crate::systems::{
    assign_ranks, environmental_selection, evaluate_population, make_offspring,
    FitnessEvaluator, ParetoFront,
};
use crate::utils::{
    OptimizerError, RngManager, INITIALIZATION_STREAM, MATING_STREAM, VARIATION_STREAM,
};

/// Phase of the generation loop the engine has last completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Initialized,
    Evaluated,
    Ranked,
    Selected,
    Varied,
    Replaced,
    Terminated,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Snapshot of the parent population after one environmental selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: usize,
    /// Non-penalized rank-0 members.
    pub front_size: usize,
    /// Lowest mean natural frequency among non-penalized members.
    pub best_natural_freq: Option<f64>,
    /// Highest mean damping ratio among non-penalized members.
    pub best_damping_ratio: Option<f64>,
    /// Fitness evaluations spent so far.
    pub evaluations: usize,
}

impl GenerationSummary {
    fn from_population(generation: usize, population: &Population, evaluations: usize) -> Self {
        let finite: Vec<&FitnessVector> = population
            .iter()
            .filter_map(|individual| individual.fitness())
            .filter(|fitness| !fitness.is_penalty())
            .collect();

        let best_natural_freq = finite
            .iter()
            .map(|fitness| fitness.avg_natural_freq())
            .min_by(f64::total_cmp);
        let best_damping_ratio = finite
            .iter()
            .map(|fitness| fitness.avg_damping_ratio())
            .max_by(f64::total_cmp);
        let front_size = population
            .iter()
            .filter(|individual| individual.rank == Some(0))
            .filter(|individual| individual.fitness().is_some_and(|f| !f.is_penalty()))
            .count();

        Self {
            generation,
            front_size,
            best_natural_freq,
            best_damping_ratio,
            evaluations,
        }
    }
}

/// Everything a finished run hands to its caller.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub front: ParetoFront,
    /// Final ranked and crowding-annotated parent population.
    pub population: Population,
    pub generations: usize,
    pub evaluations: usize,
    pub penalized: usize,
    pub history: Vec<GenerationSummary>,
}

/// Elitist NSGA-II driver.
///
/// Each call to [`step`](Self::step) performs exactly one transition of
/// `Initialized → Evaluated → Ranked → Selected → Varied → Replaced →
/// Evaluated …`, leaving `Selected` for `Terminated` once the generation
/// budget or the evaluation ceiling is reached. The initial population is
/// sampled on construction and counts as the first generation.
pub struct Nsga2Engine<P = FitnessEvaluator> {
    config: OptimizerConfig,
    problem: P,
    rng_manager: RngManager,
    mating_rng: ChaCha8Rng,
    variation_rng: ChaCha8Rng,
    state: EngineState,
    population: Population,
    offspring: Population,
    fronts: Vec<Vec<usize>>,
    generation: usize,
    evaluations: usize,
    penalized: usize,
    history: Vec<GenerationSummary>,
}

impl Nsga2Engine<FitnessEvaluator> {
    /// Engine over the longitudinal transfer-function fitness.
    pub fn new(config: OptimizerConfig) -> Result<Self, OptimizerError> {
        Self::with_problem(config, FitnessEvaluator::new())
    }
}

impl<P> Nsga2Engine<P>
where
    P: CostFunction<Param = ParameterVector, Output = FitnessVector> + Sync,
{
    pub fn with_problem(config: OptimizerConfig, problem: P) -> Result<Self, OptimizerError> {
        let rng_manager = RngManager::new(config.seed);
        Self::with_rng_manager(config, problem, rng_manager)
    }

    /// Builds an engine drawing every random stream from `rng_manager`
    /// instead of the configured seed.
    ///
    /// # Errors
    /// `InvalidConfig` or `InvalidParameter` when `config` does not validate.
    pub fn with_rng_manager(
        config: OptimizerConfig,
        problem: P,
        rng_manager: RngManager,
    ) -> Result<Self, OptimizerError> {
        config.validate()?;

        let mut init_rng = rng_manager.get_rng(INITIALIZATION_STREAM);
        let population = Population::random(config.population_size, &config.bounds, &mut init_rng);

        Ok(Self {
            mating_rng: rng_manager.get_rng(MATING_STREAM),
            variation_rng: rng_manager.get_rng(VARIATION_STREAM),
            rng_manager,
            config,
            problem,
            state: EngineState::Initialized,
            population,
            offspring: Population::default(),
            fronts: Vec::new(),
            generation: 0,
            evaluations: 0,
            penalized: 0,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn rng_manager(&self) -> &RngManager {
        &self.rng_manager
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Completed generations, counting the initial population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn penalized(&self) -> usize {
        self.penalized
    }

    pub fn history(&self) -> &[GenerationSummary] {
        &self.history
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    /// Advances the state machine by one transition and returns the new state.
    pub fn step(&mut self) -> Result<EngineState, OptimizerError> {
        match self.state {
            EngineState::Initialized | EngineState::Replaced => self.evaluate(),
            EngineState::Evaluated => self.rank()?,
            EngineState::Ranked => self.select(),
            EngineState::Selected if self.budget_exhausted() => self.terminate(),
            EngineState::Selected => self.vary(),
            EngineState::Varied => self.replace()?,
            EngineState::Terminated => {
                return Err(OptimizerError::InvalidTransition(
                    "engine has already terminated".to_string(),
                ))
            }
        }
        Ok(self.state)
    }

    /// Runs the loop to termination and returns the final front.
    pub fn run(&mut self) -> Result<OptimizationResult, OptimizerError> {
        info!(
            "Starting NSGA-II: population {}, generations {}, seed {}",
            self.config.population_size,
            self.config.generations,
            self.rng_manager.master_seed()
        );

        while !self.is_terminated() {
            self.step()?;
        }

        let result = self.result()?;
        info!(
            "NSGA-II finished after {} generations: {} front members, {} evaluations ({} penalized)",
            result.generations,
            result.front.len(),
            result.evaluations,
            result.penalized
        );
        Ok(result)
    }

    /// Outcome of the run so far; only available once a selection has happened.
    pub fn result(&self) -> Result<OptimizationResult, OptimizerError> {
        if !matches!(self.state, EngineState::Selected | EngineState::Terminated) {
            return Err(OptimizerError::InvalidTransition(format!(
                "no ranked parent population in state {}",
                self.state
            )));
        }

        Ok(OptimizationResult {
            front: ParetoFront::extract(&self.population),
            population: self.population.clone(),
            generations: self.generation,
            evaluations: self.evaluations,
            penalized: self.penalized,
            history: self.history.clone(),
        })
    }

    fn budget_exhausted(&self) -> bool {
        if self.generation >= self.config.generations {
            return true;
        }
        // The next round would overshoot the evaluation ceiling
        self.config
            .max_evaluations
            .is_some_and(|max| self.evaluations + self.config.population_size > max)
    }

    fn evaluate(&mut self) {
        let outcome = evaluate_population(
            &self.problem,
            &mut self.population,
            self.config.parallel_evaluation,
        );
        self.evaluations += outcome.evaluated;
        self.penalized += outcome.penalized;
        self.state = EngineState::Evaluated;
    }

    fn rank(&mut self) -> Result<(), OptimizerError> {
        self.population.clear_annotations();
        self.fronts = assign_ranks(&mut self.population)?;
        self.state = EngineState::Ranked;
        Ok(())
    }

    fn select(&mut self) {
        let combined = std::mem::take(&mut self.population);
        let fronts = std::mem::take(&mut self.fronts);
        self.population = environmental_selection(combined, &fronts, self.config.population_size);
        self.generation += 1;

        let summary =
            GenerationSummary::from_population(self.generation, &self.population, self.evaluations);
        debug!(
            "Generation {}: front size {}, best natural freq {:?}, best damping {:?}, {} evaluations",
            summary.generation,
            summary.front_size,
            summary.best_natural_freq,
            summary.best_damping_ratio,
            summary.evaluations
        );
        self.history.push(summary);
        self.state = EngineState::Selected;
    }

    fn vary(&mut self) {
        self.offspring = make_offspring(
            &self.population,
            self.config.population_size,
            &self.config.bounds,
            &self.config.crossover,
            &self.config.mutation,
            &mut self.mating_rng,
            &mut self.variation_rng,
        );
        self.state = EngineState::Varied;
    }

    fn replace(&mut self) -> Result<(), OptimizerError> {
        let offspring = std::mem::take(&mut self.offspring);
        for child in &offspring {
            self.config.bounds.check(child.parameters())?;
        }
        self.population.extend(offspring);
        self.state = EngineState::Replaced;
        Ok(())
    }

    fn terminate(&mut self) {
        self.state = EngineState::Terminated;
    }
}
