mod crowding;
mod engine;
mod evaluation;
mod pareto;
mod ranking;
mod report;
mod selection;
mod variation;

pub use crowding::{assign_crowding_distances, crowding_distances};
pub use engine::{EngineState, GenerationSummary, Nsga2Engine, OptimizationResult};
pub use evaluation::{evaluate_population, EvaluationOutcome, FitnessEvaluator};
pub use pareto::{ParetoFront, ParetoSolution};
pub use ranking::{assign_ranks, non_dominated_sort};
pub use report::{solution_label, top_solutions, LongitudinalMode, PoleReport, SolutionReport};
pub use selection::{binary_tournament, environmental_selection, select_mating_pairs};
pub use variation::{make_offspring, polynomial_mutation, sbx_crossover};
