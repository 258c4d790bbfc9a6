pub mod components;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{FitnessVector, Individual, ParameterBounds, ParameterVector, Population};
pub use resources::{OptimizerConfig, OptimizerConfigBuilder};
pub use systems::{FitnessEvaluator, Nsga2Engine, OptimizationResult, ParetoFront};
pub use utils::{DynamicsError, OptimizerError, RngManager};
