pub mod dynamics;
mod fitness;
mod individual;
mod parameters;
mod population;

pub use dynamics::{analyze, polynomial_roots, PoleAnalysis, StepResponse, TransferFunction};
pub use fitness::FitnessVector;
pub use individual::Individual;
pub use parameters::{GeneBounds, ParameterBounds, ParameterVector};
pub use population::Population;
