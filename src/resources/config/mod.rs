mod builder;
mod operators;
mod optimizer;

pub use builder::OptimizerConfigBuilder;
pub use operators::{CrossoverConfig, MutationConfig};
pub use optimizer::OptimizerConfig;
