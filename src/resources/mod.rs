pub mod config;

pub use config::{CrossoverConfig, MutationConfig, OptimizerConfig, OptimizerConfigBuilder};
