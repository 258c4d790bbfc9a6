use flyer_tuning::{
    components::GeneBounds, systems::OptimizationResult, Nsga2Engine, OptimizerConfig,
    ParameterBounds,
};

/// The reference setup: 40 individuals, 25 generations, seed 1.
pub fn create_default_config() -> OptimizerConfig {
    OptimizerConfig::default()
}

/// A cheap configuration for tests that only need a few generations.
pub fn create_small_config(seed: u64) -> OptimizerConfig {
    OptimizerConfig {
        population_size: 12,
        generations: 6,
        seed,
        ..Default::default()
    }
}

/// Bounds pinning omega_n to zero, so every system has a double pole at the origin.
pub fn create_degenerate_bounds() -> ParameterBounds {
    ParameterBounds {
        omega_n: GeneBounds::new(0.0, 0.0),
        ..Default::default()
    }
}

pub fn run_optimizer(config: OptimizerConfig) -> OptimizationResult {
    Nsga2Engine::new(config)
        .expect("config should validate")
        .run()
        .expect("run should complete")
}
