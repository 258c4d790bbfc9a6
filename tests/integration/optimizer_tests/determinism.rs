use flyer_tuning::{systems::FitnessEvaluator, Nsga2Engine, OptimizerConfig, RngManager};
use pretty_assertions::assert_eq;

use crate::common::{create_default_config, create_small_config, run_optimizer};

#[test]
fn test_same_seed_same_front() {
    let a = run_optimizer(create_default_config());
    let b = run_optimizer(create_default_config());

    assert_eq!(a.front, b.front);
    assert_eq!(a.population, b.population);
}

#[test]
fn test_different_seeds_explore_differently() {
    let a = run_optimizer(create_small_config(1));
    let b = run_optimizer(create_small_config(2));

    assert_ne!(a.population, b.population);
}

#[test]
fn test_injected_rng_manager_overrides_seed() {
    let config = create_small_config(99);
    let injected = Nsga2Engine::with_rng_manager(
        config.clone(),
        FitnessEvaluator::new(),
        RngManager::new(4),
    )
    .unwrap()
    .run()
    .unwrap();

    let seeded = run_optimizer(OptimizerConfig { seed: 4, ..config });

    assert_eq!(injected.front, seeded.front);
}

#[test]
fn test_parallel_run_is_reproducible() {
    let sequential = run_optimizer(create_small_config(8));
    let parallel = run_optimizer(OptimizerConfig {
        parallel_evaluation: true,
        ..create_small_config(8)
    });

    assert_eq!(sequential.front, parallel.front);
}
