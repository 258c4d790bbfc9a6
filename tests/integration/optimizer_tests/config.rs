use flyer_tuning::{
    components::GeneBounds, Nsga2Engine, OptimizerConfig, OptimizerConfigBuilder, OptimizerError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_yaml_file_round_trip_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuning.yaml");

    let config = OptimizerConfig {
        population_size: 16,
        generations: 3,
        seed: 21,
        ..Default::default()
    };
    config.save(&path).unwrap();
    let loaded = OptimizerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let result = Nsga2Engine::new(loaded).unwrap().run().unwrap();
    assert_eq!(result.population.len(), 16);
}

#[test]
fn test_inverted_bounds_rejected_before_any_generation() {
    let mut config = OptimizerConfig::default();
    config.bounds.zeta = GeneBounds::new(1.0, 0.01);

    assert!(matches!(
        Nsga2Engine::new(config),
        Err(OptimizerError::InvalidConfig(_))
    ));
}

#[test]
fn test_builder_from_json() {
    let config = OptimizerConfigBuilder::from_json(&json!({
        "population_size": 20,
        "generations": 4,
        "seed": 5,
        "mutation": { "gene_probability": 0.5, "distribution_index": 10.0 }
    }))
    .unwrap()
    .parallel_evaluation(true)
    .build()
    .unwrap();

    assert_eq!(config.population_size, 20);
    assert_eq!(config.mutation.gene_probability, 0.5);
    assert!(config.parallel_evaluation);

    let result = Nsga2Engine::new(config).unwrap().run().unwrap();
    assert_eq!(result.generations, 4);
}
