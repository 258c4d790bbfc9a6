use flyer_tuning::{
    systems::{top_solutions, EngineState},
    Nsga2Engine,
};

use crate::common::{
    assert_front_mutually_non_dominated, assert_front_valid, assert_population_within_bounds,
    assert_sorted_by_natural_freq, create_default_config, create_degenerate_bounds,
    create_small_config, run_optimizer,
};

#[test]
fn test_reference_run_produces_valid_front() {
    let config = create_default_config();
    let result = run_optimizer(config.clone());

    assert_front_valid(&result.front, &config.bounds);
    assert_front_mutually_non_dominated(&result.front);
    assert_sorted_by_natural_freq(&result.front);
    assert_population_within_bounds(&result.population, &config.bounds);

    assert_eq!(result.population.len(), 40);
    assert_eq!(result.generations, 25);
}

#[test]
fn test_front_is_non_dominated_within_final_population() {
    let result = run_optimizer(create_default_config());

    for solution in &result.front {
        for individual in &result.population {
            let fitness = individual.fitness().expect("final population is evaluated");
            assert!(
                !fitness.dominates(&solution.fitness),
                "{:?} is dominated by {:?}",
                solution,
                individual
            );
        }
    }
}

#[test]
fn test_population_size_constant_across_generations() {
    let config = create_small_config(3);
    let mut engine = Nsga2Engine::new(config.clone()).unwrap();

    while !engine.is_terminated() {
        if engine.step().unwrap() == EngineState::Selected {
            assert_eq!(engine.population().len(), config.population_size);
        }
    }
}

#[test]
fn test_front_improves_on_initial_population() {
    let result = run_optimizer(create_default_config());
    let first = result.history.first().unwrap();
    let last = result.history.last().unwrap();

    // Elitism never loses the best value of either objective
    assert!(last.best_natural_freq.unwrap() <= first.best_natural_freq.unwrap());
    assert!(last.best_damping_ratio.unwrap() >= first.best_damping_ratio.unwrap());
}

#[test]
fn test_degenerate_region_does_not_abort() {
    let mut config = create_small_config(11);
    config.bounds = create_degenerate_bounds();

    let result = run_optimizer(config);

    assert_eq!(result.generations, 6);
    assert_eq!(result.evaluations, 12 * 6);
    assert!(result.penalized > 0, "no evaluation was penalized");
    assert_eq!(result.penalized, result.evaluations);
    assert!(result
        .population
        .iter()
        .all(|individual| individual.fitness().is_some_and(|f| f.is_penalty())));
    assert!(result.front.iter().all(|s| !s.fitness.is_penalty()));
    assert!(result.front.is_empty());
}

#[test]
fn test_reports_for_best_solutions() {
    let result = run_optimizer(create_default_config());
    let reports = top_solutions(&result.front, 5).unwrap();

    assert_eq!(reports.len(), result.front.len().min(5));
    for (i, report) in reports.iter().enumerate() {
        assert!(report.label.starts_with(&format!("Sol_{}_k", i + 1)));
        assert_eq!(report.poles.len(), 2);
    }
}
