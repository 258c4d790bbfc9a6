use flyer_tuning::{systems::ParetoFront, ParameterBounds, Population};

/// Assert that every front member is in bounds and carries a finite fitness
#[track_caller]
pub fn assert_front_valid(front: &ParetoFront, bounds: &ParameterBounds) {
    assert!(!front.is_empty(), "Pareto front is empty");
    for solution in front {
        assert!(
            bounds.contains(&solution.parameters),
            "Front member out of bounds: {:?}",
            solution.parameters
        );
        assert!(
            solution.fitness.is_finite(),
            "Front member has non-finite fitness: {:?}",
            solution.fitness
        );
    }
}

/// Assert that no front member dominates another
#[track_caller]
pub fn assert_front_mutually_non_dominated(front: &ParetoFront) {
    for (i, a) in front.iter().enumerate() {
        for (j, b) in front.iter().enumerate() {
            assert!(
                !a.fitness.dominates(&b.fitness),
                "Front member {} dominates member {}: {:?} vs {:?}",
                i,
                j,
                a.fitness,
                b.fitness
            );
        }
    }
}

#[track_caller]
pub fn assert_sorted_by_natural_freq(front: &ParetoFront) {
    let freqs: Vec<f64> = front.iter().map(|s| s.fitness.avg_natural_freq()).collect();
    assert!(
        freqs.windows(2).all(|w| w[0] <= w[1]),
        "Front not sorted by natural frequency: {:?}",
        freqs
    );
}

#[track_caller]
pub fn assert_population_within_bounds(population: &Population, bounds: &ParameterBounds) {
    for individual in population {
        assert!(
            bounds.contains(individual.parameters()),
            "Individual out of bounds: {:?}",
            individual.parameters()
        );
    }
}
