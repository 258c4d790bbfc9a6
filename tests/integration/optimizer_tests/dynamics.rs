use approx::assert_relative_eq;
use flyer_tuning::{
    components::{analyze, GeneBounds, TransferFunction},
    systems::FitnessEvaluator,
    DynamicsError, ParameterBounds, ParameterVector, RngManager,
};

const GRID_POINTS: usize = 6;

/// Evenly spaced values across a gene's range, both edges included.
fn grid(bounds: &GeneBounds) -> Vec<f64> {
    (0..GRID_POINTS)
        .map(|i| bounds.lower + bounds.span() * i as f64 / (GRID_POINTS - 1) as f64)
        .map(|v| bounds.clamp(v))
        .collect()
}

#[track_caller]
fn assert_well_posed(params: &ParameterVector) {
    let poles = analyze(params).unwrap();
    assert_eq!(poles.len(), 2, "{:?} gave {} poles", params, poles.len());
    for pole in &poles {
        assert!(
            pole.natural_freq >= 0.0,
            "{:?} gave natural frequency {}",
            params,
            pole.natural_freq
        );
        assert!(pole.is_defined(), "{:?} gave undefined pole {:?}", params, pole);
    }

    let fitness = FitnessEvaluator::new().evaluate(params).unwrap();
    assert!(fitness.is_finite(), "{:?} gave {:?}", params, fitness);
}

#[test]
fn test_omega_n_at_lower_bound() {
    let fitness = FitnessEvaluator::new()
        .evaluate(&ParameterVector::new(2.0, 1.0, 0.5, 0.1))
        .unwrap();

    assert!(fitness.is_finite());
    assert_relative_eq!(fitness.avg_natural_freq(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(fitness.avg_damping_ratio(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_critically_damped_double_pole() {
    let poles = analyze(&ParameterVector::new(1.0, 1.0, 1.0, 2.0)).unwrap();

    assert_eq!(poles.len(), 2);
    for pole in &poles {
        assert_relative_eq!(pole.pole.re, -2.0, epsilon = 1e-9);
        assert_relative_eq!(pole.damping_ratio, 1.0, epsilon = 1e-9);
        assert_relative_eq!(pole.natural_freq, 2.0, epsilon = 1e-9);
    }
}

#[test]
fn test_zero_natural_frequency_is_degenerate() {
    let result = FitnessEvaluator::new().evaluate(&ParameterVector::new(1.0, 1.0, 0.5, 0.0));
    assert!(matches!(result, Err(DynamicsError::Degenerate(_))));
}

#[test]
fn test_longitudinal_transfer_function() {
    let tf = TransferFunction::longitudinal(&ParameterVector::new(2.0, 0.5, 0.3, 1.5)).unwrap();

    assert_eq!(tf.numerator(), &[2.0, 1.0]);
    assert_relative_eq!(tf.denominator()[1], 0.9, epsilon = 1e-12);
    assert_relative_eq!(tf.denominator()[2], 2.25, epsilon = 1e-12);
    assert_relative_eq!(tf.gain(), 2.0);

    let zeros = tf.zeros().unwrap();
    assert_eq!(zeros.len(), 1);
    assert_relative_eq!(zeros[0].re, -0.5, epsilon = 1e-12);
}

#[test]
fn test_step_response_of_lightly_damped_system_overshoots() {
    let tf = TransferFunction::longitudinal(&ParameterVector::new(1.0, 0.1, 0.1, 1.0)).unwrap();
    let response = tf.step_response_default().unwrap();

    let final_value = response.final_value().unwrap();
    let (_, peak) = response.peak().unwrap();
    assert!(peak > final_value);
    assert_eq!(response.len(), 100);
}

#[test]
fn test_analysis_well_posed_over_bounds_grid() {
    let bounds = ParameterBounds::default();
    let [ks, cs, zetas, omegas] = bounds.as_array().map(|b| grid(&b));

    for &k in &ks {
        for &c in &cs {
            for &zeta in &zetas {
                for &omega_n in &omegas {
                    assert_well_posed(&ParameterVector::new(k, c, zeta, omega_n));
                }
            }
        }
    }
}

#[test]
fn test_analysis_well_posed_for_random_samples() {
    let bounds = ParameterBounds::default();
    let mut rng = RngManager::new(2024).get_rng("sweep");

    for _ in 0..2000 {
        assert_well_posed(&bounds.sample(&mut rng));
    }
}
