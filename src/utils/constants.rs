pub const GENE_COUNT: usize = 4; // k, c, zeta, omega_n
pub const OBJECTIVE_COUNT: usize = 2; // mean natural frequency, negated mean damping

// Optimizer defaults
pub const DEFAULT_POPULATION_SIZE: usize = 40;
pub const DEFAULT_GENERATIONS: usize = 25;
pub const DEFAULT_SEED: u64 = 1;

// Gene bounds (lower, upper)
pub const K_BOUNDS: (f64, f64) = (0.5, 5.0); // static gain
pub const C_BOUNDS: (f64, f64) = (0.1, 2.0); // zero location
pub const ZETA_BOUNDS: (f64, f64) = (0.01, 1.0); // damping ratio
pub const OMEGA_N_BOUNDS: (f64, f64) = (0.1, 5.0); // natural frequency, rad/s

// Variation defaults
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 1.0;
pub const DEFAULT_CROSSOVER_GENE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_CROSSOVER_ETA: f64 = 15.0;
pub const DEFAULT_MUTATION_GENE_PROBABILITY: f64 = 1.0 / GENE_COUNT as f64;
pub const DEFAULT_MUTATION_ETA: f64 = 20.0;

// Numerics
pub const ZERO_POLE_TOLERANCE: f64 = 1e-12; // |p| below this has no defined damping
pub const ROOT_RESIDUAL_TOLERANCE: f64 = 1e-6;
pub const SCHUR_EPSILON: f64 = 1e-14;
pub const SCHUR_MAX_ITERATIONS: usize = 500;

// Mode classification thresholds, rad/s
pub const PHUGOID_MAX_FREQ: f64 = 0.5;
pub const SHORT_PERIOD_MIN_FREQ: f64 = 1.5;

// Step response
pub const STEP_RESPONSE_SAMPLES: usize = 100;
pub const STEP_RESPONSE_SETTLING_FACTOR: f64 = 7.0;
pub const MAX_RK4_STEP_FRACTION: f64 = 0.1; // max h * |p_fastest|
