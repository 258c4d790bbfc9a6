mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_front_mutually_non_dominated, assert_front_valid, assert_population_within_bounds,
    assert_sorted_by_natural_freq,
};

pub use fixtures::*;
