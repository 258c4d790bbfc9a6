use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stream used to sample the initial population
pub const INITIALIZATION_STREAM: &str = "initialization";
/// Stream used by binary tournaments
pub const MATING_STREAM: &str = "mating";
/// Stream used by crossover and mutation
pub const VARIATION_STREAM: &str = "variation";

/// Deterministic source of independent RNG streams derived from one master seed.
///
/// Each stage of the optimizer draws from its own named stream, so changing how
/// many numbers one stage consumes never shifts the sequence another stage sees.
///
/// Stream seeds come from `DefaultHasher`, whose output is only stable for a
/// given Rust toolchain. Runs reproduce bit for bit on the same toolchain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Hash the stream name together with the master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}
