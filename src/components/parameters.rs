use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::{
    clamp_to_range, OptimizerError, C_BOUNDS, GENE_COUNT, K_BOUNDS, OMEGA_N_BOUNDS, ZETA_BOUNDS,
};

/// Longitudinal tuning parameters, the genome of one individual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterVector {
    /// Static gain of the numerator.
    pub k: f64,
    /// Zero location multiplier, the numerator is `k*s + k*c`.
    pub c: f64,
    /// Damping ratio of the characteristic polynomial.
    pub zeta: f64,
    /// Natural frequency of the characteristic polynomial (rad/s).
    pub omega_n: f64,
}

impl ParameterVector {
    pub fn new(k: f64, c: f64, zeta: f64, omega_n: f64) -> Self {
        Self { k, c, zeta, omega_n }
    }

    pub fn to_array(&self) -> [f64; GENE_COUNT] {
        [self.k, self.c, self.zeta, self.omega_n]
    }

    pub fn from_array(genes: [f64; GENE_COUNT]) -> Self {
        Self {
            k: genes[0],
            c: genes[1],
            zeta: genes[2],
            omega_n: genes[3],
        }
    }
}

/// Closed interval a single gene may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneBounds {
    pub lower: f64,
    pub upper: f64,
}

impl GeneBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp_to_range(value, (self.lower, self.upper))
    }

    fn validate(&self, name: &str) -> Result<(), OptimizerError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(OptimizerError::InvalidConfig(format!(
                "bounds for {} must be finite, got [{}, {}]",
                name, self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(OptimizerError::InvalidConfig(format!(
                "lower bound {} exceeds upper bound {} for {}",
                self.lower, self.upper, name
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeneBounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self { lower, upper }
    }
}

/// Per-gene search limits for a [`ParameterVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterBounds {
    pub k: GeneBounds,
    pub c: GeneBounds,
    pub zeta: GeneBounds,
    pub omega_n: GeneBounds,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            k: K_BOUNDS.into(),
            c: C_BOUNDS.into(),
            zeta: ZETA_BOUNDS.into(),
            omega_n: OMEGA_N_BOUNDS.into(),
        }
    }
}

const GENE_NAMES: [&str; GENE_COUNT] = ["k", "c", "zeta", "omega_n"];

impl ParameterBounds {
    /// Bounds in gene order `(k, c, zeta, omega_n)`.
    pub fn as_array(&self) -> [GeneBounds; GENE_COUNT] {
        [self.k, self.c, self.zeta, self.omega_n]
    }

    /// Rejects non-finite limits and any gene whose lower bound exceeds its upper bound.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        self.as_array()
            .iter()
            .zip(GENE_NAMES)
            .try_for_each(|(bounds, name)| bounds.validate(name))
    }

    pub fn contains(&self, params: &ParameterVector) -> bool {
        self.as_array()
            .iter()
            .zip(params.to_array())
            .all(|(bounds, value)| bounds.contains(value))
    }

    /// Fails with [`OptimizerError::InvalidParameter`] naming the first gene out of range.
    pub fn check(&self, params: &ParameterVector) -> Result<(), OptimizerError> {
        for ((bounds, value), name) in self.as_array().iter().zip(params.to_array()).zip(GENE_NAMES)
        {
            if !bounds.contains(value) {
                return Err(OptimizerError::InvalidParameter(format!(
                    "{} = {} outside [{}, {}]",
                    name, value, bounds.lower, bounds.upper
                )));
            }
        }
        Ok(())
    }

    pub fn clamp(&self, params: &ParameterVector) -> ParameterVector {
        let bounds = self.as_array();
        let mut genes = params.to_array();
        for (gene, bounds) in genes.iter_mut().zip(bounds.iter()) {
            *gene = bounds.clamp(*gene);
        }
        ParameterVector::from_array(genes)
    }

    /// Samples every gene independently and uniformly within its bounds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParameterVector {
        let bounds = self.as_array();
        let mut genes = [0.0; GENE_COUNT];
        for (gene, bounds) in genes.iter_mut().zip(bounds.iter()) {
            *gene = bounds.lower + rng.gen::<f64>() * bounds.span();
        }
        // gen::<f64>() is in [0, 1), guard against rounding past the upper edge
        self.clamp(&ParameterVector::from_array(genes))
    }
}
