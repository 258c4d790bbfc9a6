use nalgebra::Complex;

use crate::components::dynamics::poles::{polynomial_roots, PoleAnalysis};
use crate::components::ParameterVector;
use crate::utils::{trim_leading_zeros, DynamicsError};

/// Rational transfer function `N(s) / D(s)` with real coefficients stored
/// highest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

impl TransferFunction {
    /// Creates a transfer function, trimming leading zero coefficients.
    ///
    /// # Errors
    /// `InvalidTransferFunction` if a coefficient is not finite or the
    /// denominator is identically zero.
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Result<Self, DynamicsError> {
        if numerator
            .iter()
            .chain(denominator.iter())
            .any(|c| !c.is_finite())
        {
            return Err(DynamicsError::InvalidTransferFunction(format!(
                "non-finite coefficients in {:?} / {:?}",
                numerator, denominator
            )));
        }

        let denominator = trim_leading_zeros(&denominator).to_vec();
        if denominator.is_empty() {
            return Err(DynamicsError::InvalidTransferFunction(
                "denominator is identically zero".to_string(),
            ));
        }

        let mut numerator = trim_leading_zeros(&numerator).to_vec();
        if numerator.is_empty() {
            numerator.push(0.0);
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Short-period style model `(k*s + k*c) / (s^2 + 2*zeta*omega_n*s + omega_n^2)`.
    pub fn longitudinal(params: &ParameterVector) -> Result<Self, DynamicsError> {
        let ParameterVector { k, c, zeta, omega_n } = *params;
        Self::new(
            vec![k, k * c],
            vec![1.0, 2.0 * zeta * omega_n, omega_n * omega_n],
        )
    }

    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Degree of the characteristic polynomial.
    pub fn order(&self) -> usize {
        self.denominator.len() - 1
    }

    pub fn is_proper(&self) -> bool {
        self.numerator.len() <= self.denominator.len()
    }

    pub fn poles(&self) -> Result<Vec<Complex<f64>>, DynamicsError> {
        polynomial_roots(&self.denominator)
    }

    pub fn zeros(&self) -> Result<Vec<Complex<f64>>, DynamicsError> {
        polynomial_roots(&self.numerator)
    }

    /// High-frequency gain of the zero/pole/gain form.
    pub fn gain(&self) -> f64 {
        self.numerator[0] / self.denominator[0]
    }

    /// Steady-state gain `N(0) / D(0)`, `None` with a pole at the origin.
    pub fn dc_gain(&self) -> Option<f64> {
        let den = *self.denominator.last()?;
        let num = *self.numerator.last()?;
        if den == 0.0 {
            None
        } else {
            Some(num / den)
        }
    }

    /// Damping ratio and natural frequency of every pole, in root order.
    pub fn analyze_poles(&self) -> Result<Vec<PoleAnalysis>, DynamicsError> {
        Ok(self
            .poles()?
            .into_iter()
            .map(PoleAnalysis::from_pole)
            .collect())
    }
}

/// Pole analysis of the longitudinal model built from `params`.
pub fn analyze(params: &ParameterVector) -> Result<Vec<PoleAnalysis>, DynamicsError> {
    TransferFunction::longitudinal(params)?.analyze_poles()
}
