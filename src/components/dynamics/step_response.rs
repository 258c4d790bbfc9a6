use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::components::dynamics::TransferFunction;
use crate::utils::{
    DynamicsError, MAX_RK4_STEP_FRACTION, STEP_RESPONSE_SAMPLES, STEP_RESPONSE_SETTLING_FACTOR,
};

/// Sampled unit-step response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResponse {
    pub time: Vec<f64>,
    pub output: Vec<f64>,
}

impl StepResponse {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn final_value(&self) -> Option<f64> {
        self.output.last().copied()
    }

    /// Largest output sample and the time it occurs.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.time
            .iter()
            .zip(self.output.iter())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(t, y)| (*t, *y))
    }
}

/// Controllable canonical realisation `x' = A x + B u`, `y = C x + D u`.
struct StateSpace {
    a: DMatrix<f64>,
    b: DVector<f64>,
    c: DVector<f64>,
    d: f64,
}

impl StateSpace {
    fn from_transfer_function(tf: &TransferFunction) -> Result<Self, DynamicsError> {
        if !tf.is_proper() {
            return Err(DynamicsError::InvalidTransferFunction(format!(
                "improper transfer function of numerator degree {} over order {}",
                tf.numerator().len() - 1,
                tf.order()
            )));
        }

        let n = tf.order();
        let lead = tf.denominator()[0];
        let den: Vec<f64> = tf.denominator().iter().map(|v| v / lead).collect();
        let mut num = vec![0.0; n + 1 - tf.numerator().len()];
        num.extend(tf.numerator().iter().map(|v| v / lead));

        let d = num[0];
        let mut a = DMatrix::zeros(n, n);
        let mut b = DVector::zeros(n);
        let mut c = DVector::zeros(n);
        for j in 0..n {
            a[(0, j)] = -den[j + 1];
            c[j] = num[j + 1] - d * den[j + 1];
        }
        for i in 1..n {
            a[(i, i - 1)] = 1.0;
        }
        if n > 0 {
            b[0] = 1.0;
        }

        Ok(Self { a, b, c, d })
    }

    fn derivative(&self, x: &DVector<f64>, u: f64) -> DVector<f64> {
        &self.a * x + &self.b * u
    }

    fn rk4_step(&self, x: &DVector<f64>, u: f64, h: f64) -> DVector<f64> {
        let k1 = self.derivative(x, u);
        let k2 = self.derivative(&(x + &k1 * (h / 2.0)), u);
        let k3 = self.derivative(&(x + &k2 * (h / 2.0)), u);
        let k4 = self.derivative(&(x + &k3 * h), u);
        x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
    }

    fn output(&self, x: &DVector<f64>, u: f64) -> f64 {
        self.c.dot(x) + self.d * u
    }
}

impl TransferFunction {
    /// Unit-step response over `[0, duration]` sampled at `samples` evenly spaced points.
    ///
    /// Each sample interval is integrated with RK4, split into substeps so that
    /// `h * |p|` stays small for the fastest pole.
    pub fn step_response(
        &self,
        duration: f64,
        samples: usize,
    ) -> Result<StepResponse, DynamicsError> {
        if !(duration.is_finite() && duration > 0.0) || samples < 2 {
            return Err(DynamicsError::InvalidTransferFunction(format!(
                "step response needs a positive duration and at least 2 samples, got {} over {}",
                samples, duration
            )));
        }

        let system = StateSpace::from_transfer_function(self)?;
        let fastest = self
            .poles()?
            .iter()
            .map(|p| p.norm())
            .fold(0.0_f64, f64::max);

        let dt = duration / (samples - 1) as f64;
        let substeps = if fastest > 0.0 {
            (dt * fastest / MAX_RK4_STEP_FRACTION).ceil().max(1.0) as usize
        } else {
            1
        };
        let h = dt / substeps as f64;

        let mut time = Vec::with_capacity(samples);
        let mut output = Vec::with_capacity(samples);
        let mut x = DVector::zeros(self.order());
        for i in 0..samples {
            if i > 0 {
                for _ in 0..substeps {
                    x = system.rk4_step(&x, 1.0, h);
                }
            }
            time.push(i as f64 * dt);
            output.push(system.output(&x, 1.0));
        }

        Ok(StepResponse { time, output })
    }

    /// Step response over seven times the slowest pole's time constant.
    pub fn step_response_default(&self) -> Result<StepResponse, DynamicsError> {
        let duration = self.default_response_duration()?;
        self.step_response(duration, STEP_RESPONSE_SAMPLES)
    }

    fn default_response_duration(&self) -> Result<f64, DynamicsError> {
        let slowest = self
            .poles()?
            .iter()
            .map(|p| p.re.abs())
            .fold(f64::INFINITY, f64::min);
        let rate = if slowest.is_finite() && slowest > 0.0 {
            slowest
        } else {
            1.0
        };
        Ok(STEP_RESPONSE_SETTLING_FACTOR / rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ParameterVector;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_order_lag() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        let response = tf.step_response(5.0, 51).unwrap();

        assert_eq!(response.len(), 51);
        assert_eq!(response.output[0], 0.0);
        assert_relative_eq!(response.time[10], 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            response.output[10],
            1.0 - (-1.0_f64).exp(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_longitudinal_settles_to_dc_gain() {
        let tf =
            TransferFunction::longitudinal(&ParameterVector::new(2.0, 0.5, 0.7, 1.0)).unwrap();
        let response = tf.step_response_default().unwrap();

        assert_eq!(response.len(), STEP_RESPONSE_SAMPLES);
        assert_relative_eq!(*response.time.last().unwrap(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(response.final_value().unwrap(), 1.0, epsilon = 1e-2);
        assert!(response.output.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_lightly_damped_overshoots() {
        let tf =
            TransferFunction::longitudinal(&ParameterVector::new(1.0, 1.0, 0.1, 1.0)).unwrap();
        let response = tf.step_response(30.0, 301).unwrap();
        let (_, peak) = response.peak().unwrap();
        assert!(peak > tf.dc_gain().unwrap(), "peak {} shows no overshoot", peak);
    }

    #[test]
    fn test_slow_boundary_system_is_stable() {
        let tf =
            TransferFunction::longitudinal(&ParameterVector::new(0.5, 0.1, 0.01, 0.1)).unwrap();
        let response = tf.step_response_default().unwrap();
        assert!(response.output.iter().all(|y| y.is_finite() && y.abs() < 1e3));
    }

    #[test]
    fn test_biproper_feedthrough() {
        // (s + 2) / (s + 1) starts at 1 and settles at 2
        let tf = TransferFunction::new(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
        let response = tf.step_response(10.0, 101).unwrap();
        assert_relative_eq!(response.output[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(response.final_value().unwrap(), 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_requests() {
        let tf = TransferFunction::new(vec![1.0, 0.0, 0.0], vec![1.0, 1.0]).unwrap();
        assert!(tf.step_response(1.0, 10).is_err());

        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        assert!(tf.step_response(0.0, 10).is_err());
        assert!(tf.step_response(1.0, 1).is_err());
    }
}
