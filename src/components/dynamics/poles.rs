use nalgebra::{linalg::Schur, Complex, DMatrix};

use crate::utils::{
    trim_leading_zeros, DynamicsError, ROOT_RESIDUAL_TOLERANCE, SCHUR_EPSILON,
    SCHUR_MAX_ITERATIONS, ZERO_POLE_TOLERANCE,
};

/// Modal characteristics of a single pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleAnalysis {
    pub pole: Complex<f64>,
    /// `-Re(p) / |p|`, NaN when `|p|` is zero.
    pub damping_ratio: f64,
    /// `|p|` in rad/s.
    pub natural_freq: f64,
}

impl PoleAnalysis {
    pub fn from_pole(pole: Complex<f64>) -> Self {
        let natural_freq = pole.norm();
        let damping_ratio = if natural_freq <= ZERO_POLE_TOLERANCE {
            f64::NAN
        } else {
            -pole.re / natural_freq
        };
        Self {
            pole,
            damping_ratio,
            natural_freq,
        }
    }

    /// False for a pole at the origin (or a non-finite pole), where damping is undefined.
    pub fn is_defined(&self) -> bool {
        self.damping_ratio.is_finite() && self.natural_freq.is_finite()
    }
}

/// Roots of a real polynomial whose coefficients are given highest power first.
///
/// Degrees up to two are solved in closed form. Higher degrees go through the
/// eigenvalues of the companion matrix, and every root is checked against the
/// polynomial before being returned.
pub fn polynomial_roots(coefficients: &[f64]) -> Result<Vec<Complex<f64>>, DynamicsError> {
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(DynamicsError::InvalidTransferFunction(format!(
            "non-finite polynomial coefficients {:?}",
            coefficients
        )));
    }
    let coefficients = trim_leading_zeros(coefficients);

    match coefficients.len() {
        0 | 1 => Ok(Vec::new()),
        2 => Ok(vec![Complex::new(-coefficients[1] / coefficients[0], 0.0)]),
        3 => Ok(quadratic_roots(coefficients[0], coefficients[1], coefficients[2]).to_vec()),
        _ => companion_roots(coefficients),
    }
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> [Complex<f64>; 2] {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        let re = -b / (2.0 * a);
        let im = (-discriminant).sqrt() / (2.0 * a);
        return [Complex::new(re, im), Complex::new(re, -im)];
    }

    // Avoid cancellation between -b and the square root
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    if q == 0.0 {
        return [Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
    }
    let r1 = q / a;
    let r2 = c / q;
    let (hi, lo) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
    [Complex::new(hi, 0.0), Complex::new(lo, 0.0)]
}

fn companion_roots(coefficients: &[f64]) -> Result<Vec<Complex<f64>>, DynamicsError> {
    let degree = coefficients.len() - 1;
    let leading = coefficients[0];

    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for (j, c) in coefficients[1..].iter().enumerate() {
        companion[(0, j)] = -c / leading;
    }
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }

    let schur = Schur::try_new(companion, SCHUR_EPSILON, SCHUR_MAX_ITERATIONS).ok_or_else(|| {
        DynamicsError::NonConvergence(format!(
            "Schur decomposition of degree {} companion matrix did not converge",
            degree
        ))
    })?;
    let roots: Vec<Complex<f64>> = schur.complex_eigenvalues().iter().copied().collect();

    for root in &roots {
        let residual = relative_residual(coefficients, *root);
        if !(residual <= ROOT_RESIDUAL_TOLERANCE) {
            return Err(DynamicsError::NonConvergence(format!(
                "root {} has relative residual {:e}",
                root, residual
            )));
        }
    }
    Ok(roots)
}

/// `|p(z)|` scaled by the magnitude of the terms that were summed.
fn relative_residual(coefficients: &[f64], z: Complex<f64>) -> f64 {
    let mut value = Complex::new(0.0, 0.0);
    let mut scale = 0.0;
    let magnitude = z.norm();
    for c in coefficients {
        value = value * z + Complex::new(*c, 0.0);
        scale = scale * magnitude + c.abs();
    }
    if scale == 0.0 {
        0.0
    } else {
        value.norm() / scale
    }
}
