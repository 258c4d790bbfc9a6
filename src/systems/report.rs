use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::{
    FitnessVector, ParameterVector, PoleAnalysis, StepResponse, TransferFunction,
};
use crate::systems::{ParetoFront, ParetoSolution};
use crate::utils::{DynamicsError, PHUGOID_MAX_FREQ, SHORT_PERIOD_MIN_FREQ};

/// Longitudinal mode a pole most likely belongs to, judged by its natural frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudinalMode {
    Phugoid,
    ShortPeriod,
    Indeterminate,
}

impl LongitudinalMode {
    pub fn classify(natural_freq: f64) -> Self {
        if natural_freq < PHUGOID_MAX_FREQ {
            LongitudinalMode::Phugoid
        } else if natural_freq > SHORT_PERIOD_MIN_FREQ {
            LongitudinalMode::ShortPeriod
        } else {
            LongitudinalMode::Indeterminate
        }
    }
}

impl fmt::Display for LongitudinalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongitudinalMode::Phugoid => write!(f, "Phugoid"),
            LongitudinalMode::ShortPeriod => write!(f, "Short Period"),
            LongitudinalMode::Indeterminate => write!(f, "Indeterminate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoleReport {
    pub pole_re: f64,
    pub pole_im: f64,
    pub damping_ratio: f64,
    pub natural_freq: f64,
    pub mode: LongitudinalMode,
}

impl From<&PoleAnalysis> for PoleReport {
    fn from(analysis: &PoleAnalysis) -> Self {
        Self {
            pole_re: analysis.pole.re,
            pole_im: analysis.pole.im,
            damping_ratio: analysis.damping_ratio,
            natural_freq: analysis.natural_freq,
            mode: LongitudinalMode::classify(analysis.natural_freq),
        }
    }
}

impl fmt::Display for PoleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pole: {:.4}{:+.4}j, Damping Ratio: {:.4}, Natural Frequency: {:.4}, Mode: {}",
            self.pole_re, self.pole_im, self.damping_ratio, self.natural_freq, self.mode
        )
    }
}

/// Human-readable breakdown of one Pareto solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub label: String,
    pub parameters: ParameterVector,
    pub fitness: FitnessVector,
    pub gain: f64,
    /// Transfer-function zeros as `[re, im]`.
    pub zeros: Vec<[f64; 2]>,
    pub poles: Vec<PoleReport>,
}

impl SolutionReport {
    /// `index` is the solution's position in the reported ordering, starting at 1.
    pub fn for_solution(index: usize, solution: &ParetoSolution) -> Result<Self, DynamicsError> {
        let params = &solution.parameters;
        let tf = TransferFunction::longitudinal(params)?;
        let poles = tf.analyze_poles()?.iter().map(PoleReport::from).collect();
        let zeros = tf.zeros()?.iter().map(|z| [z.re, z.im]).collect();

        Ok(Self {
            label: solution_label(index, params),
            parameters: *params,
            fitness: solution.fitness,
            gain: tf.gain(),
            zeros,
            poles,
        })
    }

    /// Unit-step response over the default horizon, for plotting.
    pub fn step_response(&self) -> Result<StepResponse, DynamicsError> {
        TransferFunction::longitudinal(&self.parameters)?.step_response_default()
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(
            f,
            "  Parameters: k={:.4}, c={:.4}, zeta={:.4}, omega_n={:.4}",
            self.parameters.k, self.parameters.c, self.parameters.zeta, self.parameters.omega_n
        )?;
        writeln!(
            f,
            "  Mean Natural Frequency: {:.4}, Mean Damping Ratio: {:.4}",
            self.fitness.avg_natural_freq(),
            self.fitness.avg_damping_ratio()
        )?;
        write!(f, "  Gain: {:.4}", self.gain)?;
        for [re, im] in &self.zeros {
            write!(f, "\n  Zero: {:.4}{:+.4}j", re, im)?;
        }
        for pole in &self.poles {
            write!(f, "\n  {}", pole)?;
        }
        Ok(())
    }
}

pub fn solution_label(index: usize, params: &ParameterVector) -> String {
    format!(
        "Sol_{}_k{:.2}_c{:.2}_z{:.2}_wn{:.2}",
        index, params.k, params.c, params.zeta, params.omega_n
    )
}

/// Reports for the first `n` front members in front order.
pub fn top_solutions(front: &ParetoFront, n: usize) -> Result<Vec<SolutionReport>, DynamicsError> {
    front
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, solution)| SolutionReport::for_solution(i + 1, solution))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Individual, Population};
    use crate::systems::{ranking::assign_ranks, FitnessEvaluator};
    use approx::assert_relative_eq;

    fn solution(params: ParameterVector) -> ParetoSolution {
        ParetoSolution {
            parameters: params,
            fitness: FitnessEvaluator::new().evaluate(&params).unwrap(),
        }
    }

    #[test]
    fn test_mode_classification() {
        assert_eq!(LongitudinalMode::classify(0.1), LongitudinalMode::Phugoid);
        assert_eq!(LongitudinalMode::classify(0.5), LongitudinalMode::Indeterminate);
        assert_eq!(LongitudinalMode::classify(1.5), LongitudinalMode::Indeterminate);
        assert_eq!(LongitudinalMode::classify(3.0), LongitudinalMode::ShortPeriod);
    }

    #[test]
    fn test_label_format() {
        let params = ParameterVector::new(1.234, 0.5, 0.333, 2.0);
        assert_eq!(solution_label(3, &params), "Sol_3_k1.23_c0.50_z0.33_wn2.00");
    }

    #[test]
    fn test_solution_report() {
        let report =
            SolutionReport::for_solution(1, &solution(ParameterVector::new(2.0, 0.5, 0.2, 3.0)))
                .unwrap();

        assert_eq!(report.poles.len(), 2);
        assert_eq!(report.zeros, vec![[-0.5, 0.0]]);
        assert_relative_eq!(report.gain, 2.0);
        for pole in &report.poles {
            assert_relative_eq!(pole.natural_freq, 3.0, epsilon = 1e-12);
            assert_relative_eq!(pole.damping_ratio, 0.2, epsilon = 1e-12);
            assert_eq!(pole.mode, LongitudinalMode::ShortPeriod);
        }

        let text = report.to_string();
        assert!(text.starts_with("Sol_1_k2.00_c0.50_z0.20_wn3.00"));
        assert!(text.contains("Mode: Short Period"));
    }

    #[test]
    fn test_step_response_settles_to_dc_gain() {
        let report =
            SolutionReport::for_solution(1, &solution(ParameterVector::new(2.0, 0.5, 0.7, 2.0)))
                .unwrap();
        let response = report.step_response().unwrap();

        // k * c / omega_n^2
        assert_relative_eq!(response.final_value().unwrap(), 0.25, epsilon = 1e-2);
    }

    #[test]
    fn test_top_solutions_limits_count() {
        let mut population: Population = (1..=8)
            .map(|i| {
                let params = ParameterVector::new(1.0, 0.5, 0.1 * i as f64, 0.5 * i as f64);
                let fitness = FitnessEvaluator::new().evaluate(&params).unwrap();
                Individual::with_fitness(params, fitness)
            })
            .collect();
        assign_ranks(&mut population).unwrap();
        let front = ParetoFront::extract(&population);
        assert_eq!(front.len(), 8);

        let reports = top_solutions(&front, 5).unwrap();

        assert_eq!(reports.len(), 5);
        assert!(reports[0].label.starts_with("Sol_1_"));
        assert!(reports[4].label.starts_with("Sol_5_"));
        assert!(top_solutions(&front, 20).unwrap().len() == 8);
    }
}
