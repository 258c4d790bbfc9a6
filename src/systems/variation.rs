use rand::Rng;

use crate::components::{GeneBounds, Individual, ParameterBounds, ParameterVector, Population};
use crate::resources::{CrossoverConfig, MutationConfig};
use crate::systems::selection::select_mating_pairs;
use crate::utils::GENE_COUNT;

// Parent genes closer than this are not recombined
const SBX_MIN_GAP: f64 = 1e-14;

/// Spread factor of bounded SBX for one side of the parent interval.
fn sbx_beta_q(beta: f64, eta: f64, u: f64) -> f64 {
    let alpha = 2.0 - beta.powf(-(eta + 1.0));
    if u <= 1.0 / alpha {
        (u * alpha).powf(1.0 / (eta + 1.0))
    } else {
        (1.0 / (2.0 - u * alpha)).powf(1.0 / (eta + 1.0))
    }
}

fn sbx_gene<R: Rng + ?Sized>(
    x1: f64,
    x2: f64,
    bounds: &GeneBounds,
    eta: f64,
    rng: &mut R,
) -> (f64, f64) {
    let (y1, y2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let gap = y2 - y1;
    let u: f64 = rng.gen();

    let beta_low = 1.0 + 2.0 * (y1 - bounds.lower) / gap;
    let c1 = 0.5 * ((y1 + y2) - sbx_beta_q(beta_low, eta, u) * gap);

    let beta_high = 1.0 + 2.0 * (bounds.upper - y2) / gap;
    let c2 = 0.5 * ((y1 + y2) + sbx_beta_q(beta_high, eta, u) * gap);

    let (c1, c2) = (bounds.clamp(c1), bounds.clamp(c2));
    if rng.gen_bool(0.5) {
        (c2, c1)
    } else {
        (c1, c2)
    }
}

/// Simulated binary crossover, producing two children from two parents.
///
/// With probability `config.probability` the pair is recombined; each gene is
/// then exchanged with probability `config.gene_probability`. Children are
/// clamped into `bounds`.
pub fn sbx_crossover<R: Rng + ?Sized>(
    parent1: &ParameterVector,
    parent2: &ParameterVector,
    bounds: &ParameterBounds,
    config: &CrossoverConfig,
    rng: &mut R,
) -> (ParameterVector, ParameterVector) {
    let mut child1 = parent1.to_array();
    let mut child2 = parent2.to_array();

    if rng.gen::<f64>() < config.probability {
        let gene_bounds = bounds.as_array();
        for i in 0..GENE_COUNT {
            if rng.gen::<f64>() >= config.gene_probability {
                continue;
            }
            if (child1[i] - child2[i]).abs() <= SBX_MIN_GAP {
                continue;
            }
            let (a, b) = sbx_gene(
                child1[i],
                child2[i],
                &gene_bounds[i],
                config.distribution_index,
                rng,
            );
            child1[i] = a;
            child2[i] = b;
        }
    }

    (
        bounds.clamp(&ParameterVector::from_array(child1)),
        bounds.clamp(&ParameterVector::from_array(child2)),
    )
}

/// Polynomial mutation, perturbing each gene with probability `config.gene_probability`.
pub fn polynomial_mutation<R: Rng + ?Sized>(
    params: &ParameterVector,
    bounds: &ParameterBounds,
    config: &MutationConfig,
    rng: &mut R,
) -> ParameterVector {
    let gene_bounds = bounds.as_array();
    let mut genes = params.to_array();
    let eta = config.distribution_index;

    for (gene, bounds) in genes.iter_mut().zip(gene_bounds.iter()) {
        if rng.gen::<f64>() >= config.gene_probability {
            continue;
        }
        let span = bounds.span();
        if span <= 0.0 {
            continue;
        }

        let y = *gene;
        let delta1 = (y - bounds.lower) / span;
        let delta2 = (bounds.upper - y) / span;
        let u: f64 = rng.gen();
        let delta_q = if u < 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta + 1.0);
            val.powf(1.0 / (eta + 1.0)) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta + 1.0);
            1.0 - val.powf(1.0 / (eta + 1.0))
        };

        *gene = bounds.clamp(y + delta_q * span);
    }

    ParameterVector::from_array(genes)
}

/// Breeds `count` unevaluated offspring from ranked parents.
///
/// Parents are picked by binary tournament from `mating_rng`; crossover and
/// mutation draw from `variation_rng`.
pub fn make_offspring<R1: Rng + ?Sized, R2: Rng + ?Sized>(
    parents: &Population,
    count: usize,
    bounds: &ParameterBounds,
    crossover: &CrossoverConfig,
    mutation: &MutationConfig,
    mating_rng: &mut R1,
    variation_rng: &mut R2,
) -> Population {
    let pairs = select_mating_pairs(parents, count.div_ceil(2), mating_rng);
    let mut offspring = Population::default();

    for (first, second) in pairs {
        let (child1, child2) = sbx_crossover(
            parents[first].parameters(),
            parents[second].parameters(),
            bounds,
            crossover,
            variation_rng,
        );
        for child in [child1, child2] {
            if offspring.len() < count {
                let mutated = polynomial_mutation(&child, bounds, mutation, variation_rng);
                offspring.push(Individual::new(mutated));
            }
        }
    }

    offspring
}
