use crate::components::{FitnessVector, Population};
use crate::utils::OptimizerError;

/// Fast non-dominated sort.
///
/// Returns the fronts as index lists, `fronts[0]` holding every index no other
/// entry dominates. Every index appears in exactly one front.
pub fn non_dominated_sort(fitness: &[FitnessVector]) -> Vec<Vec<usize>> {
    let n = fitness.len();
    if n == 0 {
        return Vec::new();
    }

    // domination_count[i] = how many entries dominate i
    let mut domination_count = vec![0usize; n];
    // dominated_set[i] = entries i dominates
    let mut dominated_set: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            if fitness[i].dominates(&fitness[j]) {
                dominated_set[i].push(j);
                domination_count[j] += 1;
            } else if fitness[j].dominates(&fitness[i]) {
                dominated_set[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated_set[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(current);
        current = next;
    }

    fronts
}

/// Ranks a fully evaluated population in place and returns its fronts.
pub fn assign_ranks(population: &mut Population) -> Result<Vec<Vec<usize>>, OptimizerError> {
    let fitness = population
        .iter()
        .map(|individual| individual.fitness().copied())
        .collect::<Option<Vec<FitnessVector>>>()
        .ok_or_else(|| {
            OptimizerError::InvalidTransition(format!(
                "cannot rank a population with {} unevaluated individuals",
                population.unevaluated_count()
            ))
        })?;

    let fronts = non_dominated_sort(&fitness);
    for (rank, front) in fronts.iter().enumerate() {
        for &i in front {
            population[i].rank = Some(rank);
        }
    }
    Ok(fronts)
}
