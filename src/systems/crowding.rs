use crate::components::{FitnessVector, Population};
use crate::utils::OBJECTIVE_COUNT;

/// Crowding distance of each member of one front, in the order given.
///
/// Boundary members of every objective get `f64::INFINITY`; interior members
/// sum the normalised gap between their neighbours across objectives.
/// Objectives with a zero or non-finite range contribute nothing.
pub fn crowding_distances(front: &[&FitnessVector]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0; n];
    let mut order: Vec<usize> = (0..n).collect();

    for objective in 0..OBJECTIVE_COUNT {
        order.sort_by(|&a, &b| {
            front[a]
                .objective(objective)
                .total_cmp(&front[b].objective(objective))
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let min = front[order[0]].objective(objective);
        let max = front[order[n - 1]].objective(objective);
        let range = max - min;
        if !(range.is_finite() && range > 0.0) {
            continue;
        }

        for w in order.windows(3) {
            let (below, mid, above) = (w[0], w[1], w[2]);
            distances[mid] +=
                (front[above].objective(objective) - front[below].objective(objective)) / range;
        }
    }

    distances
}

/// Writes crowding distances onto the members of `front`.
///
/// Members must already carry a fitness; unevaluated ones are skipped.
pub fn assign_crowding_distances(population: &mut Population, front: &[usize]) {
    let members: Vec<usize> = front
        .iter()
        .copied()
        .filter(|&i| population[i].is_evaluated())
        .collect();
    let fitness: Vec<&FitnessVector> = members
        .iter()
        .filter_map(|&i| population[i].fitness())
        .collect();

    let distances = crowding_distances(&fitness);
    for (i, distance) in members.into_iter().zip(distances) {
        population[i].crowding_distance = distance;
    }
}
