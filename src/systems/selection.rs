use rand::Rng;

use crate::components::{Individual, Population};
use crate::systems::crowding::assign_crowding_distances;

/// Elitist survival: fills `size` slots front by front.
///
/// Crowding distances are computed for every front that is looked at. The
/// front that overflows the remaining capacity contributes its most isolated
/// members; ties keep their order within the front.
pub fn environmental_selection(
    mut population: Population,
    fronts: &[Vec<usize>],
    size: usize,
) -> Population {
    let mut selected: Vec<usize> = Vec::with_capacity(size);

    for front in fronts {
        if selected.len() >= size {
            break;
        }
        assign_crowding_distances(&mut population, front);

        let remaining = size - selected.len();
        if front.len() <= remaining {
            selected.extend_from_slice(front);
        } else {
            let mut by_crowding = front.clone();
            by_crowding.sort_by(|&a, &b| {
                population[b]
                    .crowding_distance
                    .total_cmp(&population[a].crowding_distance)
            });
            selected.extend_from_slice(&by_crowding[..remaining]);
        }
    }

    let mut slots: Vec<Option<Individual>> = population.into_iter().map(Some).collect();
    selected
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Binary tournament under the crowded comparison, returns the winner's index.
///
/// The first drawn candidate wins ties.
pub fn binary_tournament<R: Rng + ?Sized>(population: &Population, rng: &mut R) -> usize {
    let n = population.len();
    let a = rng.gen_range(0..n);
    let b = rng.gen_range(0..n);
    if population[b].is_better_than(&population[a]) {
        b
    } else {
        a
    }
}

/// Draws `count` parent pairs, each parent chosen by its own tournament.
pub fn select_mating_pairs<R: Rng + ?Sized>(
    population: &Population,
    count: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            let first = binary_tournament(population, rng);
            let second = binary_tournament(population, rng);
            (first, second)
        })
        .collect()
}
