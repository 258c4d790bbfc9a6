use rand::Rng;
use std::ops::{Index, IndexMut};

use crate::components::{Individual, ParameterBounds};

/// Ordered collection of individuals making up one generation's search state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Samples `size` unevaluated individuals uniformly within `bounds`.
    pub fn random<R: Rng + ?Sized>(size: usize, bounds: &ParameterBounds, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(bounds.sample(rng)))
            .collect();
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
        self.individuals.iter_mut()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Appends another population, as when parents and offspring are merged.
    pub fn extend(&mut self, other: Population) {
        self.individuals.extend(other.individuals);
    }

    pub fn unevaluated_count(&self) -> usize {
        self.individuals.iter().filter(|i| !i.is_evaluated()).count()
    }

    pub fn is_fully_evaluated(&self) -> bool {
        self.individuals.iter().all(Individual::is_evaluated)
    }

    pub fn clear_annotations(&mut self) {
        self.individuals
            .iter_mut()
            .for_each(Individual::clear_annotations);
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
