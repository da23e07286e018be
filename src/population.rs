//! Fitness helpers over a population slice.

use std::cmp::Ordering;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};

/// Reads the fitness of every chromosome, rejecting NaN and infinite scores.
pub fn fitness_scores<C: Chromosome>(population: &[C]) -> Result<Vec<f64>> {
    population
        .iter()
        .map(|chromosome| {
            let score = chromosome.calculate_fitness();
            if !score.is_finite() {
                return Err(GeneticError::InvalidNumericValue(format!(
                    "Non-finite fitness score {} for chromosome {}",
                    score,
                    chromosome.id()
                )));
            }
            Ok(score)
        })
        .collect()
}

/// Returns the indices of `fitness` ordered from the fittest to the least fit.
///
/// The sort is stable, so equal scores keep their population order.
pub fn ranked_indices(fitness: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// Number of members making up `percentage` of `count`, rounded up.
///
/// Products that overshoot an integer by floating-point noise are not rounded up.
pub(crate) fn share_of(count: usize, percentage: f64) -> usize {
    let exact = count as f64 * percentage;
    ((exact - 1e-9).ceil().max(0.0) as usize).min(count)
}

/// Returns the chromosome with the highest fitness.
pub fn fittest<C: Chromosome>(population: &[C]) -> Option<&C> {
    population.iter().max_by(|a, b| {
        a.calculate_fitness()
            .partial_cmp(&b.calculate_fitness())
            .unwrap_or(Ordering::Equal)
    })
}

/// Returns the highest fitness in the population, or `f64::NEG_INFINITY` when empty.
pub fn highest_fitness<C: Chromosome>(population: &[C]) -> f64 {
    population
        .iter()
        .map(Chromosome::calculate_fitness)
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestChromosome;

    #[test]
    fn test_ranked_indices() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        assert_eq!(ranked_indices(&fitness), vec![3, 1, 0, 2, 4]);
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(10, 0.3), 3);
        assert_eq!(share_of(10, 0.25), 3);
        assert_eq!(share_of(10, 0.0), 0);
        assert_eq!(share_of(10, 1.0), 10);
        assert_eq!(share_of(0, 0.5), 0);
    }

    #[test]
    fn test_fittest_and_highest() {
        let population = TestChromosome::population(&[1.0, 7.0, 3.0]);

        assert_eq!(fittest(&population).unwrap().id(), population[1].id());
        assert_eq!(highest_fitness(&population), 7.0);

        let empty: Vec<TestChromosome> = Vec::new();
        assert!(fittest(&empty).is_none());
        assert_eq!(highest_fitness(&empty), f64::NEG_INFINITY);
    }

    #[test]
    fn test_fitness_scores_rejects_nan() {
        let population = TestChromosome::population(&[1.0, f64::NAN]);
        assert!(matches!(
            fitness_scores(&population),
            Err(GeneticError::InvalidNumericValue(_))
        ));
    }
}
