use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::population::{fitness_scores, ranked_indices};
use crate::rng::RandomNumberGenerator;

/// Trait for survivor selection strategies.
///
/// A replacement strategy decides which members of the current population make
/// room for offspring. The default [`ReplacementStrategy::replace`] removes the
/// eliminated members and fills their places with the fittest offspring, so the
/// population keeps its size.
pub trait ReplacementStrategy: Debug {
    /// Picks the population indices to eliminate.
    ///
    /// Unless a strategy states otherwise, exactly
    /// `min(offspring.len(), population.len())` distinct indices are returned.
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;

    /// Merges `offspring` into `population`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ReplacementStrategy::select_for_elimination`] and
    /// returns `GeneticError::Evolution` if it hands back an index outside the
    /// population.
    fn replace<C: Chromosome>(
        &self,
        population: Vec<C>,
        offspring: Vec<C>,
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        let eliminated = self.select_for_elimination(&population, &offspring, epoch, rng)?;

        let mut doomed = vec![false; population.len()];
        for &idx in &eliminated {
            let slot = doomed.get_mut(idx).ok_or_else(|| {
                GeneticError::Evolution(format!(
                    "Elimination index {} is outside a population of {}",
                    idx,
                    population.len()
                ))
            })?;
            *slot = true;
        }
        let vacancies = doomed.iter().filter(|&&d| d).count();

        let mut next: Vec<C> = population
            .into_iter()
            .zip(doomed)
            .filter_map(|(chromosome, doomed)| (!doomed).then_some(chromosome))
            .collect();

        let ranked = ranked_indices(&fitness_scores(&offspring)?);
        let mut offspring: Vec<Option<C>> = offspring.into_iter().map(Some).collect();
        next.extend(
            ranked
                .into_iter()
                .take(vacancies)
                .filter_map(|idx| offspring[idx].take()),
        );

        Ok(next)
    }
}
