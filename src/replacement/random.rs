use super::{elimination_count, ReplacementStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Eliminates individuals uniformly at random.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomReplacement;

impl ReplacementStrategy for RandomReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        Ok(rng.sample_indices(population.len(), elimination_count(population, offspring)))
    }
}
