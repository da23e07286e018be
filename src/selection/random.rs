use super::{spin_couples, SelectionStrategy};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Pairs parents uniformly at random, ignoring fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RandomSelection;

impl SelectionStrategy for RandomSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        let weights = vec![1.0; population.len()];
        spin_couples(population, &weights, minimum_number_of_couples, rng)
    }
}
