use super::ReplacementStrategy;
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Replaces the whole population with the offspring.
///
/// The next population is the offspring exactly, whatever their count. No
/// offspring means an empty population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationalReplacement;

impl ReplacementStrategy for GenerationalReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        _offspring: &[C],
        _epoch: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        Ok((0..population.len()).collect())
    }

    fn replace<C: Chromosome>(
        &self,
        _population: Vec<C>,
        offspring: Vec<C>,
        _epoch: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        Ok(offspring)
    }
}
