use super::{elimination_count, ReplacementStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

/// Eliminates older individuals more often.
///
/// Each individual is weighted by `age + 1`, so a population of equal ages is
/// thinned uniformly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeBasedReplacement;

impl ReplacementStrategy for AgeBasedReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let count = elimination_count(population, offspring);
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut wheel = RouletteWheel::new(
            population
                .iter()
                .enumerate()
                .map(|(i, c)| (i, (c.age() + 1) as f64))
                .collect(),
        )?;
        (0..count).map(|_| wheel.spin_and_readjust(rng)).collect()
    }
}
