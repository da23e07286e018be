use super::{spin_couples, SelectionStrategy};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{GeneticError, Result};
use crate::population::fitness_scores;
use crate::rng::RandomNumberGenerator;

/// Pairs parents through roulette wheel (fitness proportionate) selection.
///
/// Each individual is drawn with probability proportional to its fitness. The two
/// members of a couple are drawn without replacement, so they are always
/// distinct. If every fitness is zero, the draw is uniform.
///
/// This strategy requires all fitness values to be non-negative. If you have
/// negative fitness values, consider using rank selection instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouletteWheelSelection;

impl SelectionStrategy for RouletteWheelSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        let fitness = fitness_scores(population)?;

        if fitness.iter().any(|&f| f < 0.0) {
            return Err(GeneticError::Configuration(
                "Roulette wheel selection requires non-negative fitness values".to_string(),
            ));
        }

        spin_couples(population, &fitness, minimum_number_of_couples, rng)
    }
}
