use super::{spin_couples, SelectionStrategy};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::population::{fitness_scores, ranked_indices};
use crate::rng::RandomNumberGenerator;

/// Pairs parents with probability proportional to their fitness rank.
///
/// The least fit individual gets weight 1 and the fittest gets weight `n`, so
/// selection pressure does not depend on the scale of the fitness values. Unlike
/// roulette wheel selection, negative fitness values are fine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankSelection;

impl RankSelection {
    /// Rank weights in population order.
    fn rank_weights(fitness: &[f64]) -> Vec<f64> {
        let n = fitness.len();
        let mut weights = vec![0.0; n];
        for (position, idx) in ranked_indices(fitness).into_iter().enumerate() {
            weights[idx] = (n - position) as f64;
        }
        weights
    }
}

impl SelectionStrategy for RankSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        let fitness = fitness_scores(population)?;
        let weights = Self::rank_weights(&fitness);
        spin_couples(population, &weights, minimum_number_of_couples, rng)
    }
}
