use tracing::trace;

use super::SelectionStrategy;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{ensure_unit_interval, Result};
use crate::population::{fitness_scores, ranked_indices, share_of};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that gives every elite a chance to mate.
///
/// The elites are the fittest `elite_percentage` of the population. A random
/// `non_elite_percentage` of the remaining individuals is eligible to mate as
/// well; with a value of `0.0` elites only mate with other elites.
///
/// Couples are formed in two phases:
///
/// 1. Every elite mates once before any is reused. An elite is paired with
///    another elite that has not mated yet, otherwise with an eligible non-elite,
///    otherwise with an elite that already mated. The phase ends when every
///    elite has mated or no partner is left.
/// 2. The remaining couples are drawn uniformly from the elites and the eligible
///    non-elites.
///
/// No more than the requested number of couples is returned.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ElitistSelectionConfig"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ElitistSelection {
    elite_percentage: f64,
    non_elite_percentage: f64,
}

impl ElitistSelection {
    /// Creates a new ElitistSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `elite_percentage` - Fraction of the population considered elite, in `[0, 1]`.
    /// * `non_elite_percentage` - Fraction of the non-elites eligible to mate, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either fraction lies outside `[0, 1]`.
    pub fn new(elite_percentage: f64, non_elite_percentage: f64) -> Result<Self> {
        Ok(Self {
            elite_percentage: ensure_unit_interval(elite_percentage, "Elite percentage")?,
            non_elite_percentage: ensure_unit_interval(
                non_elite_percentage,
                "Non-elite percentage",
            )?,
        })
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        if population.len() < 2 || minimum_number_of_couples == 0 {
            return Ok(Vec::new());
        }

        let fitness = fitness_scores(population)?;
        let ranked = ranked_indices(&fitness);
        let elite_count = share_of(population.len(), self.elite_percentage);
        let (elites, non_elites) = ranked.split_at(elite_count);

        let eligible_count = share_of(non_elites.len(), self.non_elite_percentage);
        let eligible: Vec<usize> = rng
            .sample_indices(non_elites.len(), eligible_count)
            .into_iter()
            .map(|i| non_elites[i])
            .collect();

        let mut couples = Vec::with_capacity(minimum_number_of_couples);

        // Phase 1: every elite mates once
        let mut unmated: Vec<usize> = rng
            .sample_indices(elites.len(), elites.len())
            .into_iter()
            .map(|i| elites[i])
            .collect();
        let mut mated: Vec<usize> = Vec::with_capacity(elites.len());

        while couples.len() < minimum_number_of_couples {
            let Some(elite) = unmated.pop() else {
                break;
            };

            let partner = if !unmated.is_empty() {
                let partner = unmated.swap_remove(rng.gen_index(unmated.len()));
                mated.push(partner);
                partner
            } else if !eligible.is_empty() {
                eligible[rng.gen_index(eligible.len())]
            } else if !mated.is_empty() {
                mated[rng.gen_index(mated.len())]
            } else {
                break;
            };

            couples.push(Couple::new(&population[elite], &population[partner])?);
            mated.push(elite);
        }
        trace!(
            elites = elites.len(),
            eligible = eligible.len(),
            couples = couples.len(),
            "elitist selection finished mating elites"
        );

        // Phase 2: fill up from elites and eligible non-elites
        let pool: Vec<usize> = elites.iter().chain(eligible.iter()).copied().collect();
        if pool.len() >= 2 {
            while couples.len() < minimum_number_of_couples {
                let pair = rng.sample_indices(pool.len(), 2);
                couples.push(Couple::new(
                    &population[pool[pair[0]]],
                    &population[pool[pair[1]]],
                )?);
            }
        }

        Ok(couples)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ElitistSelectionConfig {
    elite_percentage: f64,
    non_elite_percentage: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ElitistSelectionConfig> for ElitistSelection {
    type Error = crate::error::GeneticError;

    fn try_from(config: ElitistSelectionConfig) -> Result<Self> {
        Self::new(config.elite_percentage, config.non_elite_percentage)
    }
}
