use super::{elimination_count, ReplacementStrategy};
use crate::chromosome::Chromosome;
use crate::error::{ensure_unit_interval, Result};
use crate::population::{fitness_scores, ranked_indices, share_of};
use crate::rng::RandomNumberGenerator;

/// Protects the fittest share of the population and replaces the rest at random.
///
/// The fittest `elite_percentage` of the population is never eliminated. Up to
/// one individual per offspring is drawn uniformly among the others, so fewer
/// members than offspring may be replaced when the elite is large.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ElitistSurvivorConfig"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElitistSurvivorReplacement {
    elite_percentage: f64,
}

impl ElitistSurvivorReplacement {
    /// # Errors
    ///
    /// Returns a configuration error if `elite_percentage` lies outside `[0, 1]`.
    pub fn new(elite_percentage: f64) -> Result<Self> {
        Ok(Self {
            elite_percentage: ensure_unit_interval(elite_percentage, "Elite percentage")?,
        })
    }

    pub fn elite_percentage(&self) -> f64 {
        self.elite_percentage
    }
}

impl ReplacementStrategy for ElitistSurvivorReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let ranked = ranked_indices(&fitness_scores(population)?);
        let elite_count = share_of(population.len(), self.elite_percentage);
        let non_elites = &ranked[elite_count..];

        let count = elimination_count(population, offspring).min(non_elites.len());
        Ok(rng
            .sample_indices(non_elites.len(), count)
            .into_iter()
            .map(|i| non_elites[i])
            .collect())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ElitistSurvivorConfig {
    elite_percentage: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ElitistSurvivorConfig> for ElitistSurvivorReplacement {
    type Error = crate::error::GeneticError;

    fn try_from(config: ElitistSurvivorConfig) -> Result<Self> {
        Self::new(config.elite_percentage)
    }
}
