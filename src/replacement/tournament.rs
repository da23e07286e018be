use super::{elimination_count, ReplacementStrategy};
use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::population::fitness_scores;
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

/// Eliminates the losers of tournaments.
///
/// Every elimination draws a group of `tournament_size` individuals among those
/// still standing. The deterministic variant removes the least fit member of the
/// group. The stochastic variant weights each member by `f_max - f` within the
/// group, so the least fit is the most likely to go.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TournamentReplacementConfig"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentReplacement {
    tournament_size: usize,
    stochastic: bool,
}

impl TournamentReplacement {
    /// # Errors
    ///
    /// Returns a configuration error if `tournament_size` is lower than 2.
    pub fn new(tournament_size: usize, stochastic: bool) -> Result<Self> {
        if tournament_size < 2 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 2".to_string(),
            ));
        }
        Ok(Self {
            tournament_size,
            stochastic,
        })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Position in `standing` of the member losing one tournament.
    fn run_tournament(
        &self,
        standing: &[usize],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let group = rng.sample_indices(standing.len(), self.tournament_size);

        if self.stochastic {
            let strongest = group
                .iter()
                .map(|&pos| fitness[standing[pos]])
                .fold(f64::NEG_INFINITY, f64::max);
            let wheel = RouletteWheel::new(
                group
                    .iter()
                    .map(|&pos| (pos, strongest - fitness[standing[pos]]))
                    .collect(),
            )?;
            return wheel.spin(rng).copied();
        }

        group
            .into_iter()
            .min_by(|&a, &b| {
                fitness[standing[a]]
                    .partial_cmp(&fitness[standing[b]])
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(GeneticError::EmptyPopulation)
    }
}

impl ReplacementStrategy for TournamentReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let fitness = fitness_scores(population)?;
        let mut standing: Vec<usize> = (0..population.len()).collect();

        (0..elimination_count(population, offspring))
            .map(|_| {
                let loser = self.run_tournament(&standing, &fitness, rng)?;
                Ok(standing.swap_remove(loser))
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TournamentReplacementConfig {
    tournament_size: usize,
    stochastic: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<TournamentReplacementConfig> for TournamentReplacement {
    type Error = GeneticError;

    fn try_from(config: TournamentReplacementConfig) -> Result<Self> {
        Self::new(config.tournament_size, config.stochastic)
    }
}
