use super::SelectionStrategy;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{GeneticError, Result};
use crate::population::fitness_scores;
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

/// A selection strategy that pairs parents through tournaments.
///
/// For every couple a random group of `tournament_size` individuals is drawn
/// without replacement. The deterministic variant pairs the two fittest members
/// of the group. The stochastic variant spins a fitness-weighted wheel within the
/// group twice instead.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// The tournament size is clamped to the population size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TournamentSelectionConfig"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSelection {
    tournament_size: usize,
    stochastic: bool,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of individuals in each tournament. Must be at least 2.
    /// * `stochastic` - Whether winners are drawn by fitness-weighted sampling
    ///   instead of taking the two fittest.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is lower than 2.
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

    /// Runs one tournament and returns the population indices of its two winners.
    fn run_tournament(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        let mut participants = rng.sample_indices(fitness.len(), self.tournament_size);
        if participants.len() < 2 {
            return Err(GeneticError::Configuration(format!(
                "Tournament needs at least 2 participants, got {}",
                participants.len()
            )));
        }

        if self.stochastic {
            let mut wheel =
                RouletteWheel::new(participants.iter().map(|&i| (i, fitness[i])).collect())?;
            let a = wheel.spin_and_readjust(rng)?;
            let b = wheel.spin_and_readjust(rng)?;
            return Ok((a, b));
        }

        participants.sort_by(|&a, &b| {
            fitness[b]
                .partial_cmp(&fitness[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok((participants[0], participants[1]))
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        _epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        if population.len() < 2 {
            return Ok(Vec::new());
        }

        let fitness = fitness_scores(population)?;
        if self.stochastic && fitness.iter().any(|&f| f < 0.0) {
            return Err(GeneticError::Configuration(
                "Stochastic tournament selection requires non-negative fitness values".to_string(),
            ));
        }

        (0..minimum_number_of_couples)
            .map(|_| {
                let (a, b) = self.run_tournament(&fitness, rng)?;
                Couple::new(&population[a], &population[b])
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TournamentSelectionConfig {
    tournament_size: usize,
    stochastic: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<TournamentSelectionConfig> for TournamentSelection {
    type Error = GeneticError;

    fn try_from(config: TournamentSelectionConfig) -> Result<Self> {
        Self::new(config.tournament_size, config.stochastic)
    }
}
