//! # Replacement
//!
//! Survivor selection strategies merging offspring back into the population.
//! Apart from [`GenerationalReplacement`], every strategy eliminates at most one
//! member per offspring and fills each vacancy with one of the fittest
//! offspring, so the population keeps its size from epoch to epoch.
pub mod age_based;
pub mod boltzmann;
pub mod elitist;
pub mod generational;
pub mod random;
pub mod replacement_strategy;
pub mod tournament;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub use age_based::AgeBasedReplacement;
pub use boltzmann::BoltzmannReplacement;
pub use elitist::ElitistSurvivorReplacement;
pub use generational::GenerationalReplacement;
pub use random::RandomReplacement;
pub use replacement_strategy::ReplacementStrategy;
pub use tournament::TournamentReplacement;

/// The closed set of replacement strategies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    Generational(GenerationalReplacement),
    AgeBased(AgeBasedReplacement),
    ElitistSurvivor(ElitistSurvivorReplacement),
    Tournament(TournamentReplacement),
    Boltzmann(BoltzmannReplacement),
    Random(RandomReplacement),
}

impl ReplacementStrategy for Replacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            Self::Generational(s) => s.select_for_elimination(population, offspring, epoch, rng),
            Self::AgeBased(s) => s.select_for_elimination(population, offspring, epoch, rng),
            Self::ElitistSurvivor(s) => {
                s.select_for_elimination(population, offspring, epoch, rng)
            }
            Self::Tournament(s) => s.select_for_elimination(population, offspring, epoch, rng),
            Self::Boltzmann(s) => s.select_for_elimination(population, offspring, epoch, rng),
            Self::Random(s) => s.select_for_elimination(population, offspring, epoch, rng),
        }
    }

    fn replace<C: Chromosome>(
        &self,
        population: Vec<C>,
        offspring: Vec<C>,
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        match self {
            Self::Generational(s) => s.replace(population, offspring, epoch, rng),
            Self::AgeBased(s) => s.replace(population, offspring, epoch, rng),
            Self::ElitistSurvivor(s) => s.replace(population, offspring, epoch, rng),
            Self::Tournament(s) => s.replace(population, offspring, epoch, rng),
            Self::Boltzmann(s) => s.replace(population, offspring, epoch, rng),
            Self::Random(s) => s.replace(population, offspring, epoch, rng),
        }
    }
}

/// Number of members an elimination-based strategy removes.
pub(crate) fn elimination_count<C>(population: &[C], offspring: &[C]) -> usize {
    offspring.len().min(population.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::TemperatureSchedule;
    use crate::testing::TestChromosome;

    #[test]
    fn test_size_is_preserved_through_enum() {
        let strategies = vec![
            Replacement::AgeBased(AgeBasedReplacement),
            Replacement::ElitistSurvivor(ElitistSurvivorReplacement::new(0.2).unwrap()),
            Replacement::Tournament(TournamentReplacement::new(3, true).unwrap()),
            Replacement::Boltzmann(BoltzmannReplacement::new(
                TemperatureSchedule::exponential(1.0, 0.5).unwrap(),
            )),
            Replacement::Random(RandomReplacement),
        ];
        let mut rng = RandomNumberGenerator::from_seed(9);

        for strategy in strategies {
            for offspring_count in [0, 2, 6, 9] {
                let population = TestChromosome::population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
                let offspring = TestChromosome::population(&vec![0.5; offspring_count]);

                let next = strategy
                    .replace(population, offspring, 3, &mut rng)
                    .unwrap();
                assert_eq!(next.len(), 6, "{:?} with {} offspring", strategy, offspring_count);
            }
        }
    }

    #[test]
    fn test_generational_through_enum() {
        let population = TestChromosome::population(&[1.0, 2.0]);
        let offspring = TestChromosome::population(&[3.0, 4.0, 5.0]);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let next = Replacement::Generational(GenerationalReplacement)
            .replace(population, offspring, 0, &mut rng)
            .unwrap();
        assert_eq!(next.len(), 3);
    }
}
