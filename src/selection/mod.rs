//! # Parent Selection
//!
//! Strategies that pair the current population into couples for crossover.
//! [`CoupleSelection`] is the closed set the run loop dispatches through.
pub mod boltzmann;
pub mod elitist;
pub mod random;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

pub use boltzmann::BoltzmannSelection;
pub use elitist::ElitistSelection;
pub use random::RandomSelection;
pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;

/// The closed set of parent selection strategies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum CoupleSelection {
    Random(RandomSelection),
    RouletteWheel(RouletteWheelSelection),
    Rank(RankSelection),
    Tournament(TournamentSelection),
    Elitist(ElitistSelection),
    Boltzmann(BoltzmannSelection),
}

impl SelectionStrategy for CoupleSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        match self {
            Self::Random(s) => s.select_couples(population, minimum_number_of_couples, epoch, rng),
            Self::RouletteWheel(s) => {
                s.select_couples(population, minimum_number_of_couples, epoch, rng)
            }
            Self::Rank(s) => s.select_couples(population, minimum_number_of_couples, epoch, rng),
            Self::Tournament(s) => {
                s.select_couples(population, minimum_number_of_couples, epoch, rng)
            }
            Self::Elitist(s) => s.select_couples(population, minimum_number_of_couples, epoch, rng),
            Self::Boltzmann(s) => {
                s.select_couples(population, minimum_number_of_couples, epoch, rng)
            }
        }
    }
}

/// Draws `count` couples from a wheel weighted by `weights`.
///
/// Each couple comes from two draws without replacement, so its members are
/// distinct. A population of one or none yields no couple, and a population of
/// two yields its only possible pair `count` times.
pub(crate) fn spin_couples<'a, C: Chromosome>(
    population: &'a [C],
    weights: &[f64],
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Couple<'a, C>>> {
    match population.len() {
        0 | 1 => return Ok(Vec::new()),
        2 => {
            return (0..count)
                .map(|_| Couple::new(&population[0], &population[1]))
                .collect()
        }
        _ => {}
    }

    let template = RouletteWheel::new(weights.iter().copied().enumerate().collect())?;
    let mut couples = Vec::with_capacity(count);
    for _ in 0..count {
        let mut wheel = template.clone();
        let a = wheel.spin_and_readjust(rng)?;
        let b = wheel.spin_and_readjust(rng)?;
        couples.push(Couple::new(&population[a], &population[b])?);
    }
    Ok(couples)
}
