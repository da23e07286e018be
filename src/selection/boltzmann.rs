use super::{spin_couples, SelectionStrategy};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::population::fitness_scores;
use crate::rng::RandomNumberGenerator;
use crate::temperature::{boltzmann_weights, TemperatureSchedule};

/// Pairs parents with Boltzmann probabilities that sharpen over time.
///
/// Each individual is weighted by `exp((f - f_max) / T)` where `T` is the
/// temperature of the current epoch. A hot run is close to uniform selection and
/// a cold run keeps picking the fittest individuals.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BoltzmannSelection {
    schedule: TemperatureSchedule,
}

impl BoltzmannSelection {
    pub fn new(schedule: TemperatureSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }
}

impl SelectionStrategy for BoltzmannSelection {
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>> {
        let energies: Vec<f64> = fitness_scores(population)?
            .into_iter()
            .map(|f| -f)
            .collect();
        let weights = boltzmann_weights(&energies, self.schedule.temperature(epoch));
        spin_couples(population, &weights, minimum_number_of_couples, rng)
    }
}
