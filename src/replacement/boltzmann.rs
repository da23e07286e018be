use super::{elimination_count, ReplacementStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::population::fitness_scores;
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;
use crate::temperature::{boltzmann_weights, TemperatureSchedule};

/// Eliminates individuals with Boltzmann probabilities.
///
/// Each individual still standing is weighted by `exp(-(f - f_min) / T)`. As the
/// temperature decays, elimination concentrates on the least fit, and at zero it
/// always removes the least fit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BoltzmannReplacement {
    schedule: TemperatureSchedule,
}

impl BoltzmannReplacement {
    pub fn new(schedule: TemperatureSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }
}

impl ReplacementStrategy for BoltzmannReplacement {
    fn select_for_elimination<C: Chromosome>(
        &self,
        population: &[C],
        offspring: &[C],
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        let fitness = fitness_scores(population)?;
        let temperature = self.schedule.temperature(epoch);
        let mut standing: Vec<usize> = (0..population.len()).collect();
        let mut eliminated = Vec::new();

        // Weights are recomputed after every removal so a cold run keeps
        // taking the least fit of those left
        for _ in 0..elimination_count(population, offspring) {
            let energies: Vec<f64> = standing.iter().map(|&i| fitness[i]).collect();
            let weights = boltzmann_weights(&energies, temperature);
            let wheel = RouletteWheel::new(weights.into_iter().enumerate().collect())?;
            let position = *wheel.spin(rng)?;
            eliminated.push(standing.swap_remove(position));
        }

        Ok(eliminated)
    }
}
