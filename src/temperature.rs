//! # Temperature Schedules
//!
//! Boltzmann selection and Boltzmann replacement both draw individuals with
//! probability proportional to `exp(-energy / T)`. The temperature `T` decays
//! every epoch, which sharpens the bias over the course of a run.

use crate::error::{GeneticError, Result};

/// Temperatures at or below this value are treated as zero.
const MIN_TEMPERATURE: f64 = 1e-9;

/// How the temperature decreases from one epoch to the next.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureDecay {
    /// `T = T0 * exp(-rate * epoch)`
    Exponential,
    /// `T = max(0, T0 - rate * epoch)`
    Linear,
}

/// A decaying temperature.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TemperatureScheduleConfig"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSchedule {
    initial_temperature: f64,
    decay_rate: f64,
    decay: TemperatureDecay,
}

impl TemperatureSchedule {
    /// Creates a new temperature schedule.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `initial_temperature` is not positive or
    /// `decay_rate` is negative.
    pub fn new(initial_temperature: f64, decay_rate: f64, decay: TemperatureDecay) -> Result<Self> {
        if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
            return Err(GeneticError::Configuration(
                "Initial temperature must be positive".to_string(),
            ));
        }
        if !decay_rate.is_finite() || decay_rate < 0.0 {
            return Err(GeneticError::Configuration(
                "Temperature decay rate cannot be negative".to_string(),
            ));
        }
        Ok(Self {
            initial_temperature,
            decay_rate,
            decay,
        })
    }

    pub fn exponential(initial_temperature: f64, decay_rate: f64) -> Result<Self> {
        Self::new(initial_temperature, decay_rate, TemperatureDecay::Exponential)
    }

    pub fn linear(initial_temperature: f64, decay_rate: f64) -> Result<Self> {
        Self::new(initial_temperature, decay_rate, TemperatureDecay::Linear)
    }

    /// Temperature at `epoch`.
    pub fn temperature(&self, epoch: usize) -> f64 {
        let epoch = epoch as f64;
        match self.decay {
            TemperatureDecay::Exponential => {
                self.initial_temperature * (-self.decay_rate * epoch).exp()
            }
            TemperatureDecay::Linear => (self.initial_temperature - self.decay_rate * epoch).max(0.0),
        }
    }
}

/// Boltzmann weights `exp(-(e - e_min) / T)` for the given energies.
///
/// Shifting by the lowest energy keeps the largest weight at exactly one. At a
/// temperature of zero only the lowest-energy entries keep a weight.
pub fn boltzmann_weights(energies: &[f64], temperature: f64) -> Vec<f64> {
    let lowest = energies.iter().cloned().fold(f64::INFINITY, f64::min);

    if temperature <= MIN_TEMPERATURE {
        return energies
            .iter()
            .map(|&e| if e <= lowest { 1.0 } else { 0.0 })
            .collect();
    }

    energies
        .iter()
        .map(|&e| (-(e - lowest) / temperature).exp())
        .collect()
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TemperatureScheduleConfig {
    initial_temperature: f64,
    decay_rate: f64,
    decay: TemperatureDecay,
}

#[cfg(feature = "serde")]
impl TryFrom<TemperatureScheduleConfig> for TemperatureSchedule {
    type Error = GeneticError;

    fn try_from(config: TemperatureScheduleConfig) -> Result<Self> {
        Self::new(config.initial_temperature, config.decay_rate, config.decay)
    }
}
