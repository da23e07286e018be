//! # Crossover
//!
//! Operators that recombine a couple into offspring. [`Crossover`] is the closed
//! set the run loop dispatches through. Problems with their own gene mechanics
//! implement [`CrossoverStrategy`] directly on top of
//! [`Chromosome::offspring`](crate::chromosome::Chromosome::offspring).
pub mod crossover_strategy;
pub mod one_point;
pub mod uniform;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub use crossover_strategy::CrossoverStrategy;
pub use one_point::OnePointCrossover;
pub use uniform::UniformCrossover;

/// The closed set of crossover operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Crossover {
    OnePoint(OnePointCrossover),
    Uniform(UniformCrossover),
}

impl CrossoverStrategy for Crossover {
    fn crossover<C: Chromosome>(
        &self,
        couple: &Couple<'_, C>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        match self {
            Self::OnePoint(s) => s.crossover(couple, rng),
            Self::Uniform(s) => s.crossover(couple, rng),
        }
    }
}
