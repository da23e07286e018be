//! An evolutionary computation engine.
//!
//! Users implement [`Chromosome`] for their problem and configure a [`Runner`]
//! with parent selection, crossover, replacement and termination strategies.
//! When several strategies are registered for one phase, an operator selection
//! policy picks among them every epoch.
pub mod chromosome;
pub mod couple;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod operators;
pub mod population;
pub mod replacement;
pub mod rng;
pub mod sampling;
pub mod selection;
pub mod temperature;
pub mod termination;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, FitnessCache};
pub use couple::Couple;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{LogLevel, Runner, RunnerBuilder, RunnerOptions};
pub use rng::RandomNumberGenerator;
