use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover operators.
///
/// A crossover strategy recombines the genes of a couple into offspring. Gene
/// mechanics stay with the implementer: offspring are always built through
/// [`Chromosome::offspring`], so they carry a fresh identity and an age of zero.
pub trait CrossoverStrategy: Debug {
    /// Recombines `couple` into offspring.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidChromosome`](crate::error::GeneticError::InvalidChromosome)
    /// when the parents' genes cannot be recombined.
    fn crossover<C: Chromosome>(
        &self,
        couple: &Couple<'_, C>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>>;
}
