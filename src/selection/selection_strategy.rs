use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy pairs members of the population into couples that will
/// be handed to crossover. Different strategies trade exploration for
/// exploitation in different ways.
///
/// # Examples
///
/// ```
/// use genepool::chromosome::Chromosome;
/// use genepool::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genepool::rng::RandomNumberGenerator;
/// use genepool::error::Result;
/// use uuid::Uuid;
///
/// #[derive(Clone, Debug)]
/// struct Value {
///     id: Uuid,
///     genes: Vec<f64>,
/// }
///
/// impl Chromosome for Value {
///     type Gene = f64;
///     fn id(&self) -> Uuid { self.id }
///     fn age(&self) -> usize { 0 }
///     fn increment_age(&mut self) {}
///     fn genes(&self) -> &[f64] { &self.genes }
///     fn offspring(&self, genes: Vec<f64>) -> Self { Self { id: Uuid::new_v4(), genes } }
///     fn calculate_fitness(&self) -> f64 { self.genes[0] }
///     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {}
/// }
///
/// fn main() -> Result<()> {
///     let population: Vec<Value> = [0.5, 0.8, 0.3, 0.9]
///         .iter()
///         .map(|&f| Value { id: Uuid::new_v4(), genes: vec![f] })
///         .collect();
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let couples = RouletteWheelSelection.select_couples(&population, 3, 0, &mut rng)?;
///
///     assert_eq!(couples.len(), 3);
///     assert!(couples.iter().all(|c| c.a().id() != c.b().id()));
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug {
    /// Pairs members of `population` into couples.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population.
    /// * `minimum_number_of_couples` - How many couples the run loop asks for.
    /// * `epoch` - The epoch being evaluated, for strategies that change over time.
    /// * `rng` - The random source of the run.
    ///
    /// # Returns
    ///
    /// The selected couples. Strategies may return fewer couples than requested
    /// when the population cannot supply them, but never more.
    ///
    /// # Errors
    ///
    /// Returns an error if a fitness score is not finite, or if a strategy cannot
    /// weight the given scores (e.g. negative fitness with roulette selection).
    fn select_couples<'a, C: Chromosome>(
        &self,
        population: &'a [C],
        minimum_number_of_couples: usize,
        epoch: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Couple<'a, C>>>;
}
