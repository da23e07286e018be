//! # Chromosome Trait
//!
//! The `Chromosome` trait defines the interface for candidate solutions handled
//! by the engine. The engine never touches genes directly. It only reads fitness,
//! identity and age, asks for offspring built from gene vectors, and triggers
//! mutation.
//!
//! ## Example
//!
//! ```rust
//! use genepool::chromosome::{Chromosome, FitnessCache};
//! use genepool::rng::RandomNumberGenerator;
//! use uuid::Uuid;
//!
//! #[derive(Clone, Debug)]
//! struct Bits {
//!     id: Uuid,
//!     age: usize,
//!     genes: Vec<bool>,
//!     fitness: FitnessCache,
//! }
//!
//! impl Chromosome for Bits {
//!     type Gene = bool;
//!
//!     fn id(&self) -> Uuid {
//!         self.id
//!     }
//!
//!     fn age(&self) -> usize {
//!         self.age
//!     }
//!
//!     fn increment_age(&mut self) {
//!         self.age += 1;
//!     }
//!
//!     fn genes(&self) -> &[bool] {
//!         &self.genes
//!     }
//!
//!     fn offspring(&self, genes: Vec<bool>) -> Self {
//!         Self { id: Uuid::new_v4(), age: 0, genes, fitness: FitnessCache::new() }
//!     }
//!
//!     fn calculate_fitness(&self) -> f64 {
//!         self.fitness
//!             .get_or_calculate(|| self.genes.iter().filter(|g| **g).count() as f64)
//!     }
//!
//!     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
//!         let idx = rng.gen_index(self.genes.len());
//!         self.genes[idx] = !self.genes[idx];
//!         self.fitness.invalidate();
//!     }
//! }
//! ```

use std::cell::OnceCell;
use std::fmt::Debug;

use uuid::Uuid;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent candidate solutions in the evolutionary engine.
///
/// Implementations must keep [`Chromosome::calculate_fitness`] pure for a given
/// gene vector. Memoization through [`FitnessCache`] is expected, since the
/// engine reads fitness many times per epoch.
pub trait Chromosome: Clone + Debug {
    /// The gene type stored by the chromosome.
    type Gene: Clone + Debug;

    /// Stable identity of this chromosome. Copies made by
    /// [`Chromosome::deep_copy`] keep it, offspring get a fresh one.
    fn id(&self) -> Uuid;

    /// Number of epochs this chromosome has survived.
    fn age(&self) -> usize;

    /// Called once for every epoch the chromosome survives.
    fn increment_age(&mut self);

    /// The genes of this chromosome.
    fn genes(&self) -> &[Self::Gene];

    /// Builds a new chromosome of the same kind from `genes`.
    ///
    /// The result must have a fresh identity and an age of zero.
    fn offspring(&self, genes: Vec<Self::Gene>) -> Self;

    /// Computes the fitness score. Higher is better.
    fn calculate_fitness(&self) -> f64;

    /// Mutates the chromosome in place. Mutation is expected to be probabilistic.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);

    /// Returns an independent copy sharing no state with `self`.
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// A lazily filled fitness slot for [`Chromosome`] implementations.
///
/// The value is computed on first access and reused until
/// [`FitnessCache::invalidate`] is called, typically after mutation.
#[derive(Clone, Debug, Default)]
pub struct FitnessCache {
    value: OnceCell<f64>,
}

impl FitnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached fitness, computing it with `calculate` if missing.
    pub fn get_or_calculate<F>(&self, calculate: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        *self.value.get_or_init(calculate)
    }

    /// Returns the cached fitness without computing it.
    pub fn get(&self) -> Option<f64> {
        self.value.get().copied()
    }

    /// Drops the cached value.
    pub fn invalidate(&mut self) {
        self.value.take();
    }
}
