use uuid::Uuid;

use crate::chromosome::{Chromosome, FitnessCache};
use crate::rng::RandomNumberGenerator;

/// Chromosome used by unit tests.
///
/// Fitness is either pinned with [`TestChromosome::with_fitness`] or the sum of
/// the genes.
#[derive(Clone, Debug)]
pub struct TestChromosome {
    id: Uuid,
    age: usize,
    genes: Vec<i32>,
    pinned: Option<f64>,
    fitness: FitnessCache,
}

impl TestChromosome {
    pub fn new(genes: Vec<i32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            age: 0,
            genes,
            pinned: None,
            fitness: FitnessCache::new(),
        }
    }

    pub fn with_fitness(fitness: f64) -> Self {
        Self {
            pinned: Some(fitness),
            ..Self::new(vec![1])
        }
    }

    pub fn with_age(mut self, age: usize) -> Self {
        self.age = age;
        self
    }

    pub fn population(fitness: &[f64]) -> Vec<Self> {
        fitness.iter().map(|&f| Self::with_fitness(f)).collect()
    }
}

impl Chromosome for TestChromosome {
    type Gene = i32;

    fn id(&self) -> Uuid {
        self.id
    }

    fn age(&self) -> usize {
        self.age
    }

    fn increment_age(&mut self) {
        self.age += 1;
    }

    fn genes(&self) -> &[i32] {
        &self.genes
    }

    fn offspring(&self, genes: Vec<i32>) -> Self {
        Self::new(genes)
    }

    fn calculate_fitness(&self) -> f64 {
        match self.pinned {
            Some(fitness) => fitness,
            None => self
                .fitness
                .get_or_calculate(|| self.genes.iter().map(|&g| g as f64).sum()),
        }
    }

    fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
        if let Some(first) = self.genes.first_mut() {
            *first += 1;
        }
        self.fitness.invalidate();
    }
}
