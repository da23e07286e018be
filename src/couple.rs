use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};

/// A pair of parents selected to reproduce.
///
/// The two members are labeled `a` and `b` for crossover, and never share the
/// same identity.
#[derive(Debug, Clone, Copy)]
pub struct Couple<'a, C: Chromosome> {
    a: &'a C,
    b: &'a C,
}

impl<'a, C: Chromosome> Couple<'a, C> {
    /// Creates a couple, rejecting a chromosome paired with itself.
    pub fn new(a: &'a C, b: &'a C) -> Result<Self> {
        if a.id() == b.id() {
            return Err(GeneticError::InvalidCouple(format!(
                "Chromosome {} cannot be paired with itself",
                a.id()
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &'a C {
        self.a
    }

    pub fn b(&self) -> &'a C {
        self.b
    }
}
