use super::CrossoverStrategy;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Cuts both parents at one point and swaps the tails.
///
/// With a cut at `p`, the first child takes `a[..p]` followed by `b[p..]` and the
/// second takes `b[..p]` followed by `a[p..]`. Parents of different lengths are
/// fine as long as the cut lies within the shorter one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnePointCrossover {
    point: Option<usize>,
}

impl OnePointCrossover {
    /// Cuts at a random point for every couple.
    pub fn new() -> Self {
        Self { point: None }
    }

    /// Always cuts at `point`.
    pub fn at(point: usize) -> Self {
        Self { point: Some(point) }
    }

    pub fn point(&self) -> Option<usize> {
        self.point
    }

    fn cut_point(&self, shortest: usize, rng: &mut RandomNumberGenerator) -> Result<usize> {
        match self.point {
            Some(point) if point > shortest => Err(GeneticError::InvalidChromosome(format!(
                "Crossover point {} lies beyond the shorter parent of length {}",
                point, shortest
            ))),
            Some(point) => Ok(point),
            None if shortest == 1 => Ok(1),
            None => Ok(1 + rng.gen_index(shortest - 1)),
        }
    }
}

impl CrossoverStrategy for OnePointCrossover {
    fn crossover<C: Chromosome>(
        &self,
        couple: &Couple<'_, C>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        let a = couple.a().genes();
        let b = couple.b().genes();
        if a.is_empty() || b.is_empty() {
            return Err(GeneticError::InvalidChromosome(
                "Cannot cross over a chromosome without genes".to_string(),
            ));
        }

        let point = self.cut_point(a.len().min(b.len()), rng)?;

        let first = a[..point].iter().chain(&b[point..]).cloned().collect();
        let second = b[..point].iter().chain(&a[point..]).cloned().collect();

        Ok(vec![
            couple.a().offspring(first),
            couple.b().offspring(second),
        ])
    }
}
