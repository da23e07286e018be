use super::CrossoverStrategy;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{ensure_unit_interval, GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Swaps each gene between the parents with a fixed probability.
///
/// Only the common prefix of both parents is mixed. The tail of the longer
/// parent stays with its own child.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniformCrossoverConfig"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    mix_probability: f64,
}

impl UniformCrossover {
    /// # Errors
    ///
    /// Returns a configuration error if `mix_probability` lies outside `[0, 1]`.
    pub fn new(mix_probability: f64) -> Result<Self> {
        Ok(Self {
            mix_probability: ensure_unit_interval(mix_probability, "Mix probability")?,
        })
    }

    pub fn mix_probability(&self) -> f64 {
        self.mix_probability
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self {
            mix_probability: 0.5,
        }
    }
}

impl CrossoverStrategy for UniformCrossover {
    fn crossover<C: Chromosome>(
        &self,
        couple: &Couple<'_, C>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<C>> {
        let mut first = couple.a().genes().to_vec();
        let mut second = couple.b().genes().to_vec();
        if first.is_empty() || second.is_empty() {
            return Err(GeneticError::InvalidChromosome(
                "Cannot cross over a chromosome without genes".to_string(),
            ));
        }

        let shared = first.len().min(second.len());
        for i in 0..shared {
            if rng.gen_bool(self.mix_probability) {
                std::mem::swap(&mut first[i], &mut second[i]);
            }
        }

        Ok(vec![
            couple.a().offspring(first),
            couple.b().offspring(second),
        ])
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UniformCrossoverConfig {
    mix_probability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UniformCrossoverConfig> for UniformCrossover {
    type Error = GeneticError;

    fn try_from(config: UniformCrossoverConfig) -> Result<Self> {
        Self::new(config.mix_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestChromosome;

    #[test]
    fn test_extreme_probabilities() {
        let a = TestChromosome::new(vec![1, 2, 3]);
        let b = TestChromosome::new(vec![4, 5, 6, 7]);
        let couple = Couple::new(&a, &b).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let kept = UniformCrossover::new(0.0)
            .unwrap()
            .crossover(&couple, &mut rng)
            .unwrap();
        assert_eq!(kept[0].genes(), &[1, 2, 3]);
        assert_eq!(kept[1].genes(), &[4, 5, 6, 7]);

        let swapped = UniformCrossover::new(1.0)
            .unwrap()
            .crossover(&couple, &mut rng)
            .unwrap();
        assert_eq!(swapped[0].genes(), &[4, 5, 6]);
        assert_eq!(swapped[1].genes(), &[1, 2, 3, 7]);
    }

    #[test]
    fn test_each_position_keeps_both_genes() {
        let a = TestChromosome::new(vec![0; 16]);
        let b = TestChromosome::new(vec![1; 16]);
        let couple = Couple::new(&a, &b).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let children = UniformCrossover::default()
            .crossover(&couple, &mut rng)
            .unwrap();
        for i in 0..16 {
            assert_eq!(children[0].genes()[i] + children[1].genes()[i], 1);
        }
    }

    #[test]
    fn test_invalid_probability() {
        assert!(UniformCrossover::new(1.5).is_err());
        assert!(UniformCrossover::new(f64::NAN).is_err());
    }
}
