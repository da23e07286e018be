use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// One slot of a [`RouletteWheel`].
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEntry<T> {
    pub item: T,
    pub weight: f64,
}

/// A weighted sampler that draws items with probability proportional to their weight.
///
/// The wheel supports sampling with replacement through [`RouletteWheel::spin`] and
/// sampling without replacement through [`RouletteWheel::spin_and_readjust`].
///
/// Weights must be finite and non-negative. When every weight is zero, each item
/// is equally likely. A zero-weight entry is never drawn while some other entry
/// has a positive weight.
///
/// # Examples
///
/// ```
/// use genepool::sampling::RouletteWheel;
/// use genepool::rng::RandomNumberGenerator;
/// use genepool::error::Result;
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let mut wheel = RouletteWheel::new(vec![("a", 1.0), ("b", 3.0), ("c", 0.0)])?;
///
///     let drawn = wheel.spin(&mut rng)?;
///     assert_ne!(*drawn, "c");
///
///     let first = wheel.spin_and_readjust(&mut rng)?;
///     let second = wheel.spin_and_readjust(&mut rng)?;
///     assert_ne!(first, second);
///     assert_eq!(wheel.len(), 1);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel<T> {
    entries: Vec<WheelEntry<T>>,
    total_weight: f64,
}

impl<T> RouletteWheel<T> {
    /// Creates a wheel from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or if any weight is negative,
    /// NaN or infinite.
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GeneticError::EmptyWheel);
        }

        if let Some((_, weight)) = entries
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(GeneticError::Configuration(format!(
                "Roulette wheel weights must be finite and non-negative, got {}",
                weight
            )));
        }

        let entries: Vec<WheelEntry<T>> = entries
            .into_iter()
            .map(|(item, weight)| WheelEntry { item, weight })
            .collect();
        let total_weight = Self::sum_weights(&entries);

        Ok(Self {
            entries,
            total_weight,
        })
    }

    /// Creates a wheel where every item is equally likely.
    pub fn uniform(items: Vec<T>) -> Result<Self> {
        Self::new(items.into_iter().map(|item| (item, 1.0)).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the weights still on the wheel.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn entries(&self) -> &[WheelEntry<T>] {
        &self.entries
    }

    /// Draws one item without changing the wheel.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyWheel` if every entry has been drawn already.
    pub fn spin(&self, rng: &mut RandomNumberGenerator) -> Result<&T> {
        let idx = self.draw_index(rng)?;
        Ok(&self.entries[idx].item)
    }

    /// Draws one item and removes it from the wheel.
    ///
    /// The remaining weights are renormalized, so successive calls sample without
    /// replacement.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyWheel` if the wheel has no entries left.
    pub fn spin_and_readjust(&mut self, rng: &mut RandomNumberGenerator) -> Result<T> {
        let idx = self.draw_index(rng)?;
        let entry = self.entries.remove(idx);
        self.total_weight = Self::sum_weights(&self.entries);
        Ok(entry.item)
    }

    fn draw_index(&self, rng: &mut RandomNumberGenerator) -> Result<usize> {
        match self.entries.len() {
            0 => return Err(GeneticError::EmptyWheel),
            1 => return Ok(0),
            _ => {}
        }

        if self.total_weight <= 0.0 {
            return Ok(rng.gen_index(self.entries.len()));
        }

        let target = rng.next_f64() * self.total_weight;
        let mut cumulative = 0.0;
        for (i, entry) in self.entries.iter().enumerate() {
            cumulative += entry.weight;
            if target < cumulative {
                return Ok(i);
            }
        }

        // Rounding left the target at the very top of the range
        Ok(self
            .entries
            .iter()
            .rposition(|entry| entry.weight > 0.0)
            .unwrap_or(self.entries.len() - 1))
    }

    fn sum_weights(entries: &[WheelEntry<T>]) -> f64 {
        entries.iter().map(|entry| entry.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spin_frequencies_follow_weights() {
        let wheel = RouletteWheel::new(vec![(0usize, 0.1), (1, 0.6), (2, 0.3)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut counts = [0usize; 3];
        let draws = 10_000;

        for _ in 0..draws {
            counts[*wheel.spin(&mut rng).unwrap()] += 1;
        }

        let expected = [0.1, 0.6, 0.3];
        for (count, expected) in counts.iter().zip(expected.iter()) {
            let frequency = *count as f64 / draws as f64;
            assert!(
                (frequency - expected).abs() < 0.05,
                "frequency {} too far from {}",
                frequency,
                expected
            );
        }
    }

    #[test]
    fn test_spin_does_not_mutate() {
        let wheel = RouletteWheel::new(vec![("a", 1.0), ("b", 2.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        for _ in 0..10 {
            wheel.spin(&mut rng).unwrap();
        }

        assert_eq!(wheel.len(), 2);
        assert_eq!(wheel.total_weight(), 3.0);
    }

    #[test]
    fn test_spin_and_readjust_never_repeats() {
        let items: Vec<(usize, f64)> = (0..8).map(|i| (i, (i + 1) as f64)).collect();
        let mut wheel = RouletteWheel::new(items).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut seen = HashSet::new();

        for _ in 0..8 {
            assert!(seen.insert(wheel.spin_and_readjust(&mut rng).unwrap()));
        }

        assert!(wheel.is_empty());
        assert_eq!(
            wheel.spin_and_readjust(&mut rng),
            Err(GeneticError::EmptyWheel)
        );
        assert!(wheel.spin(&mut rng).is_err());
    }

    #[test]
    fn test_readjust_renormalizes() {
        let mut wheel = RouletteWheel::new(vec![("a", 1.0), ("b", 0.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);

        // "b" has no weight, so "a" must come out first
        assert_eq!(wheel.spin_and_readjust(&mut rng).unwrap(), "a");
        assert_eq!(wheel.total_weight(), 0.0);
        assert_eq!(
            wheel.entries(),
            &[WheelEntry {
                item: "b",
                weight: 0.0
            }]
        );
        assert_eq!(wheel.spin_and_readjust(&mut rng).unwrap(), "b");
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let wheel = RouletteWheel::new(vec![(0, 0.0), (1, 2.0), (2, 0.0), (3, 1.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(13);

        for _ in 0..1_000 {
            let drawn = *wheel.spin(&mut rng).unwrap();
            assert!(drawn == 1 || drawn == 3);
        }
    }

    #[test]
    fn test_all_zero_weights_is_uniform() {
        let wheel = RouletteWheel::new(vec![(0usize, 0.0), (1, 0.0), (2, 0.0), (3, 0.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut counts = [0usize; 4];

        for _ in 0..8_000 {
            counts[*wheel.spin(&mut rng).unwrap()] += 1;
        }

        for count in counts {
            let frequency = count as f64 / 8_000.0;
            assert!((frequency - 0.25).abs() < 0.05);
        }
    }

    #[test]
    fn test_single_item_always_returned() {
        let wheel = RouletteWheel::new(vec![("only", 0.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        for _ in 0..5 {
            assert_eq!(*wheel.spin(&mut rng).unwrap(), "only");
        }
    }

    #[test]
    fn test_invalid_construction() {
        let empty: Vec<(u8, f64)> = Vec::new();
        assert_eq!(RouletteWheel::new(empty).unwrap_err(), GeneticError::EmptyWheel);
        assert!(matches!(
            RouletteWheel::new(vec![(1, -0.5)]),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            RouletteWheel::new(vec![(1, f64::INFINITY)]),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_uniform_constructor() {
        let wheel = RouletteWheel::uniform(vec!['x', 'y', 'z']).unwrap();
        assert_eq!(wheel.len(), 3);
        assert_eq!(wheel.total_weight(), 3.0);
    }
}
