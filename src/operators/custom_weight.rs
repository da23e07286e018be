use tracing::trace;

use super::{require_non_empty, require_rng, OperatorRecord, OperatorSelectionPolicy};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

/// Picks operators with probability proportional to their custom weights.
///
/// Weights are normalized to sum to one when applied. If every weight is zero,
/// the operators are equally likely.
#[derive(Debug, Clone)]
pub struct CustomWeightPolicy<T> {
    operators: Option<Vec<OperatorRecord<T>>>,
    probabilities: Vec<f64>,
}

impl<T> CustomWeightPolicy<T> {
    pub fn new() -> Self {
        Self {
            operators: None,
            probabilities: Vec::new(),
        }
    }

    /// Normalized selection probabilities, in operator order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl<T> Default for CustomWeightPolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperatorSelectionPolicy<T> for CustomWeightPolicy<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        require_non_empty(&operators)?;

        if let Some(record) = operators
            .iter()
            .find(|record| !record.custom_weight.is_finite() || record.custom_weight < 0.0)
        {
            return Err(GeneticError::Configuration(format!(
                "Custom operator weights must be finite and non-negative, got {}",
                record.custom_weight
            )));
        }

        let total: f64 = operators.iter().map(|record| record.custom_weight).sum();
        self.probabilities = if total > 0.0 {
            operators
                .iter()
                .map(|record| record.custom_weight / total)
                .collect()
        } else {
            vec![1.0 / operators.len() as f64; operators.len()]
        };
        self.operators = Some(operators);
        Ok(())
    }

    fn select_operator(
        &mut self,
        rng: Option<&mut RandomNumberGenerator>,
        epoch: usize,
    ) -> Result<&T> {
        let operators = self
            .operators
            .as_ref()
            .ok_or(GeneticError::OperatorsNotApplied)?;
        let rng = require_rng(rng, "Custom weight")?;

        let wheel = RouletteWheel::new(self.probabilities.iter().copied().enumerate().collect())?;
        let idx = *wheel.spin(rng)?;
        trace!(epoch, operator = idx, "custom weight selected operator");

        Ok(&operators[idx].operator)
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        self.operators.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_normalized() {
        let mut policy = CustomWeightPolicy::new();
        policy
            .apply_operators(vec![
                OperatorRecord::weighted("a", 2.0),
                OperatorRecord::weighted("b", 6.0),
                OperatorRecord::weighted("c", 0.0),
            ])
            .unwrap();

        assert_eq!(policy.probabilities(), &[0.25, 0.75, 0.0]);
    }

    #[test]
    fn test_zero_weights_degrade_to_uniform() {
        let mut policy = CustomWeightPolicy::new();
        policy
            .apply_operators(vec![OperatorRecord::new(1), OperatorRecord::new(2)])
            .unwrap();

        assert_eq!(policy.probabilities(), &[0.5, 0.5]);
    }

    #[test]
    fn test_selection_follows_weights() {
        let mut policy = CustomWeightPolicy::new();
        policy
            .apply_operators(vec![
                OperatorRecord::weighted(0usize, 0.2),
                OperatorRecord::weighted(1usize, 0.8),
            ])
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut counts = [0usize; 2];

        for epoch in 0..5_000 {
            counts[*policy.select_operator(Some(&mut rng), epoch).unwrap()] += 1;
        }

        assert!((counts[1] as f64 / 5_000.0 - 0.8).abs() < 0.05);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut policy = CustomWeightPolicy::new();
        let result = policy.apply_operators(vec![OperatorRecord::weighted(1, -1.0)]);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_unapplied_and_empty() {
        let mut policy: CustomWeightPolicy<u8> = CustomWeightPolicy::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(matches!(
            policy.select_operator(Some(&mut rng), 0),
            Err(GeneticError::OperatorsNotApplied)
        ));
        assert!(matches!(
            policy.apply_operators(Vec::new()),
            Err(GeneticError::EmptyOperatorSet)
        ));
    }
}
