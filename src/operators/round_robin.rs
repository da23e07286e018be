use tracing::trace;

use super::{require_non_empty, OperatorRecord, OperatorSelectionPolicy};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Cycles through the operators in registration order.
///
/// The random source is ignored, so the sequence only depends on how many times
/// an operator was requested since the last apply.
#[derive(Debug, Clone)]
pub struct RoundRobinPolicy<T> {
    operators: Option<Vec<OperatorRecord<T>>>,
    cursor: usize,
}

impl<T> RoundRobinPolicy<T> {
    pub fn new() -> Self {
        Self {
            operators: None,
            cursor: 0,
        }
    }
}

impl<T> Default for RoundRobinPolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperatorSelectionPolicy<T> for RoundRobinPolicy<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        require_non_empty(&operators)?;
        self.operators = Some(operators);
        self.cursor = 0;
        Ok(())
    }

    fn select_operator(
        &mut self,
        _rng: Option<&mut RandomNumberGenerator>,
        epoch: usize,
    ) -> Result<&T> {
        let operators = self
            .operators
            .as_ref()
            .ok_or(GeneticError::OperatorsNotApplied)?;

        let idx = self.cursor % operators.len();
        self.cursor = (idx + 1) % operators.len();
        trace!(epoch, operator = idx, "round robin selected operator");

        Ok(&operators[idx].operator)
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        self.operators.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_abc(policy: &mut RoundRobinPolicy<char>) {
        policy
            .apply_operators(vec![
                OperatorRecord::new('A'),
                OperatorRecord::new('B'),
                OperatorRecord::new('C'),
            ])
            .unwrap();
    }

    #[test]
    fn test_cycles_in_order_regardless_of_seed() {
        for seed in [1, 2, 99] {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let mut policy = RoundRobinPolicy::new();
            apply_abc(&mut policy);

            let selected: String = (0..9)
                .map(|epoch| *policy.select_operator(Some(&mut rng), epoch).unwrap())
                .collect();
            assert_eq!(selected, "ABCABCABC");
        }
    }

    #[test]
    fn test_reapply_resets_cursor() {
        let mut policy = RoundRobinPolicy::new();
        apply_abc(&mut policy);
        policy.select_operator(None, 0).unwrap();
        policy.select_operator(None, 1).unwrap();

        apply_abc(&mut policy);
        assert_eq!(*policy.select_operator(None, 2).unwrap(), 'A');
    }

    #[test]
    fn test_select_before_apply_fails() {
        let mut policy: RoundRobinPolicy<char> = RoundRobinPolicy::new();
        assert!(matches!(
            policy.select_operator(None, 0),
            Err(GeneticError::OperatorsNotApplied)
        ));
    }

    #[test]
    fn test_apply_empty_fails() {
        let mut policy: RoundRobinPolicy<char> = RoundRobinPolicy::new();
        assert!(matches!(
            policy.apply_operators(Vec::new()),
            Err(GeneticError::EmptyOperatorSet)
        ));
        assert!(policy.operators().is_empty());
    }
}
