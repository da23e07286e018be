use super::{require_non_empty, OperatorRecord, OperatorSelectionPolicy};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Always returns the one registered operator.
#[derive(Debug, Clone)]
pub struct FirstChoicePolicy<T> {
    operators: Option<Vec<OperatorRecord<T>>>,
}

impl<T> FirstChoicePolicy<T> {
    pub fn new() -> Self {
        Self { operators: None }
    }
}

impl<T> Default for FirstChoicePolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperatorSelectionPolicy<T> for FirstChoicePolicy<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        require_non_empty(&operators)?;
        if operators.len() > 1 {
            return Err(GeneticError::TooManyOperators(operators.len()));
        }
        self.operators = Some(operators);
        Ok(())
    }

    fn select_operator(
        &mut self,
        _rng: Option<&mut RandomNumberGenerator>,
        _epoch: usize,
    ) -> Result<&T> {
        self.operators
            .as_ref()
            .and_then(|operators| operators.first())
            .map(|record| &record.operator)
            .ok_or(GeneticError::OperatorsNotApplied)
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        self.operators.as_deref().unwrap_or(&[])
    }
}
