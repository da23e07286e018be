use tracing::trace;

use super::{require_non_empty, require_rng, OperatorRecord, OperatorSelectionPolicy};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

/// Picks an operator uniformly at random on every request.
#[derive(Debug, Clone)]
pub struct RandomChoicePolicy<T> {
    operators: Option<Vec<OperatorRecord<T>>>,
}

impl<T> RandomChoicePolicy<T> {
    pub fn new() -> Self {
        Self { operators: None }
    }
}

impl<T> Default for RandomChoicePolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperatorSelectionPolicy<T> for RandomChoicePolicy<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        require_non_empty(&operators)?;
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
        let rng = require_rng(rng, "Random choice")?;

        let wheel = RouletteWheel::uniform((0..operators.len()).collect())?;
        let idx = *wheel.spin(rng)?;
        trace!(epoch, operator = idx, "random choice selected operator");

        Ok(&operators[idx].operator)
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        self.operators.as_deref().unwrap_or(&[])
    }
}
