use std::collections::VecDeque;

use super::{RunState, TerminationStrategy};
use crate::error::{GeneticError, Result};

/// Stops a run once the highest fitness stops improving.
///
/// The strategy keeps the highest fitness of the last `window + 1` epochs. It
/// fires when the window is full and the latest value beats the oldest one by no
/// more than `min_improvement`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StagnationConfig"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StagnationTermination {
    window: usize,
    min_improvement: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    history: VecDeque<f64>,
}

impl StagnationTermination {
    /// # Errors
    ///
    /// Returns a configuration error if `window` is zero or `min_improvement` is
    /// negative or not finite.
    pub fn new(window: usize, min_improvement: f64) -> Result<Self> {
        if window == 0 {
            return Err(GeneticError::Configuration(
                "Stagnation window must be positive".to_string(),
            ));
        }
        if !min_improvement.is_finite() || min_improvement < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Minimum improvement must be a non-negative number, got {}",
                min_improvement
            )));
        }
        Ok(Self {
            window,
            min_improvement,
            history: VecDeque::with_capacity(window + 1),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of snapshots currently buffered.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl TerminationStrategy for StagnationTermination {
    fn should_terminate(&mut self, state: &RunState) -> bool {
        self.history.push_back(state.highest_fitness);
        if self.history.len() > self.window + 1 {
            self.history.pop_front();
        }
        if self.history.len() <= self.window {
            return false;
        }

        match (self.history.front(), self.history.back()) {
            (Some(oldest), Some(latest)) => latest - oldest <= self.min_improvement,
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StagnationConfig {
    window: usize,
    min_improvement: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<StagnationConfig> for StagnationTermination {
    type Error = GeneticError;

    fn try_from(config: StagnationConfig) -> Result<Self> {
        Self::new(config.window, config.min_improvement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state(epoch: usize, highest_fitness: f64) -> RunState {
        RunState::new(epoch, Duration::ZERO, highest_fitness)
    }

    #[test]
    fn test_fires_after_flat_window() {
        let mut stagnation = StagnationTermination::new(3, 0.0).unwrap();

        assert!(!stagnation.should_terminate(&state(1, 1.0)));
        assert!(!stagnation.should_terminate(&state(2, 2.0)));
        assert!(!stagnation.should_terminate(&state(3, 2.0)));
        assert!(!stagnation.should_terminate(&state(4, 2.0)));
        assert!(stagnation.should_terminate(&state(5, 2.0)));
    }

    #[test]
    fn test_improvement_resets() {
        let mut stagnation = StagnationTermination::new(2, 0.5).unwrap();

        assert!(!stagnation.should_terminate(&state(1, 1.0)));
        assert!(!stagnation.should_terminate(&state(2, 1.2)));
        assert!(!stagnation.should_terminate(&state(3, 2.0)));
        assert!(!stagnation.should_terminate(&state(4, 2.3)));
        assert!(stagnation.should_terminate(&state(5, 2.4)));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut stagnation = StagnationTermination::new(2, 0.0).unwrap();
        for epoch in 0..10 {
            stagnation.should_terminate(&state(epoch, epoch as f64));
        }
        assert_eq!(stagnation.history_len(), 3);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(StagnationTermination::new(0, 0.0).is_err());
        assert!(StagnationTermination::new(3, -1.0).is_err());
    }
}
