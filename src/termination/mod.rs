//! # Termination
//!
//! Predicates deciding when a run stops. The runner builds a [`RunState`] after
//! every epoch and hands it to its [`TerminationEvaluator`], which stops the run
//! as soon as any strategy says so.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use genepool::termination::{RunState, Termination, TerminationEvaluator, TerminationStrategy};
//! use genepool::error::Result;
//!
//! fn main() -> Result<()> {
//!     let mut evaluator = TerminationEvaluator::new(vec![
//!         Termination::epoch_length(100)?,
//!         Termination::target_fitness(42.0)?,
//!     ])?;
//!
//!     assert!(!evaluator.should_terminate(&RunState::new(10, Duration::ZERO, 7.0)));
//!     assert!(evaluator.should_terminate(&RunState::new(11, Duration::ZERO, 42.0)));
//!     Ok(())
//! }
//! ```
pub mod run_state;
pub mod stagnation;

use std::time::Duration;

use tracing::debug;

use crate::error::{GeneticError, Result};

pub use run_state::RunState;
pub use stagnation::StagnationTermination;

/// Trait for predicates over the state of a run.
pub trait TerminationStrategy {
    /// Returns `true` when the run should stop after the epoch described by `state`.
    fn should_terminate(&mut self, state: &RunState) -> bool;
}

/// The closed set of termination strategies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TerminationConfig"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// Stops once the given number of epochs completed.
    EpochLength(usize),
    /// Stops once the run took at least the given time.
    Duration(Duration),
    /// Stops once the highest fitness reaches the target.
    TargetFitness(f64),
    /// Stops once the highest fitness stopped improving.
    Stagnation(StagnationTermination),
}

impl Termination {
    /// # Errors
    ///
    /// Returns a configuration error if `epochs` is zero.
    pub fn epoch_length(epochs: usize) -> Result<Self> {
        if epochs == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of epochs must be positive".to_string(),
            ));
        }
        Ok(Self::EpochLength(epochs))
    }

    /// # Errors
    ///
    /// Returns a configuration error if `limit` is zero.
    pub fn duration(limit: Duration) -> Result<Self> {
        if limit.is_zero() {
            return Err(GeneticError::Configuration(
                "Maximum duration must be positive".to_string(),
            ));
        }
        Ok(Self::Duration(limit))
    }

    /// # Errors
    ///
    /// Returns a configuration error if `target` is not finite.
    pub fn target_fitness(target: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Target fitness must be finite, got {}",
                target
            )));
        }
        Ok(Self::TargetFitness(target))
    }

    /// # Errors
    ///
    /// See [`StagnationTermination::new`].
    pub fn stagnation(window: usize, min_improvement: f64) -> Result<Self> {
        Ok(Self::Stagnation(StagnationTermination::new(
            window,
            min_improvement,
        )?))
    }
}

impl TerminationStrategy for Termination {
    fn should_terminate(&mut self, state: &RunState) -> bool {
        match self {
            Self::EpochLength(epochs) => state.epoch >= *epochs,
            Self::Duration(limit) => state.elapsed >= *limit,
            Self::TargetFitness(target) => state.highest_fitness >= *target,
            Self::Stagnation(strategy) => strategy.should_terminate(state),
        }
    }
}

/// Stops a run when any of its strategies fires.
///
/// Every strategy sees every snapshot, so stateful strategies keep an accurate
/// history even when another strategy fires first.
#[derive(Debug, Clone)]
pub struct TerminationEvaluator {
    strategies: Vec<Termination>,
}

impl TerminationEvaluator {
    /// # Errors
    ///
    /// Returns a configuration error if `strategies` is empty.
    pub fn new(strategies: Vec<Termination>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(GeneticError::Configuration(
                "At least one termination strategy is required".to_string(),
            ));
        }
        Ok(Self { strategies })
    }

    pub fn strategies(&self) -> &[Termination] {
        &self.strategies
    }
}

impl TerminationStrategy for TerminationEvaluator {
    fn should_terminate(&mut self, state: &RunState) -> bool {
        let mut terminate = false;
        for strategy in &mut self.strategies {
            if strategy.should_terminate(state) {
                debug!(epoch = state.epoch, ?strategy, "termination strategy fired");
                terminate = true;
            }
        }
        terminate
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum TerminationConfig {
    EpochLength(usize),
    Duration(Duration),
    TargetFitness(f64),
    Stagnation(StagnationTermination),
}

#[cfg(feature = "serde")]
impl TryFrom<TerminationConfig> for Termination {
    type Error = GeneticError;

    fn try_from(config: TerminationConfig) -> Result<Self> {
        match config {
            TerminationConfig::EpochLength(epochs) => Self::epoch_length(epochs),
            TerminationConfig::Duration(limit) => Self::duration(limit),
            TerminationConfig::TargetFitness(target) => Self::target_fitness(target),
            TerminationConfig::Stagnation(stagnation) => Ok(Self::Stagnation(stagnation)),
        }
    }
}
