//! # Operator Selection
//!
//! When several strategies are registered for the same phase of the run loop, an
//! operator selection policy decides which one runs in a given epoch. Every policy
//! implements [`OperatorSelectionPolicy`], and [`OperatorSelection`] is the closed
//! set of policies the runner dispatches through.
//!
//! ## Example
//!
//! ```rust
//! use genepool::operators::{OperatorRecord, OperatorSelectionPolicy, RoundRobinPolicy};
//! use genepool::error::Result;
//!
//! fn main() -> Result<()> {
//!     let mut policy = RoundRobinPolicy::new();
//!     policy.apply_operators(vec![OperatorRecord::new("a"), OperatorRecord::new("b")])?;
//!
//!     assert_eq!(*policy.select_operator(None, 0)?, "a");
//!     assert_eq!(*policy.select_operator(None, 1)?, "b");
//!     assert_eq!(*policy.select_operator(None, 2)?, "a");
//!     Ok(())
//! }
//! ```
pub mod adaptive_pursuit;
pub mod custom_weight;
pub mod first_choice;
pub mod random_choice;
pub mod round_robin;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use adaptive_pursuit::AdaptivePursuitPolicy;
pub use custom_weight::CustomWeightPolicy;
pub use first_choice::FirstChoicePolicy;
pub use random_choice::RandomChoicePolicy;
pub use round_robin::RoundRobinPolicy;

/// A registered operator together with its user-set weight.
///
/// A custom weight of `0.0` means the weight is unset.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorRecord<T> {
    pub operator: T,
    pub custom_weight: f64,
}

impl<T> OperatorRecord<T> {
    pub fn new(operator: T) -> Self {
        Self {
            operator,
            custom_weight: 0.0,
        }
    }

    pub fn weighted(operator: T, custom_weight: f64) -> Self {
        Self {
            operator,
            custom_weight,
        }
    }
}

/// Trait for policies choosing one operator out of a registered set.
pub trait OperatorSelectionPolicy<T> {
    /// Registers the operators to choose from, replacing any previous set.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyOperatorSet` if `operators` is empty, and a
    /// configuration error if the policy cannot work with the given set.
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()>;

    /// Chooses the operator to use in `epoch`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::OperatorsNotApplied` if no operator set was applied,
    /// and `GeneticError::MissingRandomSource` if a stochastic policy gets `None`.
    fn select_operator(
        &mut self,
        rng: Option<&mut RandomNumberGenerator>,
        epoch: usize,
    ) -> Result<&T>;

    /// Reports how well the last selected operator performed.
    fn reward(&mut self, _reward: f64) {}

    /// The applied operators, empty before the first successful apply.
    fn operators(&self) -> &[OperatorRecord<T>];
}

/// The closed set of operator selection policies.
#[derive(Debug, Clone)]
pub enum OperatorSelection<T> {
    RoundRobin(RoundRobinPolicy<T>),
    RandomChoice(RandomChoicePolicy<T>),
    CustomWeight(CustomWeightPolicy<T>),
    FirstChoice(FirstChoicePolicy<T>),
    AdaptivePursuit(AdaptivePursuitPolicy<T>),
}

impl<T> OperatorSelection<T> {
    /// Picks a policy for `records` and applies them.
    ///
    /// A single operator gets [`FirstChoicePolicy`], a set where any operator has a
    /// custom weight gets [`CustomWeightPolicy`], and anything else gets
    /// [`AdaptivePursuitPolicy`] with default parameters.
    pub fn from_records(records: Vec<OperatorRecord<T>>) -> Result<Self> {
        let mut policy = if records.len() == 1 {
            Self::FirstChoice(FirstChoicePolicy::new())
        } else if records.iter().any(|record| record.custom_weight > 0.0) {
            Self::CustomWeight(CustomWeightPolicy::new())
        } else {
            Self::AdaptivePursuit(AdaptivePursuitPolicy::default())
        };
        policy.apply_operators(records)?;
        Ok(policy)
    }

    /// Short policy name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin(_) => "round_robin",
            Self::RandomChoice(_) => "random_choice",
            Self::CustomWeight(_) => "custom_weight",
            Self::FirstChoice(_) => "first_choice",
            Self::AdaptivePursuit(_) => "adaptive_pursuit",
        }
    }
}

impl<T> OperatorSelectionPolicy<T> for OperatorSelection<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        match self {
            Self::RoundRobin(policy) => policy.apply_operators(operators),
            Self::RandomChoice(policy) => policy.apply_operators(operators),
            Self::CustomWeight(policy) => policy.apply_operators(operators),
            Self::FirstChoice(policy) => policy.apply_operators(operators),
            Self::AdaptivePursuit(policy) => policy.apply_operators(operators),
        }
    }

    fn select_operator(
        &mut self,
        rng: Option<&mut RandomNumberGenerator>,
        epoch: usize,
    ) -> Result<&T> {
        match self {
            Self::RoundRobin(policy) => policy.select_operator(rng, epoch),
            Self::RandomChoice(policy) => policy.select_operator(rng, epoch),
            Self::CustomWeight(policy) => policy.select_operator(rng, epoch),
            Self::FirstChoice(policy) => policy.select_operator(rng, epoch),
            Self::AdaptivePursuit(policy) => policy.select_operator(rng, epoch),
        }
    }

    fn reward(&mut self, reward: f64) {
        match self {
            Self::RoundRobin(policy) => policy.reward(reward),
            Self::RandomChoice(policy) => policy.reward(reward),
            Self::CustomWeight(policy) => policy.reward(reward),
            Self::FirstChoice(policy) => policy.reward(reward),
            Self::AdaptivePursuit(policy) => policy.reward(reward),
        }
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        match self {
            Self::RoundRobin(policy) => policy.operators(),
            Self::RandomChoice(policy) => policy.operators(),
            Self::CustomWeight(policy) => policy.operators(),
            Self::FirstChoice(policy) => policy.operators(),
            Self::AdaptivePursuit(policy) => policy.operators(),
        }
    }
}

pub(crate) fn require_non_empty<T>(operators: &[OperatorRecord<T>]) -> Result<()> {
    if operators.is_empty() {
        return Err(GeneticError::EmptyOperatorSet);
    }
    Ok(())
}

pub(crate) fn require_rng<'r>(
    rng: Option<&'r mut RandomNumberGenerator>,
    policy: &str,
) -> Result<&'r mut RandomNumberGenerator> {
    rng.ok_or_else(|| {
        GeneticError::MissingRandomSource(format!(
            "{} policy requires a random number generator",
            policy
        ))
    })
}
