use tracing::{debug, trace, warn};

use super::{require_non_empty, require_rng, OperatorRecord, OperatorSelectionPolicy};
use crate::error::{ensure_unit_interval, GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::sampling::RouletteWheel;

const DEFAULT_LEARNING_RATE: f64 = 0.3;
const DEFAULT_ADAPTATION_RATE: f64 = 0.3;
const DEFAULT_MIN_PROBABILITY: f64 = 0.05;

/// Running estimate kept for each operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitEstimate {
    /// Current selection probability.
    pub probability: f64,
    /// Exponentially smoothed reward.
    pub quality: f64,
}

/// Adaptive pursuit operator selection.
///
/// Each operator keeps a reward estimate and a selection probability. When a
/// reward comes in for the last selected operator, its estimate moves toward the
/// reward by the adaptation rate. The operator with the strictly highest estimate
/// then has its probability pulled toward `p_max` by the learning rate, while
/// every other probability is pulled toward `p_min`.
///
/// With `K` operators, `p_max = 1 - (K - 1) * p_min`. Probabilities always sum to
/// one and stay within `[p_min, p_max]`, so no operator stops being explored.
///
/// # Examples
///
/// ```
/// use genepool::operators::{AdaptivePursuitPolicy, OperatorRecord, OperatorSelectionPolicy};
/// use genepool::rng::RandomNumberGenerator;
/// use genepool::error::Result;
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(3);
///     let mut policy = AdaptivePursuitPolicy::new(0.5, 0.5, 0.1)?;
///     policy.apply_operators(vec![OperatorRecord::new("swap"), OperatorRecord::new("shift")])?;
///
///     for epoch in 0..10 {
///         let reward = if *policy.select_operator(Some(&mut rng), epoch)? == "swap" { 1.0 } else { 0.0 };
///         policy.reward(reward);
///     }
///
///     let total: f64 = policy.probabilities().iter().sum();
///     assert!((total - 1.0).abs() < 1e-9);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdaptivePursuitPolicy<T> {
    learning_rate: f64,
    adaptation_rate: f64,
    min_probability: f64,
    operators: Option<Vec<OperatorRecord<T>>>,
    estimates: Vec<PursuitEstimate>,
    last_selected: Option<usize>,
}

impl<T> AdaptivePursuitPolicy<T> {
    /// Creates a new adaptive pursuit policy.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - Fraction of the distance to `p_max`/`p_min` covered per update, in `(0, 1]`.
    /// * `adaptation_rate` - Smoothing factor of the reward estimates, in `(0, 1]`.
    /// * `min_probability` - Probability floor of every operator, in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any parameter is out of range.
    pub fn new(learning_rate: f64, adaptation_rate: f64, min_probability: f64) -> Result<Self> {
        ensure_unit_interval(learning_rate, "Learning rate")?;
        ensure_unit_interval(adaptation_rate, "Adaptation rate")?;
        ensure_unit_interval(min_probability, "Minimum probability")?;
        if learning_rate == 0.0 || adaptation_rate == 0.0 {
            return Err(GeneticError::Configuration(
                "Learning rate and adaptation rate must be greater than 0".to_string(),
            ));
        }
        if min_probability == 0.0 || min_probability >= 1.0 {
            return Err(GeneticError::Configuration(
                "Minimum probability must be greater than 0 and lower than 1".to_string(),
            ));
        }

        Ok(Self {
            learning_rate,
            adaptation_rate,
            min_probability,
            operators: None,
            estimates: Vec::new(),
            last_selected: None,
        })
    }

    pub fn min_probability(&self) -> f64 {
        self.min_probability
    }

    /// Probability ceiling for the currently applied operator set.
    pub fn max_probability(&self) -> f64 {
        let others = self.estimates.len().saturating_sub(1) as f64;
        1.0 - others * self.min_probability
    }

    /// Current selection probabilities, in operator order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.estimates.iter().map(|e| e.probability).collect()
    }

    pub fn estimates(&self) -> &[PursuitEstimate] {
        &self.estimates
    }

    /// Index of the operator with the strictly highest quality, if any.
    fn winner(&self) -> Option<usize> {
        let best = self
            .estimates
            .iter()
            .map(|e| e.quality)
            .fold(f64::NEG_INFINITY, f64::max);
        if self.estimates.iter().all(|e| e.quality == best) {
            return None;
        }
        self.estimates.iter().position(|e| e.quality == best)
    }

    fn pursue(&mut self, winner: usize) {
        let p_min = self.min_probability;
        let p_max = self.max_probability();
        let beta = self.learning_rate;

        for (i, estimate) in self.estimates.iter_mut().enumerate() {
            let target = if i == winner { p_max } else { p_min };
            estimate.probability += beta * (target - estimate.probability);
            estimate.probability = estimate.probability.clamp(p_min, p_max);
        }
    }
}

impl<T> Default for AdaptivePursuitPolicy<T> {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            adaptation_rate: DEFAULT_ADAPTATION_RATE,
            min_probability: DEFAULT_MIN_PROBABILITY,
            operators: None,
            estimates: Vec::new(),
            last_selected: None,
        }
    }
}

impl<T> OperatorSelectionPolicy<T> for AdaptivePursuitPolicy<T> {
    fn apply_operators(&mut self, operators: Vec<OperatorRecord<T>>) -> Result<()> {
        require_non_empty(&operators)?;

        let count = operators.len() as f64;
        if self.min_probability * count >= 1.0 && operators.len() > 1 {
            return Err(GeneticError::Configuration(format!(
                "Minimum probability {} is too high for {} operators",
                self.min_probability,
                operators.len()
            )));
        }

        self.estimates = vec![
            PursuitEstimate {
                probability: 1.0 / count,
                quality: 0.0,
            };
            operators.len()
        ];
        self.operators = Some(operators);
        self.last_selected = None;
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
        let rng = require_rng(rng, "Adaptive pursuit")?;

        let wheel = RouletteWheel::new(
            self.estimates
                .iter()
                .enumerate()
                .map(|(i, e)| (i, e.probability))
                .collect(),
        )?;
        let idx = *wheel.spin(rng)?;
        self.last_selected = Some(idx);
        trace!(epoch, operator = idx, "adaptive pursuit selected operator");

        Ok(&operators[idx].operator)
    }

    fn reward(&mut self, reward: f64) {
        let Some(idx) = self.last_selected else {
            return;
        };
        if !reward.is_finite() {
            warn!(reward, "ignoring non-finite operator reward");
            return;
        }

        let alpha = self.adaptation_rate;
        let estimate = &mut self.estimates[idx];
        estimate.quality += alpha * (reward - estimate.quality);

        if let Some(winner) = self.winner() {
            self.pursue(winner);
        }
        debug!(
            operator = idx,
            reward,
            probabilities = ?self.probabilities(),
            "adaptive pursuit updated"
        );
    }

    fn operators(&self) -> &[OperatorRecord<T>] {
        self.operators.as_deref().unwrap_or(&[])
    }
}
