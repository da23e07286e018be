//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Errors fall into three groups:
//!
//! - configuration errors, raised by constructors and builders before any
//!   epoch runs (`Configuration`),
//! - precondition errors, raised at the point of misuse (`OperatorsNotApplied`,
//!   `EmptyOperatorSet`, `TooManyOperators`, `MissingRandomSource`, `EmptyWheel`),
//! - domain errors, raised while an epoch runs (`InvalidChromosome`,
//!   `InvalidCouple`, `InvalidNumericValue`).
//!
//! None of them are retried internally. An error raised inside an epoch aborts
//! the run and is handed to the caller unchanged.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genepool::error::{GeneticError, Result};
//!
//! fn validate_percentage(value: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(GeneticError::Configuration(format!(
//!             "Percentage must be within [0, 1], got {}",
//!             value
//!         )));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(validate_percentage(0.5).is_ok());
//! assert!(validate_percentage(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genepool::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[i32]) -> genepool::error::Result<i32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the evolutionary engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a roulette wheel has no entries left to draw.
    #[error("Empty wheel error: Cannot spin a roulette wheel without entries")]
    EmptyWheel,

    /// Error that occurs when an operator selection policy receives no operators.
    #[error("Empty operator set: At least one operator must be applied")]
    EmptyOperatorSet,

    /// Error that occurs when an operator is requested before operators were applied.
    #[error("Operators not applied: Call apply_operators before selecting an operator")]
    OperatorsNotApplied,

    /// Error that occurs when a single-operator policy receives several operators.
    #[error("Too many operators: Expected exactly one operator, got {0}")]
    TooManyOperators(usize),

    /// Error that occurs when a stochastic operation is given no random source.
    #[error("Missing random source: {0}")]
    MissingRandomSource(String),

    /// Error that occurs when both members of a couple share the same identity.
    #[error("Invalid couple: {0}")]
    InvalidCouple(String),

    /// Error that occurs when a chromosome cannot take part in an operation.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when the run loop is driven in an invalid way.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for evolutionary engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genepool::error::{GeneticError, OptionExt};
///
/// let empty: Vec<f64> = Vec::new();
/// let result = empty.first().ok_or_else_genetic(|| GeneticError::EmptyPopulation);
/// assert_eq!(result, Err(GeneticError::EmptyPopulation));
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Validates that `value` lies within `[0, 1]`.
///
/// Shared by every strategy that takes a percentage or a probability.
pub(crate) fn ensure_unit_interval(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0.0, 1.0], got {}",
            name, value
        )));
    }
    Ok(value)
}
