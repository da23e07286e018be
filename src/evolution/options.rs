//! # RunnerOptions
//!
//! The `RunnerOptions` struct holds the knobs of the run loop that are not
//! strategies: how many couples are formed per epoch and how much the runner
//! logs.
//!
//! ## Example
//!
//! ```rust
//! use genepool::evolution::options::{LogLevel, RunnerOptions};
//!
//! // Create a new RunnerOptions instance with custom parameters
//! let custom_options = RunnerOptions::new(Some(25), LogLevel::Minimal);
//! assert_eq!(custom_options.couples_for(100), 25);
//!
//! // Default options form half as many couples as there are members
//! let default_options = RunnerOptions::default();
//! assert_eq!(default_options.couples_for(100), 50);
//! ```
//!
//! ## Log levels
//!
//! - `Verbose`: one `info` event per epoch plus one `debug` event per chromosome.
//! - `Minimal`: one `info` event per epoch.
//! - `None`: no per-epoch events.
//!
//! The events are emitted through `tracing`; installing a subscriber is up to
//! the application.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Couples formed per epoch, half the population when unset.
    number_of_couples: Option<usize>,
    log_level: LogLevel,
}

impl RunnerOptions {
    pub fn new(number_of_couples: Option<usize>, log_level: LogLevel) -> Self {
        Self {
            number_of_couples,
            log_level,
        }
    }

    pub fn get_number_of_couples(&self) -> Option<usize> {
        self.number_of_couples
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Number of couples to request from a population of `population_size`.
    ///
    /// Never lower than one.
    pub fn couples_for(&self, population_size: usize) -> usize {
        self.number_of_couples
            .unwrap_or(population_size / 2)
            .max(1)
    }

    /// Sets the number of couples per epoch.
    pub fn set_number_of_couples(&mut self, number_of_couples: Option<usize>) {
        self.number_of_couples = number_of_couples;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating a `RunnerOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genepool::evolution::options::{LogLevel, RunnerOptions};
    ///
    /// let options = RunnerOptions::builder()
    ///     .number_of_couples(10)
    ///     .log_level(LogLevel::Verbose)
    ///     .build();
    ///
    /// assert_eq!(options.get_number_of_couples(), Some(10));
    /// ```
    pub fn builder() -> RunnerOptionsBuilder {
        RunnerOptionsBuilder::default()
    }
}

/// Builder for `RunnerOptions`.
#[derive(Debug, Clone, Default)]
pub struct RunnerOptionsBuilder {
    number_of_couples: Option<usize>,
    log_level: Option<LogLevel>,
}

impl RunnerOptionsBuilder {
    /// Sets the number of couples per epoch.
    pub fn number_of_couples(mut self, value: usize) -> Self {
        self.number_of_couples = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn build(self) -> RunnerOptions {
        RunnerOptions {
            number_of_couples: self.number_of_couples,
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}
