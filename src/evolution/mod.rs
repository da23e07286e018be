//! # Evolution
//!
//! The run loop. A [`Runner`] is configured through a [`RunnerBuilder`] and
//! moves through the states of [`RunnerState`] until one of its termination
//! strategies fires.
pub mod builder;
pub mod options;
pub mod runner;

pub use builder::RunnerBuilder;
pub use options::{LogLevel, RunnerOptions, RunnerOptionsBuilder};
pub use runner::{Runner, RunnerState};
