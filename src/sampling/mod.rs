//! # Weighted Sampling
//!
//! The roulette wheel is the sampling primitive behind every stochastic
//! selection in the engine: parent selection, survivor elimination and operator
//! selection all build a wheel and spin it.
pub mod roulette_wheel;

pub use roulette_wheel::{RouletteWheel, WheelEntry};
