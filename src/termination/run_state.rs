use std::time::Duration;

/// Snapshot of a run taken at the end of an epoch.
///
/// A fresh snapshot is built for every epoch and handed to the termination
/// strategies by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunState {
    /// Number of epochs completed, including the one just evaluated.
    pub epoch: usize,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
    /// Highest fitness in the population.
    pub highest_fitness: f64,
}

impl RunState {
    pub fn new(epoch: usize, elapsed: Duration, highest_fitness: f64) -> Self {
        Self {
            epoch,
            elapsed,
            highest_fitness,
        }
    }
}
