use std::time::Instant;

use tracing::{debug, info, trace};

use super::builder::RunnerBuilder;
use super::options::{LogLevel, RunnerOptions};
use crate::chromosome::Chromosome;
use crate::crossover::{Crossover, CrossoverStrategy};
use crate::error::{GeneticError, OptionExt, Result};
use crate::operators::{OperatorSelection, OperatorSelectionPolicy};
use crate::population::{fittest, highest_fitness};
use crate::replacement::{Replacement, ReplacementStrategy};
use crate::rng::RandomNumberGenerator;
use crate::selection::{CoupleSelection, SelectionStrategy};
use crate::termination::{RunState, TerminationEvaluator, TerminationStrategy};

/// Lifecycle of a [`Runner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// Built, no epoch evaluated yet.
    Initialized,
    /// Evaluating the given epoch, counted from zero.
    Evaluating { epoch: usize },
    /// A termination strategy fired. The runner cannot run again.
    Terminated,
}

/// Drives a population through epochs until a termination strategy fires.
///
/// Each epoch selects couples, crosses them over, mutates the offspring and
/// merges them back through a replacement strategy. When several strategies are
/// registered for a phase, an operator selection policy picks one per epoch and
/// is rewarded with the improvement of the highest fitness.
#[derive(Debug, Clone)]
pub struct Runner<C: Chromosome> {
    population: Vec<C>,
    parent_selection: OperatorSelection<CoupleSelection>,
    crossover: OperatorSelection<Crossover>,
    replacement: OperatorSelection<Replacement>,
    termination: TerminationEvaluator,
    options: RunnerOptions,
    state: RunnerState,
    started_at: Option<Instant>,
}

impl<C: Chromosome> Runner<C> {
    pub(crate) fn new(
        population: Vec<C>,
        parent_selection: OperatorSelection<CoupleSelection>,
        crossover: OperatorSelection<Crossover>,
        replacement: OperatorSelection<Replacement>,
        termination: TerminationEvaluator,
        options: RunnerOptions,
    ) -> Self {
        Self {
            population,
            parent_selection,
            crossover,
            replacement,
            termination,
            options,
            state: RunnerState::Initialized,
            started_at: None,
        }
    }

    /// Returns a builder for configuring a runner.
    pub fn builder() -> RunnerBuilder<C> {
        RunnerBuilder::new()
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn population(&self) -> &[C] {
        &self.population
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    pub fn parent_selection_policy(&self) -> &OperatorSelection<CoupleSelection> {
        &self.parent_selection
    }

    pub fn crossover_policy(&self) -> &OperatorSelection<Crossover> {
        &self.crossover
    }

    pub fn replacement_policy(&self) -> &OperatorSelection<Replacement> {
        &self.replacement
    }

    /// Runs epochs until a termination strategy fires.
    ///
    /// # Returns
    ///
    /// The fittest chromosome of the final population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Evolution` if the runner already terminated.
    /// Any error raised by a strategy during an epoch aborts the run and is
    /// returned unchanged.
    pub fn run(&mut self, rng: &mut RandomNumberGenerator) -> Result<C> {
        match self.state {
            RunnerState::Terminated => {
                return Err(GeneticError::Evolution(
                    "Runner already terminated".to_string(),
                ))
            }
            RunnerState::Initialized => {
                self.state = RunnerState::Evaluating { epoch: 0 };
                self.started_at.get_or_insert_with(Instant::now);
            }
            RunnerState::Evaluating { .. } => {}
        }

        if self.options.get_log_level() != LogLevel::None {
            info!(
                population = self.population.len(),
                parent_selection = self.parent_selection.name(),
                crossover = self.crossover.name(),
                replacement = self.replacement.name(),
                "run started"
            );
        }

        while !self.run_epoch(rng)? {}

        fittest(&self.population)
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Evaluates one epoch and returns whether the run terminated.
    fn run_epoch(&mut self, rng: &mut RandomNumberGenerator) -> Result<bool> {
        let RunnerState::Evaluating { epoch } = self.state else {
            return Err(GeneticError::Evolution(format!(
                "Cannot evaluate an epoch in state {:?}",
                self.state
            )));
        };
        let best_before = highest_fitness(&self.population);

        let selection = self.parent_selection.select_operator(Some(&mut *rng), epoch)?;
        let couples = selection.select_couples(
            &self.population,
            self.options.couples_for(self.population.len()),
            epoch,
            rng,
        )?;

        let crossover = self.crossover.select_operator(Some(&mut *rng), epoch)?;
        let mut offspring = Vec::with_capacity(couples.len() * 2);
        for couple in &couples {
            offspring.extend(crossover.crossover(couple, rng)?);
        }
        trace!(epoch, couples = couples.len(), offspring = offspring.len(), "offspring bred");

        for child in &mut offspring {
            child.mutate(rng);
        }
        for survivor in &mut self.population {
            survivor.increment_age();
        }

        let replacement = self.replacement.select_operator(Some(&mut *rng), epoch)?;
        let population = std::mem::take(&mut self.population);
        self.population = replacement.replace(population, offspring, epoch, rng)?;
        if self.population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let best_after = highest_fitness(&self.population);
        let reward = (best_after - best_before).max(0.0);
        self.parent_selection.reward(reward);
        self.crossover.reward(reward);
        self.replacement.reward(reward);

        self.log_epoch(epoch, best_after);

        let snapshot = RunState::new(epoch + 1, self.elapsed(), best_after);
        if self.termination.should_terminate(&snapshot) {
            self.state = RunnerState::Terminated;
            if self.options.get_log_level() != LogLevel::None {
                info!(
                    epochs = snapshot.epoch,
                    elapsed_ms = snapshot.elapsed.as_millis() as u64,
                    highest_fitness = best_after,
                    "run terminated"
                );
            }
            return Ok(true);
        }

        self.state = RunnerState::Evaluating { epoch: epoch + 1 };
        Ok(false)
    }

    fn elapsed(&self) -> std::time::Duration {
        self.started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default()
    }

    fn log_epoch(&self, epoch: usize, highest_fitness: f64) {
        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => {
                info!(epoch, highest_fitness, population = self.population.len(), "epoch");
            }
            LogLevel::Verbose => {
                info!(epoch, highest_fitness, population = self.population.len(), "epoch");
                for chromosome in &self.population {
                    debug!(
                        epoch,
                        id = %chromosome.id(),
                        age = chromosome.age(),
                        fitness = chromosome.calculate_fitness(),
                        genes = ?chromosome.genes(),
                        "chromosome"
                    );
                }
            }
        }
    }

    /// Puts the runner in the middle of a run, as if `epoch` epochs had been
    /// evaluated since `started_at`.
    #[cfg(test)]
    pub(crate) fn resume_at(&mut self, epoch: usize, started_at: Instant) {
        self.state = RunnerState::Evaluating { epoch };
        self.started_at = Some(started_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossover::OnePointCrossover;
    use crate::replacement::{ElitistSurvivorReplacement, GenerationalReplacement};
    use crate::selection::{RandomSelection, TournamentSelection};
    use crate::termination::Termination;
    use crate::testing::TestChromosome;
    use std::time::Duration;

    fn population() -> Vec<TestChromosome> {
        (0..8).map(|i| TestChromosome::new(vec![i, 0, 0, 0])).collect()
    }

    fn keep_everyone(termination: Termination) -> Runner<TestChromosome> {
        Runner::builder()
            .with_population(population())
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::ElitistSurvivor(
                ElitistSurvivorReplacement::new(1.0).unwrap(),
            ))
            .with_termination(termination)
            .build()
            .unwrap()
    }

    #[test]
    fn test_epoch_length_runs_exact_epochs() {
        let mut runner = keep_everyone(Termination::epoch_length(3).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(1);

        runner.run(&mut rng).unwrap();

        assert_eq!(runner.state(), RunnerState::Terminated);
        // Survivors age once per epoch
        assert!(runner.population().iter().all(|c| c.age() == 3));
    }

    #[test]
    fn test_resumed_runner_finishes_remaining_epochs() {
        let mut runner = keep_everyone(Termination::epoch_length(5).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(2);

        runner.resume_at(3, Instant::now());
        runner.run(&mut rng).unwrap();

        assert!(runner.population().iter().all(|c| c.age() == 2));
    }

    #[test]
    fn test_duration_termination_uses_elapsed_time() {
        let mut runner = keep_everyone(Termination::duration(Duration::from_secs(1)).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(3);

        let started_at = Instant::now()
            .checked_sub(Duration::from_secs(2))
            .unwrap_or_else(Instant::now);
        runner.resume_at(0, started_at);
        runner.run(&mut rng).unwrap();

        assert_eq!(runner.state(), RunnerState::Terminated);
    }

    #[test]
    fn test_terminated_runner_refuses_to_run() {
        let mut runner = keep_everyone(Termination::epoch_length(1).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(4);

        runner.run(&mut rng).unwrap();
        assert!(matches!(
            runner.run(&mut rng),
            Err(GeneticError::Evolution(_))
        ));
    }

    #[test]
    fn test_returns_fittest_chromosome() {
        let mut runner = Runner::builder()
            .with_population(population())
            .with_parent_selection(CoupleSelection::Tournament(
                TournamentSelection::new(3, false).unwrap(),
            ))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::ElitistSurvivor(
                ElitistSurvivorReplacement::new(0.25).unwrap(),
            ))
            .with_termination(Termination::epoch_length(20).unwrap())
            .build()
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let best = runner.run(&mut rng).unwrap();

        assert_eq!(best.calculate_fitness(), highest_fitness(runner.population()));
        // The elites survive, so the best of the start is never lost
        assert!(best.calculate_fitness() >= 7.0);
    }

    #[test]
    fn test_generational_run_replaces_everyone() {
        let initial = population();
        let initial_ids: Vec<_> = initial.iter().map(|c| c.id()).collect();
        let mut runner = Runner::builder()
            .with_population(initial)
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::Generational(GenerationalReplacement))
            .with_termination(Termination::epoch_length(1).unwrap())
            .build()
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(6);

        runner.run(&mut rng).unwrap();

        // Four couples yield eight children, all of them new
        assert_eq!(runner.population().len(), 8);
        assert!(runner
            .population()
            .iter()
            .all(|c| !initial_ids.contains(&c.id()) && c.age() == 0));
    }

    #[test]
    fn test_crossover_error_aborts_run() {
        let population = vec![TestChromosome::new(vec![]), TestChromosome::new(vec![])];
        let mut runner = Runner::builder()
            .with_population(population)
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::Generational(GenerationalReplacement))
            .with_termination(Termination::epoch_length(10).unwrap())
            .build()
            .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(7);

        assert!(matches!(
            runner.run(&mut rng),
            Err(GeneticError::InvalidChromosome(_))
        ));
    }
}
