use super::options::RunnerOptions;
use super::runner::Runner;
use crate::chromosome::Chromosome;
use crate::crossover::Crossover;
use crate::error::{GeneticError, Result};
use crate::operators::{OperatorRecord, OperatorSelection, OperatorSelectionPolicy};
use crate::replacement::Replacement;
use crate::selection::CoupleSelection;
use crate::termination::{Termination, TerminationEvaluator};

/// Fluent configuration for a [`Runner`].
///
/// Every phase takes one or more strategies. Unless a policy is given
/// explicitly, a phase with a single strategy always uses it, a phase where any
/// strategy carries a positive weight picks by those weights, and any other
/// phase learns its choice through adaptive pursuit.
///
/// # Example
///
/// ```rust
/// use genepool::crossover::{Crossover, OnePointCrossover, UniformCrossover};
/// use genepool::evolution::Runner;
/// use genepool::replacement::{Replacement, TournamentReplacement};
/// use genepool::selection::{CoupleSelection, RankSelection};
/// use genepool::termination::Termination;
/// # use genepool::chromosome::Chromosome;
/// # use genepool::rng::RandomNumberGenerator;
/// # use uuid::Uuid;
/// # #[derive(Clone, Debug)]
/// # struct Ones { id: Uuid, genes: Vec<u8> }
/// # impl Chromosome for Ones {
/// #     type Gene = u8;
/// #     fn id(&self) -> Uuid { self.id }
/// #     fn age(&self) -> usize { 0 }
/// #     fn increment_age(&mut self) {}
/// #     fn genes(&self) -> &[u8] { &self.genes }
/// #     fn offspring(&self, genes: Vec<u8>) -> Self { Self { id: Uuid::new_v4(), genes } }
/// #     fn calculate_fitness(&self) -> f64 { self.genes.iter().map(|&g| g as f64).sum() }
/// #     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
/// #         let i = rng.gen_index(self.genes.len());
/// #         self.genes[i] = 1 - self.genes[i];
/// #     }
/// # }
///
/// # fn main() -> genepool::error::Result<()> {
/// let population: Vec<Ones> = (0..10)
///     .map(|_| Ones { id: Uuid::new_v4(), genes: vec![0; 8] })
///     .collect();
///
/// let mut runner = Runner::builder()
///     .with_population(population)
///     .with_parent_selection(CoupleSelection::Rank(RankSelection))
///     .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
///     .with_crossover(Crossover::Uniform(UniformCrossover::default()))
///     .with_replacement(Replacement::Tournament(TournamentReplacement::new(3, false)?))
///     .with_termination(Termination::epoch_length(30)?)
///     .with_termination(Termination::target_fitness(8.0)?)
///     .build()?;
///
/// let best = runner.run(&mut RandomNumberGenerator::from_seed(3))?;
/// assert!(best.calculate_fitness() > 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RunnerBuilder<C: Chromosome> {
    population: Vec<C>,
    parent_selection: Vec<OperatorRecord<CoupleSelection>>,
    crossover: Vec<OperatorRecord<Crossover>>,
    replacement: Vec<OperatorRecord<Replacement>>,
    terminations: Vec<Termination>,
    options: RunnerOptions,
    parent_selection_policy: Option<OperatorSelection<CoupleSelection>>,
    crossover_policy: Option<OperatorSelection<Crossover>>,
    replacement_policy: Option<OperatorSelection<Replacement>>,
}

impl<C: Chromosome> RunnerBuilder<C> {
    pub fn new() -> Self {
        Self {
            population: Vec::new(),
            parent_selection: Vec::new(),
            crossover: Vec::new(),
            replacement: Vec::new(),
            terminations: Vec::new(),
            options: RunnerOptions::default(),
            parent_selection_policy: None,
            crossover_policy: None,
            replacement_policy: None,
        }
    }

    pub fn with_population(mut self, population: Vec<C>) -> Self {
        self.population = population;
        self
    }

    pub fn with_parent_selection(mut self, selection: CoupleSelection) -> Self {
        self.parent_selection.push(OperatorRecord::new(selection));
        self
    }

    pub fn with_weighted_parent_selection(
        mut self,
        selection: CoupleSelection,
        weight: f64,
    ) -> Self {
        self.parent_selection
            .push(OperatorRecord::weighted(selection, weight));
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover.push(OperatorRecord::new(crossover));
        self
    }

    pub fn with_weighted_crossover(mut self, crossover: Crossover, weight: f64) -> Self {
        self.crossover.push(OperatorRecord::weighted(crossover, weight));
        self
    }

    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement.push(OperatorRecord::new(replacement));
        self
    }

    pub fn with_weighted_replacement(mut self, replacement: Replacement, weight: f64) -> Self {
        self.replacement
            .push(OperatorRecord::weighted(replacement, weight));
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.terminations.push(termination);
        self
    }

    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses `policy` to choose among the parent selection strategies.
    pub fn with_parent_selection_policy(
        mut self,
        policy: OperatorSelection<CoupleSelection>,
    ) -> Self {
        self.parent_selection_policy = Some(policy);
        self
    }

    /// Uses `policy` to choose among the crossover operators.
    pub fn with_crossover_policy(mut self, policy: OperatorSelection<Crossover>) -> Self {
        self.crossover_policy = Some(policy);
        self
    }

    /// Uses `policy` to choose among the replacement strategies.
    pub fn with_replacement_policy(mut self, policy: OperatorSelection<Replacement>) -> Self {
        self.replacement_policy = Some(policy);
        self
    }

    /// Builds the runner.
    ///
    /// # Errors
    ///
    /// - `GeneticError::EmptyPopulation` if no member was given.
    /// - `GeneticError::Configuration` if a phase has no strategy, no
    ///   termination was given, the number of couples is zero, or a policy
    ///   rejects its strategies.
    pub fn build(self) -> Result<Runner<C>> {
        if self.population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if self.options.get_number_of_couples() == Some(0) {
            return Err(GeneticError::Configuration(
                "Number of couples must be positive".to_string(),
            ));
        }

        let parent_selection = resolve_policy(
            "parent selection",
            self.parent_selection,
            self.parent_selection_policy,
        )?;
        let crossover = resolve_policy("crossover", self.crossover, self.crossover_policy)?;
        let replacement =
            resolve_policy("replacement", self.replacement, self.replacement_policy)?;
        let termination = TerminationEvaluator::new(self.terminations)?;

        Ok(Runner::new(
            self.population,
            parent_selection,
            crossover,
            replacement,
            termination,
            self.options,
        ))
    }
}

impl<C: Chromosome> Default for RunnerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_policy<T>(
    phase: &str,
    records: Vec<OperatorRecord<T>>,
    policy: Option<OperatorSelection<T>>,
) -> Result<OperatorSelection<T>> {
    if records.is_empty() {
        return Err(GeneticError::Configuration(format!(
            "No {} strategy specified",
            phase
        )));
    }
    if let Some(record) = records
        .iter()
        .find(|record| !record.custom_weight.is_finite() || record.custom_weight < 0.0)
    {
        return Err(GeneticError::Configuration(format!(
            "Weight of a {} strategy must be finite and non-negative, got {}",
            phase, record.custom_weight
        )));
    }

    match policy {
        Some(mut policy) => {
            policy.apply_operators(records)?;
            Ok(policy)
        }
        None => OperatorSelection::from_records(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossover::{OnePointCrossover, UniformCrossover};
    use crate::operators::RoundRobinPolicy;
    use crate::replacement::RandomReplacement;
    use crate::selection::{RandomSelection, RankSelection};
    use crate::testing::TestChromosome;

    fn complete() -> RunnerBuilder<TestChromosome> {
        RunnerBuilder::new()
            .with_population(TestChromosome::population(&[1.0, 2.0, 3.0]))
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::Random(RandomReplacement))
            .with_termination(Termination::epoch_length(5).unwrap())
    }

    #[test]
    fn test_single_strategy_uses_first_choice() {
        let runner = complete().build().unwrap();
        assert_eq!(runner.parent_selection_policy().name(), "first_choice");
    }

    #[test]
    fn test_unweighted_strategies_use_adaptive_pursuit() {
        let runner = complete()
            .with_crossover(Crossover::Uniform(UniformCrossover::default()))
            .build()
            .unwrap();
        assert_eq!(runner.crossover_policy().name(), "adaptive_pursuit");
    }

    #[test]
    fn test_weighted_strategies_use_custom_weights() {
        let runner = complete()
            .with_weighted_parent_selection(CoupleSelection::Rank(RankSelection), 2.0)
            .build()
            .unwrap();
        assert_eq!(runner.parent_selection_policy().name(), "custom_weight");
    }

    #[test]
    fn test_explicit_policy_wins() {
        let runner = complete()
            .with_replacement(Replacement::Random(RandomReplacement))
            .with_replacement_policy(OperatorSelection::RoundRobin(RoundRobinPolicy::new()))
            .build()
            .unwrap();
        assert_eq!(runner.replacement_policy().name(), "round_robin");
        assert_eq!(runner.replacement_policy().operators().len(), 2);
    }

    #[test]
    fn test_missing_pieces() {
        let missing_crossover = RunnerBuilder::<TestChromosome>::new()
            .with_population(TestChromosome::population(&[1.0]))
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_replacement(Replacement::Random(RandomReplacement))
            .with_termination(Termination::epoch_length(1).unwrap())
            .build();
        assert!(matches!(missing_crossover, Err(GeneticError::Configuration(_))));

        let missing_termination = RunnerBuilder::<TestChromosome>::new()
            .with_population(TestChromosome::population(&[1.0]))
            .with_parent_selection(CoupleSelection::Random(RandomSelection))
            .with_crossover(Crossover::OnePoint(OnePointCrossover::new()))
            .with_replacement(Replacement::Random(RandomReplacement))
            .build();
        assert!(matches!(missing_termination, Err(GeneticError::Configuration(_))));

        let empty_population = complete().with_population(Vec::new()).build();
        assert!(matches!(empty_population, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_zero_couples_is_rejected() {
        let result = complete()
            .with_options(RunnerOptions::builder().number_of_couples(0).build())
            .build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        // Without a positive weight the phase would fall back to adaptive pursuit
        let result = complete()
            .with_weighted_crossover(Crossover::Uniform(UniformCrossover::default()), -1.0)
            .build();
        assert!(result.is_err());
    }
}
