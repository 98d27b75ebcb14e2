//! Memetic algorithm.

use super::config::MemeticConfig;
use super::crossover::Crossover;
use super::generation::{best_of, select_parents};
use super::replacement::Replacement;
use super::selection::ParentSelection;
use crate::error::{ConfigError, ConfigResult};
use crate::heuristics::{Heuristic, Mutation};
use crate::problem::{PopulationLayout, Problem};
use crate::search::SearchMethod;
use rand::RngCore;
use tracing::{debug, trace};

/// A genetic algorithm whose offspring are refined by local search.
///
/// One tick is one generation:
///
/// 1. For each pair position `i = 0, 2, ..., P-2`, select two parents
///    (duplicate picks resolved by [`select_parents`]).
/// 2. Cross them into `P+i` and `P+i+1`, mutate both children, then apply
///    local search to both.
/// 3. Run the replacement once over `[0, 2P)`.
///
/// Built with [`MemeticAlgorithm::builder`]; every operator is required.
pub struct MemeticAlgorithm {
    config: MemeticConfig,
    layout: PopulationLayout,
    crossover: Box<dyn Crossover>,
    mutation: Box<dyn Mutation>,
    local_search: Box<dyn Heuristic>,
    parent1: Box<dyn ParentSelection>,
    parent2: Box<dyn ParentSelection>,
    replacement: Box<dyn Replacement>,
    generation: usize,
}

/// Assembles a [`MemeticAlgorithm`].
///
/// # Examples
///
/// ```
/// use u_memetic::heuristics::{BitMutation, DavisBitHc};
/// use u_memetic::population::{
///     ElitistReplacement, MemeticAlgorithm, MemeticConfig, TournamentSelection,
///     UniformCrossover,
/// };
///
/// let ma = MemeticAlgorithm::builder(MemeticConfig::default())
///     .crossover(UniformCrossover)
///     .mutation(BitMutation::default())
///     .local_search(DavisBitHc::new())
///     .parent_selection(TournamentSelection::new(3).unwrap(), TournamentSelection::new(3).unwrap())
///     .replacement(ElitistReplacement)
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct MemeticBuilder {
    config: MemeticConfig,
    crossover: Option<Box<dyn Crossover>>,
    mutation: Option<Box<dyn Mutation>>,
    local_search: Option<Box<dyn Heuristic>>,
    parent1: Option<Box<dyn ParentSelection>>,
    parent2: Option<Box<dyn ParentSelection>>,
    replacement: Option<Box<dyn Replacement>>,
}

impl MemeticBuilder {
    pub fn crossover(mut self, op: impl Crossover + 'static) -> Self {
        self.crossover = Some(Box::new(op));
        self
    }

    pub fn mutation(mut self, op: impl Mutation + 'static) -> Self {
        self.mutation = Some(Box::new(op));
        self
    }

    pub fn local_search(mut self, op: impl Heuristic + 'static) -> Self {
        self.local_search = Some(Box::new(op));
        self
    }

    /// Selection operators for the first and second parent.
    pub fn parent_selection(
        mut self,
        first: impl ParentSelection + 'static,
        second: impl ParentSelection + 'static,
    ) -> Self {
        self.parent1 = Some(Box::new(first));
        self.parent2 = Some(Box::new(second));
        self
    }

    pub fn replacement(mut self, op: impl Replacement + 'static) -> Self {
        self.replacement = Some(Box::new(op));
        self
    }

    /// Validates the configuration and checks that no operator is missing.
    pub fn build(self) -> ConfigResult<MemeticAlgorithm> {
        let layout = self.config.layout()?;
        Ok(MemeticAlgorithm {
            config: self.config,
            layout,
            crossover: self.crossover.ok_or(ConfigError::MissingOperator("crossover"))?,
            mutation: self.mutation.ok_or(ConfigError::MissingOperator("mutation"))?,
            local_search: self
                .local_search
                .ok_or(ConfigError::MissingOperator("local_search"))?,
            parent1: self
                .parent1
                .ok_or(ConfigError::MissingOperator("parent_selection"))?,
            parent2: self
                .parent2
                .ok_or(ConfigError::MissingOperator("parent_selection"))?,
            replacement: self
                .replacement
                .ok_or(ConfigError::MissingOperator("replacement"))?,
            generation: 0,
        })
    }
}

impl MemeticAlgorithm {
    /// Starts assembling an algorithm with the given configuration.
    pub fn builder(config: MemeticConfig) -> MemeticBuilder {
        MemeticBuilder {
            config,
            ..MemeticBuilder::default()
        }
    }

    /// Index layout in use.
    pub fn layout(&self) -> PopulationLayout {
        self.layout
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

impl SearchMethod for MemeticAlgorithm {
    fn name(&self) -> &str {
        "Memetic Algorithm"
    }

    fn initialize(&mut self, problem: &mut dyn Problem, _rng: &mut dyn RngCore) -> ConfigResult<()> {
        if problem.number_of_variables() == 0 {
            return Err(ConfigError::NoVariables);
        }
        self.layout.check_memory(problem.memory_size())?;
        self.local_search.validate(problem)?;
        debug!(
            population = self.layout.size(),
            crossover = self.crossover.name(),
            mutation = self.mutation.name(),
            local_search = self.local_search.name(),
            replacement = self.replacement.name(),
            "memetic algorithm initialized"
        );
        Ok(())
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        let layout = self.layout;
        for i in (0..layout.size()).step_by(2) {
            let (p1, p2) = select_parents(
                &*self.parent1,
                &*self.parent2,
                problem,
                layout,
                rng,
            );
            let (c1, c2) = layout.offspring_pair(i);

            self.crossover.crossover(problem, p1, p2, c1, c2, rng);
            self.mutation
                .mutate(problem, c1, self.config.mutation_intensity, rng);
            self.mutation
                .mutate(problem, c2, self.config.mutation_intensity, rng);
            self.local_search.apply(problem, c1, rng);
            self.local_search.apply(problem, c2, rng);
        }
        self.replacement.replace(problem, layout);

        self.generation += 1;
        trace!(
            generation = self.generation,
            best = self.incumbent_value(problem),
            "memetic generation"
        );
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        best_of(problem, self.layout.population()).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{BitMutation, DavisBitHc, NoopHeuristic};
    use crate::population::{
        BasicReplacement, ElitistReplacement, FittestSelection, TournamentSelection,
        UniformCrossover,
    };
    use crate::random::create_rng;
    use crate::sat::{Formula, SatProblem};
    use crate::test_support::WeightedBits;

    fn elitist(population: usize) -> MemeticAlgorithm {
        MemeticAlgorithm::builder(MemeticConfig::default().with_population_size(population))
            .crossover(UniformCrossover)
            .mutation(BitMutation::default())
            .local_search(NoopHeuristic)
            .parent_selection(
                TournamentSelection::new(3).unwrap(),
                TournamentSelection::new(3).unwrap(),
            )
            .replacement(ElitistReplacement)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_operator_fails_fast() {
        let result = MemeticAlgorithm::builder(MemeticConfig::default())
            .crossover(UniformCrossover)
            .mutation(BitMutation::default())
            .parent_selection(FittestSelection, FittestSelection)
            .replacement(BasicReplacement)
            .build();
        assert_eq!(
            result.err(),
            Some(ConfigError::MissingOperator("local_search"))
        );
    }

    #[test]
    fn test_odd_population_rejected() {
        let config = MemeticConfig::default().with_population_size(5);
        let result = MemeticAlgorithm::builder(config).build();
        assert_eq!(result.err(), Some(ConfigError::InvalidPopulationSize(5)));
    }

    #[test]
    fn test_initialize_checks_memory() {
        let mut problem = WeightedBits::new(vec![1.0; 4], 6);
        let mut rng = create_rng(0);
        let mut ma = elitist(4);
        assert_eq!(
            ma.initialize(&mut problem, &mut rng),
            Err(ConfigError::InsufficientMemory {
                required: 8,
                available: 6
            })
        );
    }

    #[test]
    fn test_two_member_generation_with_fittest_selection() {
        // P = 2, parents cost 3.0 and 5.0; both selections pick slot 0,
        // the duplicate rule forces the second parent to slot 1.
        let mut problem = WeightedBits::new(vec![3.0, 5.0, 0.0, 0.0], 4);
        problem.set(0, &[true, false, false, false]);
        problem.set(1, &[false, true, false, false]);
        let mut rng = create_rng(9);
        let config = MemeticConfig::default()
            .with_population_size(2)
            .with_mutation_intensity(0);
        let mut ma = MemeticAlgorithm::builder(config)
            .crossover(UniformCrossover)
            .mutation(BitMutation::default())
            .local_search(NoopHeuristic)
            .parent_selection(FittestSelection, FittestSelection)
            .replacement(BasicReplacement)
            .build()
            .unwrap();
        ma.initialize(&mut problem, &mut rng).unwrap();
        ma.run_main_loop(&mut problem, &mut rng);

        // Children recombine the two distinct parents bit by bit.
        for bit in 0..4 {
            let mut pair = [problem.slots[0][bit], problem.slots[1][bit]];
            pair.sort();
            let expected = if bit < 2 { [false, true] } else { [false, false] };
            assert_eq!(pair, expected);
        }
        assert_eq!(problem.objective_value(0) + problem.objective_value(1), 8.0);
        assert_eq!(ma.generation(), 1);
    }

    #[test]
    fn test_elitist_best_never_worsens() {
        let mut rng = create_rng(42);
        let formula = Formula::random(40, 170, 3, &mut rng);
        let mut problem = SatProblem::new(formula, 20, &mut rng);
        let mut ma = elitist(10);
        ma.initialize(&mut problem, &mut rng).unwrap();

        let mut best = ma.incumbent_value(&problem);
        for _ in 0..30 {
            ma.run_main_loop(&mut problem, &mut rng);
            let next = ma.incumbent_value(&problem);
            assert!(next <= best, "best worsened from {best} to {next}");
            best = next;
        }
    }

    #[test]
    fn test_memetic_improves_sat() {
        let mut rng = create_rng(7);
        let formula = Formula::random(50, 210, 3, &mut rng);
        let mut problem = SatProblem::new(formula, 16, &mut rng);
        let mut ma = MemeticAlgorithm::builder(MemeticConfig::default().with_population_size(8))
            .crossover(UniformCrossover)
            .mutation(BitMutation::default())
            .local_search(DavisBitHc::new())
            .parent_selection(
                TournamentSelection::new(3).unwrap(),
                TournamentSelection::new(3).unwrap(),
            )
            .replacement(ElitistReplacement)
            .build()
            .unwrap();
        ma.initialize(&mut problem, &mut rng).unwrap();
        let start = ma.incumbent_value(&problem);
        for _ in 0..10 {
            ma.run_main_loop(&mut problem, &mut rng);
        }
        assert!(ma.incumbent_value(&problem) < start);
    }
}
