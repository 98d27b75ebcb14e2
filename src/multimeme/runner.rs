//! Multimeme algorithm runner.

use super::config::MultiMemeConfig;
use super::inheritance::MemeplexInheritance;
use crate::error::{ConfigError, ConfigResult};
use crate::heuristics::{Heuristic, Mutation};
use crate::population::{best_of, select_parents, Crossover, ParentSelection, Replacement};
use crate::problem::{MemoryIndex, PopulationLayout, Problem};
use crate::search::SearchMethod;
use rand::{Rng, RngCore};
use tracing::{debug, trace};

/// Memetic algorithm with per-individual operator choice.
///
/// One tick is one generation. For each pair position `i = 0, 2, ..., P-2`:
///
/// 1. select two parents (duplicate picks resolved by [`select_parents`]);
/// 2. cross them into `P+i` and `P+i+1`;
/// 3. let the children inherit a memeplex;
/// 4. reassign each child meme with probability `innovation_rate`;
/// 5. mutate each child with the intensity its memeplex names;
/// 6. improve each child with the local search its memeplex names.
///
/// Finally the replacement runs once over `[0, 2P)`.
pub struct MultiMemeAlgorithm {
    config: MultiMemeConfig,
    layout: PopulationLayout,
    crossover: Box<dyn Crossover>,
    mutation: Box<dyn Mutation>,
    inheritance: Box<dyn MemeplexInheritance>,
    parent1: Box<dyn ParentSelection>,
    parent2: Box<dyn ParentSelection>,
    replacement: Box<dyn Replacement>,
    local_searches: Vec<Box<dyn Heuristic>>,
    generation: usize,
}

/// Assembles a [`MultiMemeAlgorithm`].
///
/// Local-search operators are registered in option order: the first call
/// to [`local_search`](Self::local_search) is option 0.
///
/// # Examples
///
/// ```
/// use u_memetic::heuristics::{BitMutation, DavisBitHc, SteepestDescentHc};
/// use u_memetic::multimeme::{MultiMemeAlgorithm, MultiMemeConfig, SimpleInheritance};
/// use u_memetic::population::{ElitistReplacement, TournamentSelection, UniformCrossover};
///
/// let mma = MultiMemeAlgorithm::builder(MultiMemeConfig::new(vec![6, 2]))
///     .crossover(UniformCrossover)
///     .mutation(BitMutation::default())
///     .inheritance(SimpleInheritance)
///     .parent_selection(TournamentSelection::new(3).unwrap(), TournamentSelection::new(3).unwrap())
///     .replacement(ElitistReplacement)
///     .local_search(DavisBitHc::new())
///     .local_search(SteepestDescentHc)
///     .build()
///     .unwrap();
/// ```
pub struct MultiMemeBuilder {
    config: MultiMemeConfig,
    crossover: Option<Box<dyn Crossover>>,
    mutation: Option<Box<dyn Mutation>>,
    inheritance: Option<Box<dyn MemeplexInheritance>>,
    parent1: Option<Box<dyn ParentSelection>>,
    parent2: Option<Box<dyn ParentSelection>>,
    replacement: Option<Box<dyn Replacement>>,
    local_searches: Vec<Box<dyn Heuristic>>,
}

impl MultiMemeBuilder {
    pub fn crossover(mut self, op: impl Crossover + 'static) -> Self {
        self.crossover = Some(Box::new(op));
        self
    }

    pub fn mutation(mut self, op: impl Mutation + 'static) -> Self {
        self.mutation = Some(Box::new(op));
        self
    }

    pub fn inheritance(mut self, op: impl MemeplexInheritance + 'static) -> Self {
        self.inheritance = Some(Box::new(op));
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

    /// Appends a local-search operator to the option table.
    pub fn local_search(mut self, op: impl Heuristic + 'static) -> Self {
        self.local_searches.push(Box::new(op));
        self
    }

    /// Validates the configuration, the operator table and that no operator
    /// is missing.
    pub fn build(self) -> ConfigResult<MultiMemeAlgorithm> {
        self.config.validate()?;
        let layout = self.config.layout()?;

        let options = self.config.local_search_options();
        if self.local_searches.is_empty() {
            return Err(ConfigError::MissingOperator("local_search"));
        }
        if options != self.local_searches.len() {
            return Err(ConfigError::LocalSearchTableMismatch {
                options,
                operators: self.local_searches.len(),
            });
        }

        Ok(MultiMemeAlgorithm {
            config: self.config,
            layout,
            crossover: self.crossover.ok_or(ConfigError::MissingOperator("crossover"))?,
            mutation: self.mutation.ok_or(ConfigError::MissingOperator("mutation"))?,
            inheritance: self
                .inheritance
                .ok_or(ConfigError::MissingOperator("inheritance"))?,
            parent1: self
                .parent1
                .ok_or(ConfigError::MissingOperator("parent_selection"))?,
            parent2: self
                .parent2
                .ok_or(ConfigError::MissingOperator("parent_selection"))?,
            replacement: self
                .replacement
                .ok_or(ConfigError::MissingOperator("replacement"))?,
            local_searches: self.local_searches,
            generation: 0,
        })
    }
}

impl MultiMemeAlgorithm {
    /// Starts assembling an algorithm with the given configuration.
    pub fn builder(config: MultiMemeConfig) -> MultiMemeBuilder {
        MultiMemeBuilder {
            config,
            crossover: None,
            mutation: None,
            inheritance: None,
            parent1: None,
            parent2: None,
            replacement: None,
            local_searches: Vec::new(),
        }
    }

    pub fn config(&self) -> &MultiMemeConfig {
        &self.config
    }

    /// Index layout in use.
    pub fn layout(&self) -> PopulationLayout {
        self.layout
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// How many members of `[0, P)` currently hold each option of `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is not a configured meme slot.
    pub fn option_counts(&self, problem: &dyn Problem, slot: usize) -> Vec<usize> {
        let mut counts = vec![0; self.config.options_per_meme[slot]];
        for index in self.layout.population() {
            counts[problem.meme_option(index, slot)] += 1;
        }
        counts
    }

    /// Reassigns each meme of `index` with probability `innovation_rate`.
    fn innovate(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        for (slot, &options) in self.config.options_per_meme.iter().enumerate() {
            if rng.random::<f64>() < self.config.innovation_rate {
                problem.set_meme_option(index, slot, rng.random_range(0..options));
            }
        }
    }

    fn mutate(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        let intensity = problem.meme_option(index, self.config.roles.intensity_slot);
        self.mutation.mutate(problem, index, intensity, rng);
    }

    fn improve(&self, problem: &mut dyn Problem, index: MemoryIndex, rng: &mut dyn RngCore) {
        let option = problem.meme_option(index, self.config.roles.local_search_slot);
        self.local_searches[option].apply(problem, index, rng);
    }
}

impl SearchMethod for MultiMemeAlgorithm {
    fn name(&self) -> &str {
        "Multimeme Memetic Algorithm"
    }

    /// Checks the composition against `problem` and draws a random
    /// memeplex for every member of `[0, P)`.
    fn initialize(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) -> ConfigResult<()> {
        if problem.number_of_variables() == 0 {
            return Err(ConfigError::NoVariables);
        }
        self.config.validate_for(problem)?;
        self.layout.check_memory(problem.memory_size())?;
        for op in &self.local_searches {
            op.validate(problem)?;
        }

        for index in self.layout.population() {
            for (slot, &options) in self.config.options_per_meme.iter().enumerate() {
                problem.set_meme_option(index, slot, rng.random_range(0..options));
            }
        }

        debug!(
            population = self.layout.size(),
            innovation_rate = self.config.innovation_rate,
            options = ?self.config.options_per_meme,
            local_searches = self.local_searches.len(),
            "multimeme initialized"
        );
        Ok(())
    }

    fn run_main_loop(&mut self, problem: &mut dyn Problem, rng: &mut dyn RngCore) {
        let layout = self.layout;
        for i in (0..layout.size()).step_by(2) {
            let (p1, p2) = select_parents(&*self.parent1, &*self.parent2, problem, layout, rng);
            let (c1, c2) = layout.offspring_pair(i);

            self.crossover.crossover(problem, p1, p2, c1, c2, rng);
            self.inheritance.inherit(problem, p1, p2, c1, c2, rng);
            for child in [c1, c2] {
                self.innovate(problem, child, rng);
            }
            for child in [c1, c2] {
                self.mutate(problem, child, rng);
            }
            for child in [c1, c2] {
                self.improve(problem, child, rng);
            }
        }
        self.replacement.replace(problem, layout);

        self.generation += 1;
        trace!(
            generation = self.generation,
            best = self.incumbent_value(problem),
            "multimeme generation"
        );
    }

    fn incumbent_value(&self, problem: &dyn Problem) -> f64 {
        best_of(problem, self.layout.population()).1
    }
}
