//! The driver loop (spec.md §4.9): initialise, evaluate, then iterate
//! select → vary → evaluate → select-survivors until a satisfying
//! individual appears or `max_iterations` is reached.
//!
//! Structurally this keeps the teacher's `run`/`run_cancellable` split and
//! `IterationData` callback shape from `moors::algorithms::ga`, generalised
//! from an ndarray-backed multi-objective population to the bit-vector,
//! single-objective population this crate operates on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};

use crate::config::GaConfig;
use crate::error::GaError;
use crate::evaluator::{ClauseDatabase, FitnessEvaluator};
use crate::formula::Formula;
use crate::operators::{mutate_pair, CrossoverOperator, MutationOperator, ParentSelector, SurvivorSelector};
use crate::random::GaRng;
use crate::solution::{Population, Solution};

/// Per-iteration snapshot handed to an optional progress callback, mirroring
/// `moors::algorithms::ga::IterationData`.
pub struct IterationData<'a> {
    pub iteration: usize,
    pub population: &'a Population,
}

/// The GA engine (spec.md §1–§4). Generic over its four pluggable
/// operators, the same shape as the teacher's
/// `GeneticAlgorithm<S, Sel, Sur, Cross, Mut, F, G, DC>`, collapsed to the
/// one sampling strategy (random-respecting-fixed-bits, spec.md §4.4) and
/// one fitness function (UNSAT count, spec.md §4.3) this domain needs.
#[derive(Debug)]
pub struct GeneticAlgorithm<'a, Sel, Cross, Mut, Sur>
where
    Sel: ParentSelector,
    Cross: CrossoverOperator,
    Mut: MutationOperator,
    Sur: SurvivorSelector,
{
    formula: &'a Formula,
    db: &'a dyn ClauseDatabase,
    selector: Sel,
    crossover: Cross,
    mutation: Mut,
    survivor: Sur,
    config: GaConfig,
    population: Option<Population>,
    evaluator: FitnessEvaluator,
    rng: GaRng,
    verbose: bool,
}

impl<'a, Sel, Cross, Mut, Sur> GeneticAlgorithm<'a, Sel, Cross, Mut, Sur>
where
    Sel: ParentSelector,
    Cross: CrossoverOperator,
    Mut: MutationOperator,
    Sur: SurvivorSelector,
{
    pub(crate) fn from_parts(
        formula: &'a Formula,
        db: &'a dyn ClauseDatabase,
        selector: Sel,
        crossover: Cross,
        mutation: Mut,
        survivor: Sur,
        config: GaConfig,
        rng: GaRng,
        verbose: bool,
    ) -> Self {
        let evaluator = FitnessEvaluator::new(config.cache_capacity);
        Self {
            formula,
            db,
            selector,
            crossover,
            mutation,
            survivor,
            config,
            population: None,
            evaluator,
            rng,
            verbose,
        }
    }

    /// The RNG seed this run is using — recoverable so a caller can log a
    /// reproducible run (spec.md §8, scenario E6).
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    pub fn cache_hits(&self) -> u64 {
        self.evaluator.cache_hits()
    }

    pub fn cache_misses(&self) -> u64 {
        self.evaluator.cache_misses()
    }

    /// Builds the initial Population (spec.md §4.4): every unfixed bit is an
    /// independent fair coin flip, every fixed bit takes its pinned value.
    fn initialise_population(&mut self) {
        let n = self.formula.num_variables();
        let worst_fitness = self.formula.num_clauses();
        let mut members = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let mut solution = Solution::new(n + 1, worst_fitness);
            for v in 1..=n {
                let bit = match self.formula.fixed_value(v) {
                    Some(fixed) => fixed,
                    None => self.rng.gen_bool(),
                };
                solution.set_bit_unchecked(v, bit);
            }
            members.push(solution);
        }
        self.population = Some(Population::new(self.config.population_size, members));
    }

    fn evaluate_all(&mut self, members: &mut [Solution]) {
        for solution in members.iter_mut() {
            let fitness = self.evaluator.evaluate(solution, self.db);
            solution.set_fitness(fitness);
        }
    }

    /// Selects parents, pairs them up, and runs crossover + independent
    /// per-child mutation over every pair (spec.md §4.5–§4.7).
    fn vary(&mut self) -> Vec<Solution> {
        let population = self.population.as_ref().expect("population initialised before vary");
        let parents = self.selector.select(population, &mut self.rng);
        let mut offspring = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let (mut child1, mut child2) = self.crossover.cross(
                &pair[0],
                &pair[1],
                self.formula,
                self.config.crossover_rate,
                &mut self.rng,
            );
            mutate_pair(
                &self.mutation,
                &mut child1,
                &mut child2,
                self.formula,
                self.config.mutation_rate,
                &mut self.rng,
            );
            offspring.push(child1);
            offspring.push(child2);
        }
        offspring
    }

    fn step(&mut self) {
        let mut offspring = self.vary();
        self.evaluate_all(&mut offspring);
        let population = self.population.as_ref().expect("population initialised before step");
        let survivors = self.survivor.select(population, offspring, &mut self.rng);
        self.population.as_mut().expect("population initialised before step").replace(survivors);
    }

    /// Runs to completion with no cancellation token or progress callback.
    pub fn run(&mut self) -> Result<Solution, GaError> {
        self.run_cancellable::<for<'b> fn(IterationData<'b>)>(Arc::new(AtomicBool::new(false)), None)
    }

    /// Runs the driver loop of spec.md §4.9, stopping early if `token` is
    /// set to `true` from another thread — preserving the teacher's
    /// `run_cancellable`/`AtomicBool` shape so external callers can impose a
    /// wall-clock deadline (spec.md §5, "Cancellation / timeout") without
    /// this crate exposing a timer itself.
    pub fn run_cancellable<C>(
        &mut self,
        token: Arc<AtomicBool>,
        mut callback: Option<C>,
    ) -> Result<Solution, GaError>
    where
        C: for<'b> FnMut(IterationData<'b>),
    {
        self.initialise_population();
        {
            let mut members = self
                .population
                .take()
                .expect("just initialised")
                .members()
                .to_vec();
            self.evaluate_all(&mut members);
            members.sort_by_key(Solution::fitness);
            self.population = Some(Population::new(self.config.population_size, members));
        }

        self.check_invariants()?;
        if self.population.as_ref().expect("initialised above").best().is_satisfying() {
            return Ok(self.population.as_ref().expect("initialised above").best().clone());
        }

        for iteration in 0..self.config.max_iterations {
            if token.load(Ordering::Relaxed) {
                if self.verbose {
                    info!("GA run cancelled at iteration {iteration}");
                }
                break;
            }

            self.step();

            let population = self.population.as_ref().expect("population initialised before loop");
            if self.verbose {
                info!(
                    "iteration {}: best = {}, worst = {}",
                    iteration + 1,
                    population.best().fitness(),
                    population.worst().fitness()
                );
            }
            debug!(
                "iteration {}: fitness cache hits = {}, misses = {}",
                iteration + 1,
                self.evaluator.cache_hits(),
                self.evaluator.cache_misses()
            );
            if let Some(cb) = &mut callback {
                cb(IterationData {
                    iteration: iteration + 1,
                    population,
                });
            }
            if population.best().is_satisfying() {
                break;
            }
        }

        self.check_invariants()?;
        let population = self.population.as_ref().expect("population initialised before return");
        Ok(population.best().clone())
    }

    /// Release-mode backstop for the two structural invariants spec.md §9
    /// says should be `debug_assert`-checked internally but promoted to a
    /// proper error at the GA's public boundary: every pinned variable must
    /// still hold its fixed value, and the population must still be at its
    /// target size.
    fn check_invariants(&self) -> Result<(), GaError> {
        let population = self
            .population
            .as_ref()
            .expect("population initialised before invariant check");
        if population.len() != population.target_size() {
            return Err(GaError::InvariantViolation(format!(
                "population size drifted to {}, expected {}",
                population.len(),
                population.target_size()
            )));
        }
        for member in population.members() {
            if let Some(var1) = self.formula.first_fixed_violation(member.bits()) {
                return Err(GaError::InvariantViolation(format!(
                    "variable {var1} is pinned but a surviving member disagrees with its fixed value"
                )));
            }
        }
        Ok(())
    }
}

/// Performs the polarity handoff of spec.md §4.10: for every 0-based
/// variable `v`, sets the collaborator's default decision polarity to
/// `solution.bit(v + 1)`.
///
/// Takes `db` mutably and separately from the `GeneticAlgorithm` itself — by
/// the time a caller has a `Solution` in hand, the GA's read-only borrow of
/// `db` has ended, so the mutable handoff borrow never conflicts with it
/// (spec.md §9, "Cycle-free ownership").
pub fn apply_polarity_handoff(solution: &Solution, db: &mut dyn ClauseDatabase) {
    for var0 in 0..db.num_variables() {
        db.set_polarity(var0, solution.bit(var0 + 1));
    }
}
