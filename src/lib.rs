//! # saga-core
//!
//! A genetic-algorithm engine that searches for a high-quality initial truth
//! assignment — a *polarity seed* — for a downstream CDCL SAT solver. Given
//! a CNF formula, the GA evolves a population of candidate assignments,
//! minimising the number of unsatisfied clauses, and hands its fittest
//! individual to the solver as branching-polarity hints.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use saga_core::algorithms::GeneticAlgorithmSpecBuilder;
//! use saga_core::config::GaConfig;
//! use saga_core::operators::{CentralityMutation, ElitistSurvival, OnePointCrossover, TournamentSelection};
//! use saga_core::solver::ReferenceSolver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dimacs = "p cnf 3 2\n1 2 0\n-2 3 0\n";
//! let (formula, mut solver) = ReferenceSolver::from_dimacs_str(dimacs)?;
//!
//! let mut ga = GeneticAlgorithmSpecBuilder::default()
//!     .formula(&formula)
//!     .db(&solver)
//!     .selector(TournamentSelection)
//!     .crossover(OnePointCrossover)
//!     .mutation(CentralityMutation)
//!     .survivor(ElitistSurvival)
//!     .config(GaConfig { seed: Some(1), ..GaConfig::default() })
//!     .build()?;
//!
//! let best = ga.run()?;
//! saga_core::algorithms::apply_polarity_handoff(&best, &mut solver);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module map
//!
//! - [`formula`] — the post-parse, read-only CNF view and its DIMACS parser.
//! - [`solution`] — `Solution` (one candidate assignment) and `Population`.
//! - [`cache`], [`evaluator`] — the fitness cache and the evaluator that
//!   counts unsatisfied clauses.
//! - [`operators`] — selection, crossover, mutation, and survivor-selection
//!   strategies.
//! - [`random`] — the explicitly-threaded RNG wrapper.
//! - [`algorithms`] — the driver loop and its builder.
//! - [`solver`] — the `ClauseDatabase` contract and a reference
//!   implementation.
//! - [`config`] — run configuration and the `saga` CLI's argument surface.
//! - [`error`] — the crate's error taxonomy.

pub mod algorithms;
pub mod cache;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod operators;
pub mod random;
pub mod solution;
pub mod solver;

pub use algorithms::{apply_polarity_handoff, GeneticAlgorithm, GeneticAlgorithmSpecBuilder};
pub use error::GaError;
pub use formula::Formula;
pub use solution::{Population, Solution};
