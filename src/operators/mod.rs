//! Strategy objects plugged into [`crate::algorithms::ga::GeneticAlgorithm`]
//! (spec.md §4.5–§4.8).

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod survival;

pub use crossover::{CrossoverOperator, OnePointCrossover, ThreePointCrossover, TwoPointCrossover};
pub use mutation::{mutate_pair, CentralityMutation, MutationOperator};
pub use selection::{ParentSelector, RandomSelection, TournamentSelection};
pub use survival::{ElitistSurvival, PlainSurvival, SurvivorSelector};
