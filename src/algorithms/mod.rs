//! The GA driver and its builder (spec.md §4.9, §4.10).

pub mod builder;
pub mod ga;

pub use builder::GeneticAlgorithmSpecBuilder;
pub use ga::{apply_polarity_handoff, GeneticAlgorithm, IterationData};
